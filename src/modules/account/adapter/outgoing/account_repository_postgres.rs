use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    RuntimeErr, Set,
};
use uuid::Uuid;

use crate::modules::account::adapter::outgoing::sea_orm_entity::accounts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::account::application::domain::{Account, Handle, Phone};
use crate::modules::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ConflictKind,
};
use crate::telemetry::{DbOutcome, Metrics};

/// Unique constraint names created by the accounts migration.
const HANDLE_CONSTRAINT: &str = "accounts_handle_key";
const PHONE_CONSTRAINT: &str = "accounts_phone_key";

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

const DEADLINE_EXCEEDED: &str = "deadline exceeded";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    metrics: Metrics,
    query_timeout: Duration,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, metrics: Metrics, query_timeout: Duration) -> Self {
        Self {
            db,
            metrics,
            query_timeout,
        }
    }

    /// Runs one storage call under the query deadline and records its
    /// outcome and latency for `method`.
    async fn observed<T, F>(&self, method: &'static str, query: F) -> Result<T, AccountRepositoryError>
    where
        F: Future<Output = Result<T, AccountRepositoryError>>,
    {
        let timer = self.metrics.db_timer(method);

        let result = tokio::time::timeout(self.query_timeout, query)
            .await
            .unwrap_or_else(|_| {
                Err(AccountRepositoryError::DatabaseError(
                    DEADLINE_EXCEEDED.to_string(),
                ))
            });

        timer.finish(outcome_of(&result));
        result
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    #[tracing::instrument(name = "db.create", skip_all, fields(account_id = %id))]
    async fn create(
        &self,
        id: Uuid,
        handle: Handle,
        phone: Phone,
    ) -> Result<Account, AccountRepositoryError> {
        // Timestamps come from the column defaults so that both share the
        // store clock and start out equal
        let model = ActiveModel {
            id: Set(id),
            handle: Set(handle.into_inner()),
            phone: Set(phone.into_inner()),
            created_at: NotSet,
            updated_at: NotSet,
            deleted_at: NotSet,
        };

        self.observed("create", async {
            model
                .insert(&*self.db)
                .await
                .map(model_to_account)
                .map_err(map_write_err)
        })
        .await
    }

    #[tracing::instrument(name = "db.get_by_id", skip_all, fields(account_id = %id))]
    async fn get_by_id(&self, id: Uuid) -> Result<Account, AccountRepositoryError> {
        self.observed("get_by_id", async {
            Entity::find_by_id(id)
                .filter(Column::DeletedAt.is_null())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(model_to_account)
                .ok_or(AccountRepositoryError::NotFound)
        })
        .await
    }

    #[tracing::instrument(name = "db.update_handle", skip_all, fields(account_id = %id))]
    async fn update_handle(
        &self,
        id: Uuid,
        handle: Handle,
    ) -> Result<Account, AccountRepositoryError> {
        self.observed("update_handle", async {
            Entity::update_many()
                .col_expr(Column::Handle, Expr::value(handle.into_inner()))
                .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
                .filter(Column::Id.eq(id))
                .filter(Column::DeletedAt.is_null())
                .exec_with_returning(&*self.db)
                .await
                .map_err(map_write_err)?
                .into_iter()
                .next()
                .map(model_to_account)
                .ok_or(AccountRepositoryError::NotFound)
        })
        .await
    }

    #[tracing::instrument(name = "db.delete", skip_all, fields(account_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<(), AccountRepositoryError> {
        self.observed("delete", async {
            let res = Entity::update_many()
                .col_expr(Column::DeletedAt, Expr::current_timestamp().into())
                .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
                .filter(Column::Id.eq(id))
                .filter(Column::DeletedAt.is_null())
                .exec(&*self.db)
                .await
                .map_err(map_db_err)?;

            match res.rows_affected {
                0 => Err(AccountRepositoryError::NotFound),
                _ => Ok(()),
            }
        })
        .await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_account(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        handle: model.handle,
        phone: model.phone,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        deleted_at: model.deleted_at.map(Into::into),
    }
}

fn outcome_of<T>(result: &Result<T, AccountRepositoryError>) -> DbOutcome {
    match result {
        Ok(_) => DbOutcome::Ok,
        Err(AccountRepositoryError::Conflict(_)) => DbOutcome::Conflict,
        Err(AccountRepositoryError::NotFound) => DbOutcome::NotFound,
        Err(AccountRepositoryError::DatabaseError(_)) => DbOutcome::Error,
    }
}

fn map_db_err(e: DbErr) -> AccountRepositoryError {
    AccountRepositoryError::DatabaseError(e.to_string())
}

fn map_write_err(e: DbErr) -> AccountRepositoryError {
    match unique_violation(&e) {
        Some(kind) => AccountRepositoryError::Conflict(kind),
        None => map_db_err(e),
    }
}

/// Decides whether `e` is a unique violation and which constraint fired.
fn unique_violation(e: &DbErr) -> Option<ConflictKind> {
    // Driver errors carry the SQLSTATE and the constraint name
    if let Some(db_err) = driver_error(e) {
        if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
            return None;
        }
        return Some(match db_err.constraint() {
            Some(HANDLE_CONSTRAINT) => ConflictKind::Handle,
            Some(PHONE_CONSTRAINT) => ConflictKind::Phone,
            _ => ConflictKind::Unknown,
        });
    }

    let msg = e.to_string().to_lowercase();
    if !(msg.contains(UNIQUE_VIOLATION)
        || msg.contains("duplicate key")
        || msg.contains("unique constraint"))
    {
        return None;
    }

    if msg.contains(HANDLE_CONSTRAINT) {
        Some(ConflictKind::Handle)
    } else if msg.contains(PHONE_CONSTRAINT) {
        Some(ConflictKind::Phone)
    } else {
        Some(ConflictKind::Unknown)
    }
}

fn driver_error(e: &DbErr) -> Option<&(dyn sqlx::error::DatabaseError + 'static)> {
    match e {
        DbErr::Exec(RuntimeErr::SqlxError(err)) | DbErr::Query(RuntimeErr::SqlxError(err)) => {
            err.as_database_error()
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
