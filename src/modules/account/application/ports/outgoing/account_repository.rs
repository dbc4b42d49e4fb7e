use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, Handle, Phone};

/// Which unique constraint a rejected write ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Handle,
    Phone,
    /// The store reported a unique violation without naming the constraint.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("unique constraint violated ({0:?})")]
    Conflict(ConflictKind),

    #[error("account not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Persistence port for accounts.
///
/// Every read and mutation only sees active rows (`deleted_at IS NULL`).
/// Uniqueness of handle and phone is enforced by the store and reported
/// back as [`AccountRepositoryError::Conflict`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(
        &self,
        id: Uuid,
        handle: Handle,
        phone: Phone,
    ) -> Result<Account, AccountRepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Account, AccountRepositoryError>;

    async fn update_handle(
        &self,
        id: Uuid,
        handle: Handle,
    ) -> Result<Account, AccountRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AccountRepositoryError>;
}
