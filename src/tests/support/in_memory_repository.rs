use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, Handle, Phone};
use crate::modules::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ConflictKind,
};

/// In-process stand-in for the accounts table.
///
/// Handles and phones stay unique across every row, deleted ones included,
/// which mirrors the table's unique indexes. Reads and writes only see rows
/// whose `deleted_at` is unset. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    rows: Arc<Mutex<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw row access, deleted rows included.
    pub fn row(&self, id: Uuid) -> Option<Account> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

/// Strictly later than `prev`, so consecutive writes order cleanly.
fn tick(prev: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(prev + Duration::microseconds(1))
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(
        &self,
        id: Uuid,
        handle: Handle,
        phone: Phone,
    ) -> Result<Account, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.contains_key(&id) {
            return Err(AccountRepositoryError::Conflict(ConflictKind::Unknown));
        }
        if rows.values().any(|a| a.handle == handle.as_str()) {
            return Err(AccountRepositoryError::Conflict(ConflictKind::Handle));
        }
        if rows.values().any(|a| a.phone == phone.as_str()) {
            return Err(AccountRepositoryError::Conflict(ConflictKind::Phone));
        }

        let now = Utc::now();
        let account = Account {
            id,
            handle: handle.into_inner(),
            phone: phone.into_inner(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.insert(id, account.clone());
        Ok(account)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Account, AccountRepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|a| a.is_active())
            .cloned()
            .ok_or(AccountRepositoryError::NotFound)
    }

    async fn update_handle(
        &self,
        id: Uuid,
        handle: Handle,
    ) -> Result<Account, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if !rows.get(&id).is_some_and(Account::is_active) {
            return Err(AccountRepositoryError::NotFound);
        }
        if rows
            .values()
            .any(|a| a.id != id && a.handle == handle.as_str())
        {
            return Err(AccountRepositoryError::Conflict(ConflictKind::Handle));
        }

        let account = rows.get_mut(&id).ok_or(AccountRepositoryError::NotFound)?;
        account.handle = handle.into_inner();
        account.updated_at = tick(account.updated_at);
        Ok(account.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        match rows.get_mut(&id).filter(|a| a.is_active()) {
            Some(account) => {
                let now = tick(account.updated_at);
                account.deleted_at = Some(now);
                account.updated_at = now;
                Ok(())
            }
            None => Err(AccountRepositoryError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(raw: &str) -> Handle {
        Handle::parse(raw).unwrap()
    }

    fn phone(raw: &str) -> Phone {
        Phone::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_deleted_rows_keep_their_handle_and_phone_reserved() {
        let repo = InMemoryAccountRepository::new();
        let id = Uuid::new_v4();
        repo.create(id, handle("@nick_1"), phone("+15550000001"))
            .await
            .unwrap();
        repo.delete(id).await.unwrap();

        let same_phone = repo
            .create(Uuid::new_v4(), handle("@nick_2"), phone("+15550000001"))
            .await;
        let same_handle = repo
            .create(Uuid::new_v4(), handle("@nick_1"), phone("+15550000002"))
            .await;

        assert_eq!(
            same_phone.unwrap_err(),
            AccountRepositoryError::Conflict(ConflictKind::Phone)
        );
        assert_eq!(
            same_handle.unwrap_err(),
            AccountRepositoryError::Conflict(ConflictKind::Handle)
        );
        assert!(repo.row(id).unwrap().deleted_at.is_some());
    }

    #[tokio::test]
    async fn test_update_to_own_handle_is_allowed() {
        let repo = InMemoryAccountRepository::new();
        let id = Uuid::new_v4();
        let created = repo
            .create(id, handle("@nick_1"), phone("+15550000001"))
            .await
            .unwrap();

        let updated = repo.update_handle(id, handle("@nick_1")).await.unwrap();

        assert!(updated.updated_at > created.updated_at);
    }
}
