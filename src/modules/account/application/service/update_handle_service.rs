use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, AccountError, Handle};
use crate::modules::account::application::ports::incoming::use_cases::UpdateHandleUseCase;
use crate::modules::account::application::ports::outgoing::AccountRepository;

pub struct UpdateHandleService<R>
where
    R: AccountRepository,
{
    account_repository: R,
}

impl<R> UpdateHandleService<R>
where
    R: AccountRepository,
{
    pub fn new(account_repository: R) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl<R> UpdateHandleUseCase for UpdateHandleService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, handle: &str) -> Result<Account, AccountError> {
        let handle = Handle::parse(handle)?;

        Ok(self.account_repository.update_handle(id, handle).await?)
    }
}
