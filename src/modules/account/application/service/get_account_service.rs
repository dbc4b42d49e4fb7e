use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, AccountError};
use crate::modules::account::application::ports::incoming::use_cases::GetAccountUseCase;
use crate::modules::account::application::ports::outgoing::AccountRepository;

pub struct GetAccountService<R>
where
    R: AccountRepository,
{
    account_repository: R,
}

impl<R> GetAccountService<R>
where
    R: AccountRepository,
{
    pub fn new(account_repository: R) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl<R> GetAccountUseCase for GetAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Account, AccountError> {
        Ok(self.account_repository.get_by_id(id).await?)
    }
}
