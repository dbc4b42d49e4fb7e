use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::AccountError;
use crate::modules::account::application::ports::incoming::use_cases::DeleteAccountUseCase;
use crate::modules::account::application::ports::outgoing::AccountRepository;

pub struct DeleteAccountService<R>
where
    R: AccountRepository,
{
    account_repository: R,
}

impl<R> DeleteAccountService<R>
where
    R: AccountRepository,
{
    pub fn new(account_repository: R) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl<R> DeleteAccountUseCase for DeleteAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), AccountError> {
        Ok(self.account_repository.delete(id).await?)
    }
}
