use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, AccountError};

#[async_trait]
pub trait UpdateHandleUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, handle: &str) -> Result<Account, AccountError>;
}
