use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::AccountError;

#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    /// Soft-deletes an active account. The handle and phone stay reserved.
    async fn execute(&self, id: Uuid) -> Result<(), AccountError>;
}
