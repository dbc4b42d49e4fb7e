use async_trait::async_trait;

use crate::modules::account::application::domain::{Account, AccountError};

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateAccountUseCase: Send + Sync {
    /// Registers a new account for `phone` under a freshly generated handle.
    async fn execute(&self, phone: &str) -> Result<Account, AccountError>;
}
