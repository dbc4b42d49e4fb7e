use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::account::application::domain::{Account, AccountError, Phone};
use crate::modules::account::application::ports::incoming::use_cases::CreateAccountUseCase;
use crate::modules::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ConflictKind, HandleGenerator,
};

/// Upper bound on insert attempts before a handle clash is reported.
pub const MAX_HANDLE_GENERATION_ATTEMPTS: usize = 10;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateAccountService<R, G>
where
    R: AccountRepository,
    G: HandleGenerator,
{
    account_repository: R,
    handle_generator: G,
}

impl<R, G> CreateAccountService<R, G>
where
    R: AccountRepository,
    G: HandleGenerator,
{
    pub fn new(account_repository: R, handle_generator: G) -> Self {
        Self {
            account_repository,
            handle_generator,
        }
    }
}

#[async_trait]
impl<R, G> CreateAccountUseCase for CreateAccountService<R, G>
where
    R: AccountRepository + Send + Sync,
    G: HandleGenerator + Send + Sync,
{
    async fn execute(&self, phone: &str) -> Result<Account, AccountError> {
        let phone = Phone::parse(phone)?;

        // One id for the whole call, only the handle changes between attempts
        let id = Uuid::new_v4();

        for attempt in 1..=MAX_HANDLE_GENERATION_ATTEMPTS {
            let handle = self.handle_generator.generate();

            match self
                .account_repository
                .create(id, handle, phone.clone())
                .await
            {
                Ok(account) => return Ok(account),
                Err(AccountRepositoryError::Conflict(ConflictKind::Handle | ConflictKind::Unknown)) => {
                    warn!(%id, attempt, "generated handle already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        error!(
            %id,
            attempts = MAX_HANDLE_GENERATION_ATTEMPTS,
            "could not find a free handle"
        );
        Err(AccountError::HandleConflict)
    }
}
