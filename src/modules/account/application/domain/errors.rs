use crate::modules::account::application::ports::outgoing::account_repository::{
    AccountRepositoryError, ConflictKind,
};

/// Domain error taxonomy shared by every account use case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("invalid handle")]
    InvalidHandle,

    #[error("invalid phone")]
    InvalidPhone,

    #[error("handle already exists")]
    HandleConflict,

    #[error("phone already exists")]
    PhoneConflict,

    #[error("account not found")]
    NotFound,

    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl From<AccountRepositoryError> for AccountError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::Conflict(ConflictKind::Phone) => AccountError::PhoneConflict,
            // An unattributed unique violation is reported as a handle clash
            AccountRepositoryError::Conflict(ConflictKind::Handle | ConflictKind::Unknown) => {
                AccountError::HandleConflict
            }
            AccountRepositoryError::NotFound => AccountError::NotFound,
            AccountRepositoryError::DatabaseError(msg) => AccountError::StorageFailure(msg),
        }
    }
}
