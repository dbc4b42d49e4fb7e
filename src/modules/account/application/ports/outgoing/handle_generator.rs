use crate::modules::account::application::domain::Handle;

/// Source of candidate handles for new accounts.
pub trait HandleGenerator: Send + Sync {
    fn generate(&self) -> Handle;
}
