pub mod account_repository;
pub mod handle_generator;

pub use account_repository::{AccountRepository, AccountRepositoryError, ConflictKind};
pub use handle_generator::HandleGenerator;
