mod create_account_service;
mod delete_account_service;
mod get_account_service;
mod update_handle_service;

pub use create_account_service::{CreateAccountService, MAX_HANDLE_GENERATION_ATTEMPTS};
pub use delete_account_service::DeleteAccountService;
pub use get_account_service::GetAccountService;
pub use update_handle_service::UpdateHandleService;
