mod create_account;
mod delete_account;
mod get_account;
mod update_handle;

pub use create_account::CreateAccountUseCase;
pub use delete_account::DeleteAccountUseCase;
pub use get_account::GetAccountUseCase;
pub use update_handle::UpdateHandleUseCase;
