use actix_web::middleware::from_fn;
use actix_web::web;

use super::observe::observe_rpc;

pub mod create_account;
pub mod delete_account;
mod dto;
pub mod get_account;
pub mod update_handle;

pub use create_account::create_account_handler;
pub use delete_account::delete_account_handler;
pub use dto::{
    AccountDto, AccountResponse, CreateAccountRequest, DeleteAccountRequest,
    DeleteAccountResponse, GetAccountRequest, UpdateHandleRequest,
};
pub use get_account::get_account_handler;
pub use update_handle::update_handle_handler;

// Fully-qualified RPC service name; methods are mounted beneath it.
pub const SERVICE_PATH: &str = "/account.v1.AccountService";

/// Methods served under [`SERVICE_PATH`].
pub const RPC_METHODS: [&str; 4] = ["CreateAccount", "GetAccount", "UpdateHandle", "DeleteAccount"];

/// Mounts the four account RPCs behind the observation middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(SERVICE_PATH)
            .wrap(from_fn(observe_rpc))
            .service(create_account_handler)
            .service(get_account_handler)
            .service(update_handle_handler)
            .service(delete_account_handler),
    );
}
