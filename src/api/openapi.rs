use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::account::adapter::incoming::web::routes::{
    AccountDto, AccountResponse, CreateAccountRequest, DeleteAccountRequest,
    DeleteAccountResponse, GetAccountRequest, UpdateHandleRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "Account identity RPCs: create, fetch, re-handle and soft-delete accounts"
    ),
    paths(
        crate::modules::account::adapter::incoming::web::routes::create_account::create_account_handler,
        crate::modules::account::adapter::incoming::web::routes::get_account::get_account_handler,
        crate::modules::account::adapter::incoming::web::routes::update_handle::update_handle_handler,
        crate::modules::account::adapter::incoming::web::routes::delete_account::delete_account_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AccountResponse>,
            SuccessResponse<DeleteAccountResponse>,
            ErrorResponse,
            ErrorDetail,

            // Account DTOs
            AccountDto,
            AccountResponse,
            CreateAccountRequest,
            GetAccountRequest,
            UpdateHandleRequest,
            DeleteAccountRequest,
            DeleteAccountResponse
        )
    ),
    tags(
        (name = "accounts", description = "account.v1.AccountService methods"),
    )
)]
pub struct ApiDoc;
