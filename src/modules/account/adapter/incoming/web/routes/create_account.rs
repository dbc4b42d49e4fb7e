use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::errors::map_account_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{AccountResponse, CreateAccountRequest};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create an account
///
/// Registers a phone number and assigns it a server-generated handle.
#[utoipa::path(
    post,
    path = "/account.v1.AccountService/CreateAccount",
    tag = "accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = inline(SuccessResponse<AccountResponse>)),
        (
            status = 400,
            description = "Phone number is malformed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_ARGUMENT", "message": "invalid phone" }
            })
        ),
        (
            status = 409,
            description = "Phone already registered, or no free handle was found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ALREADY_EXISTS", "message": "phone already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/CreateAccount")]
pub async fn create_account_handler(
    req: web::Json<CreateAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.create.execute(&req.phone).await {
        Ok(account) => {
            info!(
                account_id = %account.id,
                handle = %account.handle,
                "Account created"
            );
            ApiResponse::success(AccountResponse::from(account))
        }
        Err(err) => map_account_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
