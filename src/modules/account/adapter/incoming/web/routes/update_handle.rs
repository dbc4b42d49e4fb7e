use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::errors::{
    map_account_error, parse_account_id,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{AccountResponse, UpdateHandleRequest};

/// Change the handle of an active account
#[utoipa::path(
    post,
    path = "/account.v1.AccountService/UpdateHandle",
    tag = "accounts",
    request_body = UpdateHandleRequest,
    responses(
        (status = 200, description = "Handle updated", body = inline(SuccessResponse<AccountResponse>)),
        (
            status = 400,
            description = "Malformed account id or handle",
            body = ErrorResponse,
            examples(
                ("Invalid id" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_ARGUMENT", "message": "invalid account id" }
                }))),
                ("Invalid handle" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_ARGUMENT", "message": "invalid handle" }
                })))
            )
        ),
        (
            status = 409,
            description = "Handle held by another account",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ALREADY_EXISTS", "message": "handle already exists" }
            })
        ),
        (status = 404, description = "No active account with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/UpdateHandle")]
pub async fn update_handle_handler(
    req: web::Json<UpdateHandleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_account_id(&req.id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.account.update_handle.execute(id, &req.handle).await {
        Ok(account) => {
            info!(account_id = %account.id, handle = %account.handle, "Handle updated");
            ApiResponse::success(AccountResponse::from(account))
        }
        Err(err) => map_account_error(err),
    }
}
