use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::errors::{
    map_account_error, parse_account_id,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{DeleteAccountRequest, DeleteAccountResponse};

/// Soft-delete an account
///
/// The row is kept with a deletion timestamp and becomes invisible to every
/// other operation. Deleting twice reports not found.
#[utoipa::path(
    post,
    path = "/account.v1.AccountService/DeleteAccount",
    tag = "accounts",
    request_body = DeleteAccountRequest,
    responses(
        (
            status = 200,
            description = "Account deleted",
            body = inline(SuccessResponse<DeleteAccountResponse>),
            example = json!({ "success": true, "data": {} })
        ),
        (status = 400, description = "Account id is not a UUID", body = ErrorResponse),
        (status = 404, description = "No active account with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/DeleteAccount")]
pub async fn delete_account_handler(
    req: web::Json<DeleteAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_account_id(&req.id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.account.delete.execute(id).await {
        Ok(()) => {
            info!(account_id = %id, "Account deleted");
            ApiResponse::success(DeleteAccountResponse::default())
        }
        Err(err) => map_account_error(err),
    }
}
