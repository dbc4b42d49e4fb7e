use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::errors::{
    map_account_error, parse_account_id,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::{AccountResponse, GetAccountRequest};

/// Fetch an active account
#[utoipa::path(
    post,
    path = "/account.v1.AccountService/GetAccount",
    tag = "accounts",
    request_body = GetAccountRequest,
    responses(
        (status = 200, description = "Account found", body = inline(SuccessResponse<AccountResponse>)),
        (
            status = 400,
            description = "Account id is not a UUID",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_ARGUMENT", "message": "invalid account id" }
            })
        ),
        (
            status = 404,
            description = "No active account with this id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "NOT_FOUND", "message": "account not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/GetAccount")]
pub async fn get_account_handler(
    req: web::Json<GetAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_account_id(&req.id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.account.get.execute(id).await {
        Ok(account) => ApiResponse::success(AccountResponse::from(account)),
        Err(err) => map_account_error(err),
    }
}
