use actix_web::HttpResponse;
use tracing::{error, warn};
use uuid::Uuid;

use crate::modules::account::application::domain::AccountError;
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Request Parsing
// ──────────────────────────────────────────────────────────
//

/// Parses the textual account id carried by a request body.
pub(super) fn parse_account_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiResponse::invalid_argument("invalid account id"))
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub(super) fn map_account_error(err: AccountError) -> HttpResponse {
    match &err {
        AccountError::InvalidHandle | AccountError::InvalidPhone => {
            ApiResponse::invalid_argument(&err.to_string())
        }
        AccountError::HandleConflict | AccountError::PhoneConflict => {
            warn!(error = %err, "Account uniqueness conflict");
            ApiResponse::already_exists(&err.to_string())
        }
        AccountError::NotFound => ApiResponse::not_found(&err.to_string()),
        AccountError::StorageFailure(cause) => {
            error!(error = %cause, "Account storage failure");
            ApiResponse::internal_error()
        }
    }
}
