// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;

use super::status::RpcCode;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(code: RpcCode, message: &str) -> HttpResponse {
        HttpResponse::build(code.http_status()).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.as_str().to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn invalid_argument(message: &str) -> HttpResponse {
        Self::error(RpcCode::InvalidArgument, message)
    }

    pub fn already_exists(message: &str) -> HttpResponse {
        Self::error(RpcCode::AlreadyExists, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(RpcCode::NotFound, message)
    }

    /// Storage detail never reaches the caller.
    pub fn internal_error() -> HttpResponse {
        Self::error(RpcCode::Internal, "internal server error")
    }
}
