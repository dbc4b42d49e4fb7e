use actix_web::http::StatusCode;

/// Caller-visible outcome class of an RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcCode {
    Ok,
    InvalidArgument,
    AlreadyExists,
    NotFound,
    Internal,
}

impl RpcCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcCode::Ok => "OK",
            RpcCode::InvalidArgument => "INVALID_ARGUMENT",
            RpcCode::AlreadyExists => "ALREADY_EXISTS",
            RpcCode::NotFound => "NOT_FOUND",
            RpcCode::Internal => "INTERNAL",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            RpcCode::Ok => StatusCode::OK,
            RpcCode::InvalidArgument => StatusCode::BAD_REQUEST,
            RpcCode::AlreadyExists => StatusCode::CONFLICT,
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Recovers the code from a response status. Anything outside the
    /// documented set counts as internal.
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            s if s.is_success() => RpcCode::Ok,
            StatusCode::BAD_REQUEST => RpcCode::InvalidArgument,
            StatusCode::CONFLICT => RpcCode::AlreadyExists,
            StatusCode::NOT_FOUND => RpcCode::NotFound,
            _ => RpcCode::Internal,
        }
    }
}
