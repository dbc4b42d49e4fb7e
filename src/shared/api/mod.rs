pub mod json_config;
pub mod response;
pub mod status;

pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
pub use status::RpcCode;
