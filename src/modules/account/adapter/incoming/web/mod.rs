mod errors;
pub mod observe;
pub mod routes;
