pub mod entities;
pub mod errors;

pub use entities::{Account, Handle, Phone};
pub use errors::AccountError;
