//! Structured error values for API responses

pub mod codes;
pub mod decode;
pub mod response;

pub use codes::{ErrorKind, UnknownErrorKind};
pub use decode::DecodeError;
pub use response::RestError;
