#[cfg(feature = "schema-export")]
pub mod config;
pub mod errors;
pub mod openapi;

pub use errors::{DecodeError, ErrorKind, RestError, UnknownErrorKind};
