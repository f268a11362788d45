#[cfg(feature = "axum")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use super::codes::ErrorKind;
use super::decode::DecodeError;

/// Structured error returned at the service boundary.
///
/// The wire shape is `{"message", "status", "error", "causes"}`. The category
/// is stored as `kind` and mapped onto the `error` field explicitly, so the
/// same schema drives serialization, decoding and the OpenAPI component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RestError {
    /// Human-readable error message
    #[serde(deserialize_with = "null_as_default")]
    message: String,
    /// HTTP status code
    #[serde(deserialize_with = "null_as_default")]
    status: u16,
    /// Machine-readable error category
    #[serde(rename = "error", deserialize_with = "null_as_default")]
    kind: String,
    /// Underlying causes, usually error descriptions
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Vec<Object>)]
    causes: Vec<Value>,
}

/// `null` leaves a field at its default, same as omitting it
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RestError {
    /// Create a new error. No consistency check is made between `status` and `kind`.
    pub fn new(
        message: impl Into<String>,
        status: u16,
        kind: impl Into<String>,
        causes: Vec<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            kind: kind.into(),
            causes,
        }
    }

    /// Create an error whose status and category both come from `kind`
    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(message, kind.status_code(), kind.as_str(), Vec::new())
    }

    /// Rebuild an error from its JSON encoding.
    ///
    /// Unknown fields are ignored; missing or `null` ones take their default.
    /// `status` must fit in a `u16`, so integers outside `0..=65535` are
    /// rejected. Any parse failure maps to [`DecodeError::InvalidJson`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|_| DecodeError::InvalidJson)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Machine-readable category, the `error` field on the wire
    pub fn error(&self) -> &str {
        &self.kind
    }

    pub fn causes(&self) -> &[Value] {
        &self.causes
    }

    /// The category as a well-known [`ErrorKind`], if it is one
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind.parse().ok()
    }
}

/// Helper for creating common errors
impl RestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::NotFound, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::Unauthorized, message)
    }

    /// Internal error; the underlying error, when given, becomes the only cause
    pub fn internal_server_error(
        message: impl Into<String>,
        err: Option<&dyn std::error::Error>,
    ) -> Self {
        let mut result = Self::from_kind(ErrorKind::InternalServerError, message);
        if let Some(err) = err {
            result.causes.push(Value::String(err.to_string()));
        }
        result
    }
}

/// Causes are joined with `, ` inside a single pair of brackets, strings
/// unquoted and other values as compact JSON. This is not the nested,
/// space-separated `[[a b]]` list some older clients of this format print.
impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message: {} - status {} - error: {} - causes: [",
            self.message, self.status, self.kind
        )?;
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match cause {
                Value::String(s) => f.write_str(s)?,
                other => write!(f, "{}", other)?,
            }
        }
        f.write_str("]")
    }
}

impl std::error::Error for RestError {}

impl From<DecodeError> for RestError {
    fn from(err: DecodeError) -> Self {
        Self::bad_request(err.to_string())
    }
}

#[cfg(feature = "axum")]
impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
