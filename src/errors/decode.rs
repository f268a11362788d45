use thiserror::Error;

/// Failure to rebuild a [`RestError`](super::RestError) from bytes.
///
/// The message is fixed and never carries the parser diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid json")]
    InvalidJson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_message() {
        assert_eq!(DecodeError::InvalidJson.to_string(), "invalid json");
    }
}
