//! Tagged API response type

/// Result of an API call: exactly one of a payload or an error message.
///
/// Both HTTP-level errors (non-2xx status) and transport-level errors
/// (connection failure, malformed body) collapse into the `Error` arm as a
/// display string. Callers cannot distinguish the two tiers and are not
/// expected to; the message is for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// Successful response payload
    Data(T),
    /// Error message from either tier of the failure taxonomy
    Error(String),
}

impl<T> ApiResponse<T> {
    /// The payload, if this is a success
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// The error message, if this is a failure
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Data(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    /// Whether this response carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Map the success payload, leaving errors untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Data(data) => ApiResponse::Data(f(data)),
            Self::Error(message) => ApiResponse::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_accessor() {
        let response = ApiResponse::Data(7);
        assert!(!response.is_error());
        assert_eq!(response.error(), None);
        assert_eq!(response.data(), Some(7));
    }

    #[test]
    fn error_accessor() {
        let response: ApiResponse<i32> = ApiResponse::Error("boom".into());
        assert!(response.is_error());
        assert_eq!(response.error(), Some("boom"));
        assert_eq!(response.data(), None);
    }

    #[test]
    fn map_preserves_error() {
        let response: ApiResponse<i32> = ApiResponse::Error("boom".into());
        let mapped = response.map(|n| n * 2);
        assert_eq!(mapped, ApiResponse::Error("boom".into()));
    }
}
