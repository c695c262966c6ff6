use reqwest::StatusCode;

/// The generic failure string shown for every API error except the
/// favorites fetch. The server never exposes structured error codes to the
/// UI layer; callers get exactly one failure branch per call.
pub const GENERIC_ERROR_MESSAGE: &str = "Something bad happened; please try again later.";

/// Failure string for the favorites-fetch path.
pub const FAVORITES_ERROR_MESSAGE: &str = "Unable to get movie list";

/// Client-level errors
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("favorites fetch failed: {0}")]
    Favorites(#[source] Box<ApiError>),

    #[error("session store error: {0}")]
    SessionStore(#[from] std::io::Error),
}

impl ApiError {
    /// Collapses every failure into the single human-readable message the UI
    /// shows, keeping the structured cause available for logging. Only the
    /// favorites path carries a distinct message.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Favorites(_) => FAVORITES_ERROR_MESSAGE,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Status code of the server response, if this error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Favorites(inner) => inner.status(),
            _ => None,
        }
    }

    pub(crate) fn into_favorites(self) -> ApiError {
        ApiError::Favorites(Box::new(self))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_generic() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid token".to_string(),
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_favorites_path_has_distinct_message() {
        let inner = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        let err = inner.into_favorites();
        assert_eq!(err.user_message(), FAVORITES_ERROR_MESSAGE);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
