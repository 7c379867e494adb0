//! Per-request error types

use thiserror::Error;
use warp::http::StatusCode;

/// Failure of a single request. Rendered as a plain-text body by the
/// rejection handler; never affects other requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BodyRead(String),

    #[error("{0}")]
    MalformedJson(String),

    #[error("{0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BodyRead(_) | ApiError::MalformedJson(_) | ApiError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl warp::reject::Reject for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::MalformedJson("expected value".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::BodyRead("reset".to_string()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Encode("oops".to_string()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_is_underlying_text() {
        let err = ApiError::MalformedJson("expected ident at line 1 column 2".to_string());
        assert_eq!(err.to_string(), "expected ident at line 1 column 2");
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
    }
}
