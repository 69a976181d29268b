use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

pub const INVALID_RATING: i32 = 102;
pub const INVALID_CRITERIA: i32 = 103;
pub const PLACE_NOT_FOUND: i32 = 104;
pub const SESSION_NOT_FOUND: i32 = 105;
pub const INDEX_OUT_OF_BOUNDS: i32 = 106;
pub const NO_CANDIDATES: i32 = 107;

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self.code, PLACE_NOT_FOUND | SESSION_NOT_FOUND)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        catalog_error(format!("io error: {}", err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        catalog_error(format!("csv error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        catalog_error(format!("json error: {}", err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            PLACE_NOT_FOUND | SESSION_NOT_FOUND => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_rating_error(value: i64) -> Error {
    Error {
        code: INVALID_RATING,
        message: format!("rating must be an integer between 1 and 5, got {}", value),
    }
}

pub fn invalid_criteria_error(message: impl Into<String>) -> Error {
    Error {
        code: INVALID_CRITERIA,
        message: message.into(),
    }
}

pub fn place_not_found_error(name: &str) -> Error {
    Error {
        code: PLACE_NOT_FOUND,
        message: format!("place not found: {}", name),
    }
}

pub fn session_not_found_error() -> Error {
    Error {
        code: SESSION_NOT_FOUND,
        message: "session not found".into(),
    }
}

pub fn index_out_of_bounds_error(index: usize, len: usize) -> Error {
    Error {
        code: INDEX_OUT_OF_BOUNDS,
        message: format!("itinerary index {} out of bounds (length {})", index, len),
    }
}

pub fn no_candidates_error() -> Error {
    Error {
        code: NO_CANDIDATES,
        message: "no places match the current filters".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn server_error<E: Display>(err: E) -> Error {
    Error {
        code: 5,
        message: format!("server error: {}", err),
    }
}

pub fn config_error(key: &str, value: &str) -> Error {
    Error {
        code: 1,
        message: format!("invalid value for {}: {:?}", key, value),
    }
}

pub fn catalog_error(message: impl Into<String>) -> Error {
    Error {
        code: 2,
        message: message.into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("reqwest error: {}", err),
    }
}

pub fn upstream_error<T: Debug>(detail: T) -> Error {
    Error {
        code: 4,
        message: format!("upstream error: {:?}", detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_message() {
        let response = catalog_error("secret path").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_errors_map_to_404() {
        assert_eq!(
            place_not_found_error("Houmt Souk").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            session_not_found_error().into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert!(session_not_found_error().is_not_found());
    }

    #[test]
    fn caller_errors_map_to_400() {
        assert_eq!(
            invalid_rating_error(9).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            index_out_of_bounds_error(3, 1).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
