//! HTTP error envelope and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`Error`](crate::domain::Error) into Actix responses here. The wire
//! shape is fixed: `{ "message": string, "timestamp": epoch-ms }`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Wire envelope returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    #[schema(example = "Person with this id wasn't found!")]
    pub message: String,
    /// Epoch milliseconds at which the failure was observed.
    #[schema(example = 1_700_000_000_000_i64)]
    pub timestamp: i64,
}

/// HTTP-facing error pairing a domain failure with its observation time.
///
/// `ResponseError::error_response` has no access to handler state, so the
/// timestamp is captured from the injected clock at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    timestamp: i64,
}

/// Convenience result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Construct an API error from a domain failure, stamping the current
    /// clock reading.
    pub fn from_domain(error: Error, clock: &dyn Clock) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            timestamp: clock.utc().timestamp_millis(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Epoch milliseconds captured when the error was constructed.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_body(&self) -> ErrorResponse {
        // Do not leak adapter failure details to clients.
        let message = if matches!(self.code, ErrorCode::InternalError) {
            "Internal server error".to_owned()
        } else {
            self.message.clone()
        };
        ErrorResponse {
            message,
            timestamp: self.timestamp,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::rstest;

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_clock() -> FixtureClock {
        let utc_now = Utc
            .with_ymd_and_hms(2026, 8, 8, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        FixtureClock { utc_now }
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        let api_error = ApiError::from_domain(error, &fixture_clock());
        assert_eq!(api_error.status_code(), expected);
    }

    #[test]
    fn timestamp_comes_from_the_injected_clock() {
        let clock = fixture_clock();
        let expected = clock.utc().timestamp_millis();
        let api_error = ApiError::from_domain(Error::not_found("gone"), &clock);
        assert_eq!(api_error.timestamp(), expected);
    }

    #[test]
    fn body_carries_message_and_timestamp() {
        let clock = fixture_clock();
        let api_error = ApiError::from_domain(Error::not_found("gone"), &clock);
        let body = api_error.to_body();
        assert_eq!(
            body,
            ErrorResponse {
                message: "gone".to_owned(),
                timestamp: clock.utc().timestamp_millis(),
            }
        );
    }

    #[test]
    fn internal_errors_are_redacted() {
        let api_error =
            ApiError::from_domain(Error::internal("store exploded"), &fixture_clock());
        let body = api_error.to_body();
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn error_response_serializes_flat_wire_shape() {
        let body = ErrorResponse {
            message: "gone".to_owned(),
            timestamp: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&body).expect("serializable body");
        assert_eq!(
            value,
            serde_json::json!({ "message": "gone", "timestamp": 1_700_000_000_000_i64 })
        );
    }
}
