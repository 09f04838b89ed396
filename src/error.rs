use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::model::ProviderError;
use crate::web::models::InsuranceResponse;

pub const MISSING_HISTORY_MESSAGE: &str = "Invalid request: missing history";
pub const MALFORMED_TURN_MESSAGE: &str = "Invalid request: malformed history entry";
pub const DOWNSTREAM_FAILURE_MESSAGE: &str = "Tina had trouble responding. Try again later.";

#[derive(Error, Debug)]
pub enum InvalidRequest {
    #[error("history is missing or not an array")]
    MissingHistory,

    #[error("history entry {index} is not a speaker/text pair: {reason}")]
    MalformedTurn { index: usize, reason: String },
}

impl InvalidRequest {
    fn client_message(&self) -> &'static str {
        match self {
            InvalidRequest::MissingHistory => MISSING_HISTORY_MESSAGE,
            InvalidRequest::MalformedTurn { .. } => MALFORMED_TURN_MESSAGE,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("Downstream failure: {0}")]
    DownstreamFailure(#[from] ProviderError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DownstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Provider detail stays in the logs; clients only see the fixed messages.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InvalidRequest(invalid) => invalid.client_message(),
            AppError::DownstreamFailure(_) => DOWNSTREAM_FAILURE_MESSAGE,
        };
        HttpResponse::build(self.status_code()).json(InsuranceResponse::new(message))
    }
}
