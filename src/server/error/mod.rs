//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON response envelope. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod booking;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{booking::BookingError, config::ConfigError, internal::InternalError},
};

/// Message returned to clients for errors whose details stay server-side.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `BookingError` handles its own status mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Appointment admission rejected a booking.
    ///
    /// Delegates to `BookingError::status_code()` for the status mapping
    /// (400, 409, or 500 for salon data defects).
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Stored data could not be mapped onto a domain model.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    ///
    /// Results in 500 Internal Server Error when scheduled job operations fail.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Listener or socket error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

fn envelope(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            status_code: status.as_u16(),
            success: false,
            message,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and the
/// `{statusCode, success: false, message}` envelope. Internal errors are logged with
/// full details but return a generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `BookingErr`, mapped by `BookingError::status_code()`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BookingErr(err) => {
                let status = err.status_code();
                if status.is_server_error() {
                    tracing::error!("Booking rejected by salon data defect: {}", err);
                }
                envelope(status, err.to_string())
            }
            Self::NotFound(msg) => envelope(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic message to the client to avoid
/// leaking implementation details. Used as a fallback for errors that don't have specific
/// HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERIC_ERROR_MESSAGE.to_string(),
        )
    }
}
