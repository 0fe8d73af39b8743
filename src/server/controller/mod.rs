//! HTTP request handlers.
//!
//! Controllers convert request DTOs into operation parameters, call the service
//! layer, and wrap the resulting domain models in the `ApiResponse` envelope.
//! Validation failures surface as `AppError` and render as `ErrorDto`.

use axum::{http::StatusCode, Json};

use crate::{
    model::api::ApiResponse,
    server::model::page::Page,
};

pub mod appointment;
pub mod customer;
pub mod leave;
pub mod param;
pub mod salon;
pub mod service;
pub mod staff;

/// Wraps `data` in a success envelope with a matching HTTP status.
fn reply<T>(status: StatusCode, message: &str, data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse::success(status.as_u16(), message, data)),
    )
}

/// Wraps one page of items in a success envelope carrying pagination metadata.
fn reply_page<T>(message: &str, page: Page<T>) -> (StatusCode, Json<ApiResponse<Vec<T>>>) {
    let pagination = page.pagination();

    (
        StatusCode::OK,
        Json(ApiResponse::paginated(
            StatusCode::OK.as_u16(),
            message,
            page.items,
            pagination,
        )),
    )
}
