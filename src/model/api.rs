use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::pagination::PaginationDto;

/// Body of every failed request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
}

/// Envelope of every successful request.
///
/// `pagination` is only present on list endpoints.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl<T> ApiResponse<T> {
    pub fn success(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code,
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }

    pub fn paginated(
        status_code: u16,
        message: impl Into<String>,
        data: T,
        pagination: PaginationDto,
    ) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(status_code, message, data)
        }
    }
}
