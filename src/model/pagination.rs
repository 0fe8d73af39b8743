use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
