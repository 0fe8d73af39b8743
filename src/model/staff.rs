use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    pub salon_id: i32,
    pub name: String,
    /// One of `OWNER`, `MANAGER`, `STAFF`.
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffDto {
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub id: i32,
    pub salon_id: i32,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
