use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalonDto {
    pub name: String,
    /// 12-hour clock label, e.g. `"09:00 AM"`.
    pub open_time: Option<String>,
    /// 12-hour clock label; `"12:00 AM"` closes at midnight.
    pub close_time: Option<String>,
    /// IANA zone name, e.g. `"Asia/Kolkata"`.
    pub timezone: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalonDto {
    pub name: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SalonDto {
    pub id: i32,
    pub name: String,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}
