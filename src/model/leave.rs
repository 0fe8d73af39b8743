use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveDto {
    pub salon_id: i32,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// `DAY` or `HOURS`.
    #[serde(rename = "type")]
    pub leave_type: String,
    /// 12-hour clock label, required for `HOURS`.
    pub start_time: Option<String>,
    /// 12-hour clock label, required for `HOURS`.
    pub end_time: Option<String>,
    pub reason: Option<String>,
}

/// Partial update. The merged leave must still satisfy the HOURS rules; moving
/// to `DAY` drops the stored times.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveDto {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub leave_type: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDto {
    pub id: i32,
    pub salon_id: i32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
