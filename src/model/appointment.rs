use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentDto {
    pub customer_id: i32,
    pub service_ids: Vec<i32>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 12-hour clock label, e.g. `"02:30 PM"`.
    pub start_time: Option<String>,
    pub notes: Option<String>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentDto {
    pub customer_id: Option<i32>,
    pub service_ids: Option<Vec<i32>>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UpdateAppointmentStatusDto {
    /// One of `PENDING`, `CONFIRMED`, `COMPLETED`, `CANCELLED`.
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: i32,
    pub salon_id: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub service_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
}
