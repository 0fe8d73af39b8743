use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    pub salon_user_id: i32,
    pub name: String,
    pub price: f64,
    /// Duration in minutes.
    pub duration: i32,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    /// Duration in minutes.
    pub duration: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: i32,
    pub salon_user_id: i32,
    pub salon_id: i32,
    pub name: String,
    pub price: f64,
    pub duration: i32,
    /// Human readable duration, e.g. `"1 hr and 30 min"`.
    pub duration_text: String,
    pub created_at: DateTime<Utc>,
}
