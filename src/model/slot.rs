use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable window with 12-hour clock labels such as `"10:30 am"`.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Debug)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DaySlotsDto {
    pub date: NaiveDate,
    /// Weekday name, e.g. `"Monday"`.
    pub day: String,
    pub slots: Vec<SlotDto>,
    pub total_slots: usize,
}
