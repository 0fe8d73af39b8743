use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: Option<String>,
    pub mobile: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}
