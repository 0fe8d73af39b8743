//! Query string parameters shared by list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::page::DEFAULT_PAGE_LIMIT;

/// Largest page size a client may request.
const MAX_PAGE_LIMIT: u64 = 100;

/// Normalizes raw paging input to a 1-based page and a bounded limit.
pub fn paging(page: Option<u64>, limit: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .min(MAX_PAGE_LIMIT);

    (page, limit)
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// 1-based page number (default: 1)
    pub page: Option<u64>,
    /// Items per page (default: 10)
    pub limit: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AppointmentListParam {
    /// Only appointments with this status
    pub status: Option<String>,
    /// Only appointments of this customer
    pub customer_id: Option<i32>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SlotParam {
    /// Calendar date `YYYY-MM-DD`; today in the salon's zone when absent or invalid
    pub date: Option<String>,
    /// Salon to look at; the first salon when absent
    pub salon_id: Option<i32>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ServiceListParam {
    /// Substring of the service name
    pub search: Option<String>,
    pub salon_id: Option<i32>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LeaveListParam {
    pub salon_id: Option<i32>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListParam {
    /// Substring of the first name, last name or mobile number
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StaffListParam {
    pub salon_id: Option<i32>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
