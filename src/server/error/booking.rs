use axum::http::StatusCode;
use thiserror::Error;

/// Rejections raised while admitting or rescheduling an appointment.
///
/// Every variant is produced before any write happens. Client mistakes map to
/// 400, overlaps to 409, and gaps in salon configuration to 500 while still
/// carrying their message so the client can report them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Start time is required.")]
    MissingStartTime,

    #[error("Cannot book an appointment in the past.")]
    PastStartTime,

    /// One or more requested services are unknown or deleted.
    #[error("Invalid service(s): {}", join_ids(.0))]
    InvalidServices(Vec<i32>),

    /// Requested services are offered by more than one salon.
    #[error("Services must all belong to the same salon.")]
    MultipleSalons,

    #[error("Salon ID not found for the service")]
    SalonNotResolved,

    #[error("Salon closing time is not configured")]
    ClosingTimeNotConfigured,

    #[error("Salon opening and closing time are not configured")]
    HoursNotConfigured,

    /// Start falls before the salon's opening time.
    #[error("Salon opens at {opens_at}. Appointment not allowed before that.")]
    BeforeOpening { opens_at: String },

    /// Start falls at or after the salon's closing time.
    #[error("Salon closes at {closes_at}. Appointment not allowed after that.")]
    AfterClosing { closes_at: String },

    /// A DAY leave closes the salon on the requested date.
    #[error("Salon is closed today.")]
    ClosedForLeave,

    /// The booking overlaps an HOURS leave window.
    #[error("Salon is unavailable from {from} to {until} due to leave.")]
    DuringLeave { from: String, until: String },

    /// The booking overlaps a pending appointment.
    #[error(
        "Time slot already booked from {booked_from} until {booked_until} (requested {requested_from} to {requested_until})"
    )]
    SlotTaken {
        booked_from: String,
        booked_until: String,
        requested_from: String,
        requested_until: String,
    },
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SalonNotResolved | Self::ClosingTimeNotConfigured | Self::HoursNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::SlotTaken { .. } => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
