use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        appointment::{
            AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto,
            UpdateAppointmentStatusDto,
        },
        slot::DaySlotsDto,
    },
    server::{
        controller::{
            param::{paging, AppointmentListParam, SlotParam},
            reply, reply_page,
        },
        error::AppError,
        model::{
            appointment::{
                AppointmentFilter, AppointmentStatus, CreateAppointmentParam,
                UpdateAppointmentParam,
            },
            availability::SlotQuery,
        },
        service::{appointment::AppointmentService, availability::AvailabilityService},
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Book a new appointment.
///
/// Runs booking admission: the start label is parsed in the salon's timezone, the
/// services must resolve to one salon, the booking must start after opening and
/// finish before closing, avoid leave, and must not overlap another pending
/// appointment of that salon.
///
/// # Arguments
/// - `state` - Application state containing the database connection and booking locks
/// - `payload` - Customer, services, date, start label and optional notes
///
/// # Returns
/// - `201 Created` - Appointment stored as PENDING
/// - `400 Bad Request` - Missing, malformed or rejected booking data
/// - `404 Not Found` - Customer does not exist
/// - `409 Conflict` - Requested window overlaps a pending appointment
/// - `500 Internal Server Error` - Salon misconfigured or database error
#[utoipa::path(
    post,
    path = "/appointment/add",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = ApiResponse<AppointmentDto>),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAppointmentParam::from_dto(payload)?;
    let appointment =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .create(param, Utc::now())
            .await?;

    Ok(reply(
        StatusCode::CREATED,
        "Appointment booked successfully.",
        appointment.into_dto(),
    ))
}

/// Update an appointment.
///
/// Omitted fields keep their stored value. Changing the date, start time or
/// services re-runs booking admission, ignoring the appointment's own window.
///
/// # Arguments
/// - `state` - Application state
/// - `id` - Appointment ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated appointment
/// - `400 Bad Request` - Rejected schedule or malformed data
/// - `404 Not Found` - Appointment or customer does not exist
/// - `409 Conflict` - New window overlaps another pending appointment
#[utoipa::path(
    put,
    path = "/appointment/update/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = ApiResponse<AppointmentDto>),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateAppointmentParam::from_dto(payload)?;
    let appointment =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .update(id, param, Utc::now())
            .await?;

    Ok(reply(
        StatusCode::OK,
        "Appointment updated successfully.",
        appointment.into_dto(),
    ))
}

/// Set the status of an appointment.
///
/// Any status may be set from any other status.
#[utoipa::path(
    patch,
    path = "/appointment/status/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<AppointmentDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = AppointmentStatus::from_param(&payload.status)?;
    let appointment =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .update_status(id, status)
            .await?;

    Ok(reply(
        StatusCode::OK,
        "Appointment status updated successfully.",
        appointment.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/appointment/get/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment found", body = ApiResponse<AppointmentDto>),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let appointment =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .get(id)
            .await?;

    Ok(reply(
        StatusCode::OK,
        "Appointment found successfully.",
        appointment.into_dto(),
    ))
}

/// List appointments, newest start first.
///
/// # Arguments
/// - `state` - Application state
/// - `params` - Optional status and customer filters plus paging
///
/// # Returns
/// - `200 OK` - One page of appointments with pagination metadata
/// - `400 Bad Request` - Unknown status filter
#[utoipa::path(
    get,
    path = "/appointment/get-all",
    tag = APPOINTMENT_TAG,
    params(AppointmentListParam),
    responses(
        (status = 200, description = "Appointments fetched", body = ApiResponse<Vec<AppointmentDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let filter = AppointmentFilter {
        status: params
            .status
            .as_deref()
            .map(AppointmentStatus::from_param)
            .transpose()?,
        customer_id: params.customer_id,
        page,
        limit,
    };

    let appointments =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .list(filter)
            .await?;

    Ok(reply_page(
        "Appointments fetched successfully.",
        appointments.map(|appointment| appointment.into_dto()),
    ))
}

#[utoipa::path(
    delete,
    path = "/appointment/delete/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment deleted", body = ApiResponse<AppointmentDto>),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let appointment =
        AppointmentService::new(&state.db, &state.booking_locks, state.default_timezone)
            .delete(id)
            .await?;

    Ok(reply(
        StatusCode::OK,
        "Appointment deleted successfully.",
        appointment.into_dto(),
    ))
}

/// Get the free booking slots of a salon for one day.
///
/// Slots are as long as the shortest active service of the salon and are laid
/// back to back from opening time. Slots overlapping a pending appointment or an
/// hours leave, and slots that already started, are left out.
///
/// # Arguments
/// - `state` - Application state
/// - `params` - Optional date (`YYYY-MM-DD`, default today) and salon ID (default first salon)
///
/// # Returns
/// - `200 OK` - Free slots; empty with a closed message on a full-day leave
/// - `404 Not Found` - No salon, or the salon has no active services
/// - `500 Internal Server Error` - Opening hours not configured
#[utoipa::path(
    get,
    path = "/appointment/get-slots",
    tag = APPOINTMENT_TAG,
    params(SlotParam),
    responses(
        (status = 200, description = "Free slots for the day", body = ApiResponse<DaySlotsDto>),
        (status = 404, description = "Salon or services not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slots(
    State(state): State<AppState>,
    Query(params): Query<SlotParam>,
) -> Result<impl IntoResponse, AppError> {
    let query = SlotQuery {
        date: params.date,
        salon_id: params.salon_id,
    };
    let slots = AvailabilityService::new(&state.db, state.default_timezone)
        .get_slots(query, Utc::now())
        .await?;

    let message = if slots.closed {
        "Salon is closed today."
    } else {
        "Available slots fetched successfully"
    };

    Ok(reply(StatusCode::OK, message, slots.into_dto()))
}
