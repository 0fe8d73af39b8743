use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        salon::{CreateSalonDto, SalonDto, UpdateSalonDto},
    },
    server::{
        controller::{
            param::{paging, PaginationParam},
            reply, reply_page,
        },
        error::AppError,
        model::salon::{CreateSalonParam, UpdateSalonParam},
        service::salon::SalonService,
        state::AppState,
    },
};

/// Tag for grouping salon endpoints in OpenAPI documentation
pub static SALON_TAG: &str = "salon";

/// Register a salon.
///
/// Opening and closing times are 12-hour labels such as `"09:00 AM"`. The
/// timezone is an IANA name; without one the server default applies.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Salon name, optional hours and timezone
///
/// # Returns
/// - `201 Created` - Created salon
/// - `400 Bad Request` - Empty name, malformed time label or unknown timezone
#[utoipa::path(
    post,
    path = "/salon/add",
    tag = SALON_TAG,
    request_body = CreateSalonDto,
    responses(
        (status = 201, description = "Salon created", body = ApiResponse<SalonDto>),
        (status = 400, description = "Invalid salon data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_salon(
    State(state): State<AppState>,
    Json(payload): Json<CreateSalonDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSalonParam::from_dto(payload)?;
    let salon = SalonService::new(&state.db).create(param).await?;

    Ok(reply(
        StatusCode::CREATED,
        "Salon created successfully.",
        salon.into_dto(),
    ))
}

/// Update a salon; omitted fields keep their stored value.
#[utoipa::path(
    put,
    path = "/salon/update/{id}",
    tag = SALON_TAG,
    params(("id" = i32, Path, description = "Salon ID")),
    request_body = UpdateSalonDto,
    responses(
        (status = 200, description = "Salon updated", body = ApiResponse<SalonDto>),
        (status = 400, description = "Invalid salon data", body = ErrorDto),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_salon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSalonDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateSalonParam::from_dto(payload)?;
    let salon = SalonService::new(&state.db).update(id, param).await?;

    Ok(reply(
        StatusCode::OK,
        "Salon updated successfully.",
        salon.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/salon/get/{id}",
    tag = SALON_TAG,
    params(("id" = i32, Path, description = "Salon ID")),
    responses(
        (status = 200, description = "Salon found", body = ApiResponse<SalonDto>),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let salon = SalonService::new(&state.db).get(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Salon found successfully.",
        salon.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/salon/get-all",
    tag = SALON_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Salons fetched", body = ApiResponse<Vec<SalonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let salons = SalonService::new(&state.db).list(page, limit).await?;

    Ok(reply_page(
        "Salons fetched successfully.",
        salons.map(|salon| salon.into_dto()),
    ))
}

/// Delete a salon with its staff, services, leaves and past appointments.
///
/// Refused while the salon has pending appointments.
///
/// # Returns
/// - `200 OK` - Deleted salon
/// - `400 Bad Request` - The salon has pending appointments
/// - `404 Not Found` - Salon does not exist
#[utoipa::path(
    delete,
    path = "/salon/delete/{id}",
    tag = SALON_TAG,
    params(("id" = i32, Path, description = "Salon ID")),
    responses(
        (status = 200, description = "Salon deleted", body = ApiResponse<SalonDto>),
        (status = 400, description = "Salon has pending appointments", body = ErrorDto),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_salon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let salon = SalonService::new(&state.db).delete(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Salon deleted successfully.",
        salon.into_dto(),
    ))
}
