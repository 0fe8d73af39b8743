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
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        controller::{
            param::{paging, ServiceListParam},
            reply, reply_page,
        },
        error::AppError,
        model::service::{CreateServiceParam, ServiceFilter, UpdateServiceParam},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping service catalog endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Add a service offered by a staff member.
///
/// Service names are unique per staff member among active services.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Staff member ID, name, price and duration in minutes
///
/// # Returns
/// - `201 Created` - Created service
/// - `400 Bad Request` - Invalid data or duplicate name
/// - `404 Not Found` - Staff member does not exist
#[utoipa::path(
    post,
    path = "/service/add",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<ServiceDto>),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateServiceParam::from_dto(payload)?;
    let service = CatalogService::new(&state.db).create(param).await?;

    Ok(reply(
        StatusCode::CREATED,
        "Service created successfully.",
        service.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/service/get/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service found", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db).get(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Service found successfully.",
        service.into_dto(),
    ))
}

/// List active services, optionally filtered by name and salon.
#[utoipa::path(
    get,
    path = "/service/get-all",
    tag = SERVICE_TAG,
    params(ServiceListParam),
    responses(
        (status = 200, description = "Services fetched", body = ApiResponse<Vec<ServiceDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let filter = ServiceFilter {
        search: params.search.filter(|search| !search.trim().is_empty()),
        salon_id: params.salon_id,
        page,
        limit,
    };

    let services = CatalogService::new(&state.db).list(filter).await?;

    Ok(reply_page(
        "Services fetched successfully.",
        services.map(|service| service.into_dto()),
    ))
}

/// Change the name, price or duration of a service.
///
/// A new duration applies to later bookings and slot queries only.
///
/// # Returns
/// - `200 OK` - Updated service
/// - `400 Bad Request` - Invalid fields, or the owner already offers the new name
/// - `404 Not Found` - Service does not exist
#[utoipa::path(
    put,
    path = "/service/update/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<ServiceDto>),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateServiceParam::from_dto(payload)?;
    let service = CatalogService::new(&state.db).update(id, param).await?;

    Ok(reply(
        StatusCode::OK,
        "Service updated successfully.",
        service.into_dto(),
    ))
}

/// Soft delete a service.
///
/// Refused while a pending appointment includes the service.
///
/// # Returns
/// - `200 OK` - Deleted service
/// - `400 Bad Request` - Service is part of a pending appointment
/// - `404 Not Found` - Service does not exist
#[utoipa::path(
    delete,
    path = "/service/delete/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = ApiResponse<ServiceDto>),
        (status = 400, description = "Service in use", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db)
        .delete(id, Utc::now())
        .await?;

    Ok(reply(
        StatusCode::OK,
        "Service deleted successfully.",
        service.into_dto(),
    ))
}
