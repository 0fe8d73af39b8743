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
        staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    },
    server::{
        controller::{
            param::{paging, StaffListParam},
            reply, reply_page,
        },
        error::AppError,
        model::staff::{CreateStaffParam, StaffFilter, UpdateStaffParam},
        service::salon::StaffService,
        state::AppState,
    },
};

/// Tag for grouping salon staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "salon_user";

/// Add a staff member to a salon.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Salon ID, name and role (`OWNER`, `MANAGER` or `STAFF`)
///
/// # Returns
/// - `201 Created` - Created staff member
/// - `400 Bad Request` - Empty name or unknown role
/// - `404 Not Found` - Salon does not exist
#[utoipa::path(
    post,
    path = "/salon-user/add",
    tag = STAFF_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff member created", body = ApiResponse<StaffDto>),
        (status = 400, description = "Invalid staff data", body = ErrorDto),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    Json(payload): Json<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateStaffParam::from_dto(payload)?;
    let staff = StaffService::new(&state.db).create(param).await?;

    Ok(reply(
        StatusCode::CREATED,
        "User created successfully.",
        staff.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/salon-user/get/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member found", body = ApiResponse<StaffDto>),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db).get(id).await?;

    Ok(reply(
        StatusCode::OK,
        "User found successfully.",
        staff.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/salon-user/get-all",
    tag = STAFF_TAG,
    params(StaffListParam),
    responses(
        (status = 200, description = "Staff fetched", body = ApiResponse<Vec<StaffDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_members(
    State(state): State<AppState>,
    Query(params): Query<StaffListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let staff = StaffService::new(&state.db)
        .list(StaffFilter {
            salon_id: params.salon_id,
            page,
            limit,
        })
        .await?;

    Ok(reply_page(
        "Users fetched successfully.",
        staff.map(|member| member.into_dto()),
    ))
}

#[utoipa::path(
    put,
    path = "/salon-user/update/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Staff member updated", body = ApiResponse<StaffDto>),
        (status = 400, description = "Empty name or unknown role", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateStaffParam::from_dto(payload)?;
    let staff = StaffService::new(&state.db).update(id, param).await?;

    Ok(reply(
        StatusCode::OK,
        "User updated successfully.",
        staff.into_dto(),
    ))
}

/// Soft-delete a staff member.
///
/// # Returns
/// - `200 OK` - Deleted staff member
/// - `400 Bad Request` - The staff member still offers active services
/// - `404 Not Found` - Staff member does not exist
#[utoipa::path(
    delete,
    path = "/salon-user/delete/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = ApiResponse<StaffDto>),
        (status = 400, description = "Staff member still offers services", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db).delete(id, Utc::now()).await?;

    Ok(reply(
        StatusCode::OK,
        "User deleted successfully.",
        staff.into_dto(),
    ))
}
