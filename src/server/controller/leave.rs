use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        leave::{CreateLeaveDto, LeaveDto, UpdateLeaveDto},
    },
    server::{
        controller::{
            param::{paging, LeaveListParam},
            reply, reply_page,
        },
        error::AppError,
        model::leave::{CreateLeaveParam, UpdateLeaveParam},
        service::leave::LeaveService,
        state::AppState,
    },
};

/// Tag for grouping leave endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leave";

/// Record a salon leave.
///
/// A `DAY` leave closes the salon for the whole date. An `HOURS` leave needs a
/// start and end label and blocks that window only.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Salon ID, date, leave type and optional hours and reason
///
/// # Returns
/// - `201 Created` - Created leave
/// - `400 Bad Request` - Unknown type, missing or inverted hours
/// - `404 Not Found` - Salon does not exist
#[utoipa::path(
    post,
    path = "/leave/add",
    tag = LEAVE_TAG,
    request_body = CreateLeaveDto,
    responses(
        (status = 201, description = "Leave created", body = ApiResponse<LeaveDto>),
        (status = 400, description = "Invalid leave data", body = ErrorDto),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_leave(
    State(state): State<AppState>,
    Json(payload): Json<CreateLeaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateLeaveParam::from_dto(payload)?;
    let leave = LeaveService::new(&state.db).create(param).await?;

    Ok(reply(
        StatusCode::CREATED,
        "Leave created successfully.",
        leave.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/leave/get/{id}",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave ID")),
    responses(
        (status = 200, description = "Leave found", body = ApiResponse<LeaveDto>),
        (status = 404, description = "Leave not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leave(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let leave = LeaveService::new(&state.db).get(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Leave found successfully.",
        leave.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/leave/get-all",
    tag = LEAVE_TAG,
    params(LeaveListParam),
    responses(
        (status = 200, description = "Leaves fetched", body = ApiResponse<Vec<LeaveDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaves(
    State(state): State<AppState>,
    Query(params): Query<LeaveListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let leaves = LeaveService::new(&state.db)
        .list(params.salon_id, page, limit)
        .await?;

    Ok(reply_page(
        "Leaves fetched successfully.",
        leaves.map(|leave| leave.into_dto()),
    ))
}

/// Change a leave.
///
/// Omitted fields keep their stored value. The merged leave is validated like
/// a new one, so an `HOURS` leave still needs a start before its end.
///
/// # Returns
/// - `200 OK` - Updated leave
/// - `400 Bad Request` - Unknown type, bad labels, missing or inverted hours
/// - `404 Not Found` - Leave does not exist
#[utoipa::path(
    put,
    path = "/leave/update/{id}",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave ID")),
    request_body = UpdateLeaveDto,
    responses(
        (status = 200, description = "Leave updated", body = ApiResponse<LeaveDto>),
        (status = 400, description = "Invalid leave data", body = ErrorDto),
        (status = 404, description = "Leave not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_leave(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLeaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateLeaveParam::from_dto(payload)?;
    let leave = LeaveService::new(&state.db).update(id, param).await?;

    Ok(reply(
        StatusCode::OK,
        "Leave updated successfully.",
        leave.into_dto(),
    ))
}

#[utoipa::path(
    delete,
    path = "/leave/delete/{id}",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave ID")),
    responses(
        (status = 200, description = "Leave deleted", body = ApiResponse<LeaveDto>),
        (status = 404, description = "Leave not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_leave(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let leave = LeaveService::new(&state.db).delete(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Leave deleted successfully.",
        leave.into_dto(),
    ))
}
