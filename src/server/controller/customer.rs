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
        customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    },
    server::{
        controller::{
            param::{paging, CustomerListParam},
            reply, reply_page,
        },
        error::AppError,
        model::customer::{CreateCustomerParam, CustomerFilter, UpdateCustomerParam},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Register a customer.
///
/// # Returns
/// - `201 Created` - Created customer
/// - `400 Bad Request` - Missing fields or mobile number already in use
#[utoipa::path(
    post,
    path = "/customer/add",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerDto>),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCustomerParam::from_dto(payload)?;
    let customer = CustomerService::new(&state.db).create(param).await?;

    Ok(reply(
        StatusCode::CREATED,
        "Customer created successfully.",
        customer.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/get/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db).get(id).await?;

    Ok(reply(
        StatusCode::OK,
        "Customer found successfully.",
        customer.into_dto(),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/get-all",
    tag = CUSTOMER_TAG,
    params(CustomerListParam),
    responses(
        (status = 200, description = "Customers fetched", body = ApiResponse<Vec<CustomerDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    Query(params): Query<CustomerListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = paging(params.page, params.limit);
    let customers = CustomerService::new(&state.db)
        .list(CustomerFilter {
            search: params.search,
            page,
            limit,
        })
        .await?;

    Ok(reply_page(
        "Customers fetched successfully.",
        customers.map(|customer| customer.into_dto()),
    ))
}

/// Change a customer's name or mobile number.
///
/// # Returns
/// - `200 OK` - Updated customer
/// - `400 Bad Request` - Blank mobile number, or one used by another customer
/// - `404 Not Found` - Customer does not exist
#[utoipa::path(
    put,
    path = "/customer/update/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerDto>),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCustomerParam::from_dto(payload)?;
    let customer = CustomerService::new(&state.db).update(id, param).await?;

    Ok(reply(
        StatusCode::OK,
        "Customer updated successfully.",
        customer.into_dto(),
    ))
}

/// Soft-delete a customer. Existing appointments are kept.
#[utoipa::path(
    delete,
    path = "/customer/delete/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db)
        .delete(id, Utc::now())
        .await?;

    Ok(reply(
        StatusCode::OK,
        "Customer deleted successfully.",
        customer.into_dto(),
    ))
}
