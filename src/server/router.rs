use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        appointment::{self, APPOINTMENT_TAG},
        customer::{self, CUSTOMER_TAG},
        leave::{self, LEAVE_TAG},
        salon::{self, SALON_TAG},
        service::{self, SERVICE_TAG},
        staff::{self, STAFF_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "salonbook", description = "Salon appointment booking API"),
    tags(
        (name = APPOINTMENT_TAG, description = "Booking, rescheduling and slot availability"),
        (name = SALON_TAG, description = "Salon registration and opening hours"),
        (name = STAFF_TAG, description = "Salon staff members"),
        (name = SERVICE_TAG, description = "Service catalog"),
        (name = CUSTOMER_TAG, description = "Customer accounts"),
        (name = LEAVE_TAG, description = "Salon closures")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(appointment::create_appointment))
        .routes(routes!(appointment::update_appointment))
        .routes(routes!(appointment::update_appointment_status))
        .routes(routes!(appointment::get_appointment))
        .routes(routes!(appointment::get_appointments))
        .routes(routes!(appointment::delete_appointment))
        .routes(routes!(appointment::get_slots))
        .routes(routes!(salon::create_salon))
        .routes(routes!(salon::update_salon))
        .routes(routes!(salon::get_salon))
        .routes(routes!(salon::get_salons))
        .routes(routes!(salon::delete_salon))
        .routes(routes!(staff::create_staff))
        .routes(routes!(staff::get_staff))
        .routes(routes!(staff::get_staff_members))
        .routes(routes!(staff::update_staff))
        .routes(routes!(staff::delete_staff))
        .routes(routes!(service::create_service))
        .routes(routes!(service::get_service))
        .routes(routes!(service::get_services))
        .routes(routes!(service::update_service))
        .routes(routes!(service::delete_service))
        .routes(routes!(customer::create_customer))
        .routes(routes!(customer::get_customer))
        .routes(routes!(customer::get_customers))
        .routes(routes!(customer::update_customer))
        .routes(routes!(customer::delete_customer))
        .routes(routes!(leave::create_leave))
        .routes(routes!(leave::get_leave))
        .routes(routes!(leave::get_leaves))
        .routes(routes!(leave::update_leave))
        .routes(routes!(leave::delete_leave))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
