//! Route definitions for the API.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_students,
        handlers::get_student,
        handlers::create_student,
        handlers::delete_student,
        handlers::update_grade,
        handlers::get_gpa,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::CreateStudentRequest,
        crate::api::types::HealthResponse,
        crate::domain::Student,
    )),
    tags(
        (name = "students", description = "Student records and grades"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Student Registry API",
        version = "0.1.0",
        description = "In-memory student grade registry",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// `GET /students/:name` and `DELETE /students/:id` share one path node, so
/// both are registered under the `:name` parameter.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Students
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/:name",
            get(handlers::get_student).delete(handlers::delete_student),
        )
        .route("/students/:name/gpa", get(handlers::get_gpa))
        .route("/students/:name/:class/:grade", put(handlers::update_grade))
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
