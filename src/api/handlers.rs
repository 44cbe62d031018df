//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::types::*;
use crate::domain::{parse_grade, Student};
use crate::error::{RegistryError, RegistryResult};
use crate::AppState;

const MISSING_NAME: &str = "Missing name in request body";

/// List all students in insertion order.
///
/// GET /students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [Student]),
        (status = 500, description = "Internal error")
    ),
    tag = "students"
)]
pub async fn list_students(State(state): State<AppState>) -> RegistryResult<Json<Vec<Student>>> {
    let students = state.repository.list()?;
    tracing::debug!(count = students.len(), "Listing students");
    Ok(Json(students))
}

/// Get the first student with the given name.
///
/// GET /students/{name}
#[utoipa::path(
    get,
    path = "/students/{name}",
    params(
        ("name" = String, Path, description = "Student name")
    ),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "No student with that name", body = String)
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RegistryResult<Json<Student>> {
    state
        .repository
        .find_by_name(&name)?
        .map(Json)
        .ok_or_else(|| RegistryError::student_name_not_found(&name))
}

/// Create a student with a server-assigned id.
///
/// POST /students
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing name or malformed body", body = String)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> RegistryResult<(StatusCode, Json<Student>)> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "Rejected create request body");
        RegistryError::BadRequest(e.body_text())
    })?;

    let name = match request.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(RegistryError::BadRequest(MISSING_NAME.to_string())),
    };

    let mut student = Student::new(name, request.classes);
    while state.repository.find_by_id(&student.id)?.is_some() {
        student = Student::new(student.name, student.classes);
    }

    let student = state.repository.add(student)?;

    tracing::info!(id = %student.id, name = %student.name, "Student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// Delete every student with the given id.
///
/// DELETE /students/{id}
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 201, description = "Student deleted", body = String),
        (status = 404, description = "No student with that id", body = String)
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RegistryResult<(StatusCode, String)> {
    let removed = state.repository.remove_by_id(&id)?;
    if removed == 0 {
        return Err(RegistryError::student_id_not_found(&id));
    }

    tracing::info!(id = %id, removed, "Student deleted");

    Ok((StatusCode::CREATED, format!("Student {} was deleted.", id)))
}

/// Assign a grade in one class to a student.
///
/// PUT /students/{name}/{class}/{grade}
#[utoipa::path(
    put,
    path = "/students/{name}/{class}/{grade}",
    params(
        ("name" = String, Path, description = "Student name"),
        ("class" = String, Path, description = "Class name"),
        ("grade" = String, Path, description = "Integer grade")
    ),
    responses(
        (status = 201, description = "Grade assigned", body = String),
        (status = 404, description = "No student with that name", body = String)
    ),
    tag = "students"
)]
pub async fn update_grade(
    State(state): State<AppState>,
    Path((name, class, grade)): Path<(String, String, String)>,
) -> RegistryResult<(StatusCode, String)> {
    let parsed = parse_grade(&grade);
    if parsed.is_none() {
        tracing::warn!(grade = %grade, "Grade is not a number, storing sentinel");
    }

    state
        .repository
        .update_grade(&name, &class, parsed)?
        .ok_or_else(|| RegistryError::student_name_not_found(&name))?;

    tracing::info!(name = %name, class = %class, grade = ?parsed, "Grade assigned");

    Ok((
        StatusCode::CREATED,
        format!(
            "Student {} was assigned a grade of {} in {}",
            name, grade, class
        ),
    ))
}

/// Compute a student's GPA.
///
/// GET /students/{name}/gpa
#[utoipa::path(
    get,
    path = "/students/{name}/gpa",
    params(
        ("name" = String, Path, description = "Student name")
    ),
    responses(
        (status = 201, description = "Mean of all grades, or NaN", body = String),
        (status = 404, description = "No student with that name", body = String)
    ),
    tag = "students"
)]
pub async fn get_gpa(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RegistryResult<(StatusCode, String)> {
    let student = state
        .repository
        .find_by_name(&name)?
        .ok_or_else(|| RegistryError::student_name_not_found(&name))?;

    let gpa = student.gpa();
    tracing::info!(name = %name, classes = student.classes.len(), gpa, "GPA computed");

    Ok((StatusCode::CREATED, gpa.to_string()))
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> RegistryResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        students: state.repository.count()?,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
