//! API request and response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Grade;

// ==================== Students ====================

/// Request to create a student.
///
/// `name` is optional at the wire level so a missing name can be reported
/// with a proper message instead of a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Student name. Required and non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Initial class grades.
    #[serde(default)]
    #[schema(value_type = BTreeMap<String, Option<i64>>)]
    pub classes: BTreeMap<String, Grade>,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of students currently stored.
    pub students: usize,
    /// Timestamp.
    pub timestamp: String,
}
