//! HTTP API layer for the student registry.
//!
//! Provides REST endpoints for listing, creating, deleting and grading
//! students.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
