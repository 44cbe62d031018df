//! Storage layer for the student registry.
//!
//! The collection lives in process memory behind the `StudentRepository`
//! trait, so another store can be swapped in without touching the API.

mod repository;

pub use repository::{InMemoryStudentRepository, StudentRepository};
