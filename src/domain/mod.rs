//! Domain types for the student registry.

mod student;

pub use student::*;
