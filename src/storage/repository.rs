//! Repository layer for student records.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Grade, Student};
use crate::error::{RegistryError, RegistryResult};

/// Storage operations the API needs over the student collection.
///
/// Implementations must keep insertion order for `list`.
pub trait StudentRepository: Send + Sync {
    /// All students, in insertion order.
    fn list(&self) -> RegistryResult<Vec<Student>>;

    /// First student whose name matches exactly.
    fn find_by_name(&self, name: &str) -> RegistryResult<Option<Student>>;

    /// First student whose id matches exactly.
    fn find_by_id(&self, id: &str) -> RegistryResult<Option<Student>>;

    /// Append a student to the end of the collection.
    fn add(&self, student: Student) -> RegistryResult<Student>;

    /// Remove every student with this id, returning how many were removed.
    fn remove_by_id(&self, id: &str) -> RegistryResult<usize>;

    /// Set one class grade on the first student with this name.
    ///
    /// Returns the updated record, or `None` if no student matched.
    fn update_grade(&self, name: &str, class: &str, grade: Grade)
        -> RegistryResult<Option<Student>>;

    /// Number of students currently stored.
    fn count(&self) -> RegistryResult<usize> {
        Ok(self.list()?.len())
    }
}

/// Repository keeping students in process memory.
///
/// One lock guards the whole collection, so each operation's scan and
/// mutation happen as a unit.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given students.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Vec<Student>>> {
        self.students
            .read()
            .map_err(|_| RegistryError::Internal("Student store lock poisoned".to_string()))
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Vec<Student>>> {
        self.students
            .write()
            .map_err(|_| RegistryError::Internal("Student store lock poisoned".to_string()))
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn list(&self) -> RegistryResult<Vec<Student>> {
        Ok(self.read()?.clone())
    }

    fn find_by_name(&self, name: &str) -> RegistryResult<Option<Student>> {
        Ok(self.read()?.iter().find(|s| s.name == name).cloned())
    }

    fn find_by_id(&self, id: &str) -> RegistryResult<Option<Student>> {
        Ok(self.read()?.iter().find(|s| s.id == id).cloned())
    }

    fn add(&self, student: Student) -> RegistryResult<Student> {
        self.write()?.push(student.clone());
        Ok(student)
    }

    fn remove_by_id(&self, id: &str) -> RegistryResult<usize> {
        let mut students = self.write()?;
        let before = students.len();
        students.retain(|s| s.id != id);
        Ok(before - students.len())
    }

    fn update_grade(
        &self,
        name: &str,
        class: &str,
        grade: Grade,
    ) -> RegistryResult<Option<Student>> {
        let mut students = self.write()?;
        Ok(students.iter_mut().find(|s| s.name == name).map(|student| {
            student.set_grade(class, grade);
            student.clone()
        }))
    }

    fn count(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }
}
