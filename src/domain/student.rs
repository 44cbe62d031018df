//! Student domain types.
//!
//! A student is a name plus a mapping of class names to grades.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A grade for one class.
///
/// `None` is the not-a-number sentinel produced when a grade cannot be
/// parsed. It serializes as JSON `null`.
pub type Grade = Option<i64>;

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    /// Unique identifier, assigned by the server.
    pub id: String,
    /// Display name. Not unique.
    pub name: String,
    /// Class name to grade.
    #[serde(default)]
    #[schema(value_type = BTreeMap<String, Option<i64>>)]
    pub classes: BTreeMap<String, Grade>,
}

impl Student {
    /// Create a new student with a freshly generated id.
    pub fn new(name: impl Into<String>, classes: BTreeMap<String, Grade>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            classes,
        }
    }

    /// Create a student with an explicit id (bootstrap data).
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        classes: BTreeMap<String, Grade>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            classes,
        }
    }

    /// Set the grade for a class, inserting or overwriting.
    pub fn set_grade(&mut self, class: impl Into<String>, grade: Grade) {
        self.classes.insert(class.into(), grade);
    }

    /// Arithmetic mean of all grades.
    ///
    /// Returns NaN when the student has no classes or when any grade is
    /// the not-a-number sentinel.
    pub fn gpa(&self) -> f64 {
        let sum: f64 = self
            .classes
            .values()
            .map(|grade| grade.map_or(f64::NAN, |g| g as f64))
            .sum();

        sum / self.classes.len() as f64
    }
}

/// Parse a grade from a path segment.
///
/// Accepts leading whitespace, an optional sign and a run of digits; any
/// trailing characters are ignored (`"85abc"` is 85). Input without
/// leading digits, or a value that overflows, yields the sentinel.
pub fn parse_grade(raw: &str) -> Grade {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// The three records the registry starts with.
pub fn seed_students() -> Vec<Student> {
    let classes = || {
        BTreeMap::from([
            ("biology".to_string(), Some(95)),
            ("algebra".to_string(), Some(92)),
        ])
    };

    vec![
        Student::with_id("1", "Jessica Drake", classes()),
        Student::with_id("2", "Ben Cohen", classes()),
        Student::with_id("3", "Lisa Downing", classes()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(entries: &[(&str, Grade)]) -> BTreeMap<String, Grade> {
        entries
            .iter()
            .map(|(class, grade)| (class.to_string(), *grade))
            .collect()
    }

    #[test]
    fn test_new_student_gets_uuid() {
        let a = Student::new("Ana", BTreeMap::new());
        let b = Student::new("Ana", BTreeMap::new());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_gpa_mean() {
        let student = Student::new(
            "Jessica",
            grades(&[("biology", Some(95)), ("algebra", Some(92))]),
        );
        assert_eq!(student.gpa(), 93.5);
        assert_eq!(student.gpa().to_string(), "93.5");
    }

    #[test]
    fn test_gpa_whole_number_renders_without_fraction() {
        let student = Student::new("Ana", grades(&[("math", Some(80)), ("art", Some(100))]));
        assert_eq!(student.gpa().to_string(), "90");
    }

    #[test]
    fn test_gpa_no_classes_is_nan() {
        let student = Student::new("Empty", BTreeMap::new());
        assert!(student.gpa().is_nan());
        assert_eq!(student.gpa().to_string(), "NaN");
    }

    #[test]
    fn test_gpa_with_sentinel_grade_is_nan() {
        let student = Student::new("Ana", grades(&[("math", Some(80)), ("art", None)]));
        assert!(student.gpa().is_nan());
    }

    #[test]
    fn test_set_grade_overwrites_and_inserts() {
        let mut student = Student::new("Ana", grades(&[("math", Some(80)), ("art", Some(100))]));
        student.set_grade("math", Some(70));
        student.set_grade("history", Some(60));

        assert_eq!(student.classes["math"], Some(70));
        assert_eq!(student.classes["art"], Some(100));
        assert_eq!(student.classes["history"], Some(60));
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("85"), Some(85));
        assert_eq!(parse_grade("  42"), Some(42));
        assert_eq!(parse_grade("-7"), Some(-7));
        assert_eq!(parse_grade("+7"), Some(7));
        assert_eq!(parse_grade("85.9"), Some(85));
        assert_eq!(parse_grade("70abc"), Some(70));
        assert_eq!(parse_grade("abc"), None);
        assert_eq!(parse_grade(""), None);
        assert_eq!(parse_grade("-"), None);
        assert_eq!(parse_grade("99999999999999999999999"), None);
    }

    #[test]
    fn test_sentinel_grade_serializes_as_null() {
        let student = Student::with_id("9", "Ana", grades(&[("math", None)]));
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "9", "name": "Ana", "classes": {"math": null}})
        );
    }

    #[test]
    fn test_seed_students() {
        let seeds = seed_students();
        let ids: Vec<_> = seeds.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(seeds[0].name, "Jessica Drake");
        assert_eq!(seeds[2].gpa(), 93.5);
    }
}
