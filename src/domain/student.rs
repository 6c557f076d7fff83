//! Student - Roster Entry

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::CollectionRecord;

/// A student on a class roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique ID
    pub id: u32,
    /// Full name
    pub name: String,
    /// Grade name (e.g. "Grade 7")
    pub grade: String,
    /// Class name, `None` when not yet assigned
    pub class_name: Option<String>,
    /// Class section (e.g. "B")
    pub section: Option<String>,
    /// Enrollment date
    pub enrolled_on: NaiveDate,
}

impl Student {
    /// Class label as shown in the roster
    pub fn class_label(&self) -> String {
        match (&self.class_name, &self.section) {
            (None, _) => "Unassigned".to_string(),
            (Some(name), Some(section)) => format!("{name} ({section})"),
            (Some(name), None) => name.clone(),
        }
    }
}

impl CollectionRecord for Student {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.grade.as_str()];
        fields.extend(self.class_name.as_deref());
        fields
    }

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.to_lowercase().cmp(&other.name.to_lowercase())),
            "grade" => Some(self.grade.cmp(&other.grade)),
            "class" => Some(self.class_label().cmp(&other.class_label())),
            "enrolled_on" => Some(self.enrolled_on.cmp(&other.enrolled_on)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, class_name: Option<&str>, section: Option<&str>) -> Student {
        Student {
            id: 1,
            name: name.to_string(),
            grade: "Grade 7".to_string(),
            class_name: class_name.map(str::to_string),
            section: section.map(str::to_string),
            enrolled_on: NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date"),
        }
    }

    #[test]
    fn class_label_variants() {
        assert_eq!(student("A", None, None).class_label(), "Unassigned");
        assert_eq!(student("A", Some("7A"), Some("B")).class_label(), "7A (B)");
        assert_eq!(student("A", Some("7A"), None).class_label(), "7A");
    }

    #[test]
    fn search_covers_name_grade_and_class() {
        let s = student("Maya Chen", Some("Rosewood"), Some("A"));
        assert!(s.matches("maya"));
        assert!(s.matches("GRADE 7"));
        assert!(s.matches("rose"));
        assert!(!s.matches("grade 8"));
    }

    #[test]
    fn name_ordering_ignores_case() {
        let a = student("alice", None, None);
        let b = student("Bob", None, None);
        assert_eq!(a.compare_field(&b, "name"), Some(Ordering::Less));
        assert_eq!(a.compare_field(&b, "unknown"), None);
    }
}
