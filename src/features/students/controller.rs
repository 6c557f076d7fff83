//! Students Controller
//!
//! Loads the roster and applies search, sort and paging requests.

use chrono::NaiveDate;
use gpui::App;
use tracing::{debug, info};

use crate::app::entities::{AppEntities, update_settings_and_save};
use crate::components::composite::data_table::SortState;
use crate::domain::Student;

/// Search presets offered above the roster
pub static SEARCH_PRESETS: [(&str, &str); 4] = [
    ("students.preset_all", ""),
    ("students.preset_grade_6", "Grade 6"),
    ("students.preset_grade_7", "Grade 7"),
    ("students.preset_grade_8", "Grade 8"),
];

/// Students page controller
#[derive(Clone)]
pub struct StudentsController {
    entities: AppEntities,
}

impl StudentsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load the roster
    pub fn refresh(&self, cx: &mut App) {
        self.entities.students.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        let students = sample_students();
        info!(count = students.len(), "Student roster loaded");

        self.entities.students.update(cx, |state, cx| {
            state.set_records(students);
            cx.notify();
        });
    }

    pub fn set_search(&self, term: &str, cx: &mut App) {
        debug!(term, "Student search changed");
        self.entities.students.update(cx, |state, cx| {
            state.set_search(term);
            cx.notify();
        });
    }

    pub fn set_sort(&self, sort: SortState, cx: &mut App) {
        self.entities.students.update(cx, |state, cx| {
            state.set_sort(sort);
            cx.notify();
        });
    }

    pub fn set_page(&self, page: usize, cx: &mut App) {
        self.entities.students.update(cx, |state, cx| {
            state.set_page(page);
            cx.notify();
        });
    }

    /// Change the page size and remember it
    pub fn set_per_page(&self, per_page: usize, cx: &mut App) {
        self.entities.students.update(cx, |state, cx| {
            state.set_per_page(per_page);
            cx.notify();
        });
        update_settings_and_save(
            &self.entities,
            "students_page_size",
            |settings| {
                settings.set_page_size(per_page);
            },
            cx,
        );
    }
}

/// Deterministic demo roster across three grades
pub fn sample_students() -> Vec<Student> {
    const FIRST: [&str; 12] = [
        "Aarav", "Maya", "Liam", "Zoe", "Ethan", "Priya", "Noah", "Sofia", "Omar", "Hana", "Lucas",
        "Ines",
    ];
    const LAST: [&str; 5] = ["Chen", "Patel", "Garcia", "Okafor", "Novak"];
    const CLASSES: [(&str, &str); 3] = [("Rosewood", "A"), ("Maple", "B"), ("Cedar", "C")];

    let start = NaiveDate::from_ymd_opt(2023, 8, 28).unwrap_or_default();

    (0..42u32)
        .map(|i| {
            let idx = i as usize;
            let grade = 6 + i % 3;
            let class = (i % 7 != 0).then(|| CLASSES[idx % CLASSES.len()]);
            Student {
                id: i + 1,
                name: format!("{} {}", FIRST[idx % FIRST.len()], LAST[idx % LAST.len()]),
                grade: format!("Grade {grade}"),
                class_name: class.map(|(name, _)| format!("{grade}{name}")),
                section: class.map(|(_, section)| section.to_string()),
                enrolled_on: start + chrono::Duration::days(i64::from(i * 9)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CollectionRecord, CollectionState};

    #[test]
    fn sample_roster_spans_presets() {
        let students = sample_students();
        assert_eq!(students.len(), 42);
        for (_, term) in SEARCH_PRESETS.iter().skip(1) {
            assert_eq!(students.iter().filter(|s| s.matches(term)).count(), 14);
        }
        assert!(students.iter().any(|s| s.class_name.is_none()));
    }

    #[test]
    fn preset_search_pages_roster() {
        let mut state = CollectionState::new(10);
        state.set_records(sample_students());
        state.set_search("grade 8");
        assert_eq!(state.total_pages(), 2);
        assert!(state.page_rows().iter().all(|s| s.grade == "Grade 8"));
    }
}
