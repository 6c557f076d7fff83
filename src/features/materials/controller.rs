//! Materials Controller
//!
//! Fetches training materials page by page and applies status changes.

use chrono::{TimeZone, Utc};
use gpui::App;
use tracing::{debug, info, warn};

use crate::app::entities::{AppEntities, update_settings_and_save};
use crate::domain::{FileStatus, MaterialsTab, TrainingFile};

/// Materials page controller
#[derive(Clone)]
pub struct MaterialsController {
    entities: AppEntities,
}

impl MaterialsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load all uploaded materials
    pub fn refresh(&self, cx: &mut App) {
        self.entities.materials.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        let files = sample_files();
        info!(count = files.len(), "Training materials loaded");

        self.entities.materials.update(cx, |state, cx| {
            state.set_files(files);
            cx.notify();
        });
    }

    pub fn set_tab(&self, tab: MaterialsTab, cx: &mut App) {
        debug!(?tab, "Materials tab changed");
        self.entities.materials.update(cx, |state, cx| {
            state.set_tab(tab);
            state.select(None);
            cx.notify();
        });
    }

    pub fn set_page(&self, page: usize, cx: &mut App) {
        self.entities.materials.update(cx, |state, cx| {
            state.set_page(page);
            cx.notify();
        });
    }

    pub fn set_per_page(&self, per_page: usize, cx: &mut App) {
        self.entities.materials.update(cx, |state, cx| {
            state.set_per_page(per_page);
            cx.notify();
        });
        update_settings_and_save(
            &self.entities,
            "materials_page_size",
            |settings| {
                settings.set_page_size(per_page);
            },
            cx,
        );
    }

    pub fn select(&self, file: &TrainingFile, cx: &mut App) {
        debug!(id = file.id, name = %file.original_filename, "Material selected");
        self.entities.materials.update(cx, |state, cx| {
            state.select(Some(file.id));
            cx.notify();
        });
    }

    /// Move a file to the skipped state
    pub fn skip(&self, id: u32, cx: &mut App) {
        self.entities.materials.update(cx, |state, cx| {
            if state.set_status(id, FileStatus::Skipped) {
                info!(id, "Material skipped");
            } else {
                warn!(id, "Cannot skip unknown material");
            }
            cx.notify();
        });
    }
}

/// Deterministic demo uploads
pub fn sample_files() -> Vec<TrainingFile> {
    const SUBJECTS: [&str; 4] = ["Mathematics", "Science", "English", "History"];
    const SCHOOLS: [&str; 3] = ["Hillside Academy", "Riverbend School", "Oakridge High"];

    let Some(base) = Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).single() else {
        return Vec::new();
    };

    (1..=27u32)
        .map(|id| {
            let idx = id as usize;
            let subject = SUBJECTS[idx % SUBJECTS.len()];
            let status = match id % 5 {
                0 | 3 => FileStatus::Trained,
                4 => FileStatus::Skipped,
                _ => FileStatus::Uploaded,
            };
            TrainingFile {
                id,
                original_filename: format!("{}-unit-{:02}.pdf", subject.to_lowercase(), id),
                uploaded_at: base + chrono::Duration::hours(i64::from(id * 31)),
                file_size: 48_000 + u64::from(id) * 7_350,
                mime_type: "application/pdf".to_string(),
                file_status: status,
                subject_name: subject.to_string(),
                school_name: SCHOOLS[idx % SCHOOLS.len()].to_string(),
                grade_name: format!("Grade {}", 6 + id % 3),
            }
        })
        .collect()
}
