//! TrainingFile - Uploaded Training Material

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::components::composite::data_table::RowTone;

/// Processing status of an uploaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileStatus {
    #[default]
    Uploaded,
    /// Training has been started on the server
    Processing,
    Skipped,
    Trained,
    /// Any status this client does not know
    #[serde(other)]
    Unknown,
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Uploaded => "Uploaded",
            FileStatus::Processing => "Processing",
            FileStatus::Skipped => "Skipped",
            FileStatus::Trained => "Trained",
            FileStatus::Unknown => "Unknown",
        }
    }

    /// Row tint in the materials table
    pub fn tone(&self) -> RowTone {
        match self {
            FileStatus::Uploaded | FileStatus::Processing => RowTone::Normal,
            FileStatus::Skipped | FileStatus::Unknown => RowTone::Muted,
            FileStatus::Trained => RowTone::Success,
        }
    }
}

/// A `null` status reads as `Uploaded`
fn status_or_default<'de, D>(deserializer: D) -> Result<FileStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FileStatus>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabs of the materials page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MaterialsTab {
    #[default]
    NotTrained,
    Trained,
}

impl MaterialsTab {
    pub fn all() -> &'static [MaterialsTab] {
        &[MaterialsTab::NotTrained, MaterialsTab::Trained]
    }

    /// Translation key for the tab title
    pub fn title_key(&self) -> &'static str {
        match self {
            MaterialsTab::NotTrained => "materials.tab_not_trained",
            MaterialsTab::Trained => "materials.tab_trained",
        }
    }

    /// Whether a file with this status is listed under the tab
    pub fn includes(&self, status: FileStatus) -> bool {
        match self {
            MaterialsTab::NotTrained => {
                matches!(status, FileStatus::Uploaded | FileStatus::Skipped)
            }
            MaterialsTab::Trained => status == FileStatus::Trained,
        }
    }
}

/// An uploaded training document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingFile {
    /// Unique ID
    pub id: u32,
    /// File name as uploaded
    pub original_filename: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Size in bytes
    pub file_size: u64,
    pub mime_type: String,
    #[serde(default, deserialize_with = "status_or_default")]
    pub file_status: FileStatus,
    pub subject_name: String,
    pub school_name: String,
    pub grade_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_split_by_status() {
        assert!(MaterialsTab::NotTrained.includes(FileStatus::Uploaded));
        assert!(MaterialsTab::NotTrained.includes(FileStatus::Skipped));
        assert!(!MaterialsTab::NotTrained.includes(FileStatus::Trained));
        assert!(MaterialsTab::Trained.includes(FileStatus::Trained));
        assert!(!MaterialsTab::Trained.includes(FileStatus::Skipped));
    }

    #[test]
    fn missing_status_defaults_to_uploaded() {
        let body = r#"{
            "id": 4,
            "original_filename": "algebra.pdf",
            "uploaded_at": "2024-10-01T08:30:00Z",
            "file_size": 20480,
            "mime_type": "application/pdf",
            "subject_name": "Mathematics",
            "school_name": "Hillside",
            "grade_name": "Grade 8"
        }"#;
        let file: TrainingFile = serde_json::from_str(body).expect("valid file");
        assert_eq!(file.file_status, FileStatus::Uploaded);
        assert_eq!(file.file_status.tone(), RowTone::Normal);
    }

    fn file_with_status(status: &str) -> String {
        format!(
            r#"{{
                "id": 9,
                "original_filename": "cells.pdf",
                "uploaded_at": "2024-10-02T09:00:00Z",
                "file_size": 4096,
                "mime_type": "application/pdf",
                "file_status": {status},
                "subject_name": "Biology",
                "school_name": "Hillside",
                "grade_name": "Grade 7"
            }}"#
        )
    }

    #[test]
    fn null_status_reads_as_uploaded() {
        let file: TrainingFile =
            serde_json::from_str(&file_with_status("null")).expect("null status");
        assert_eq!(file.file_status, FileStatus::Uploaded);
    }

    #[test]
    fn processing_and_unknown_statuses_decode() {
        let file: TrainingFile =
            serde_json::from_str(&file_with_status(r#""Processing""#)).expect("processing");
        assert_eq!(file.file_status, FileStatus::Processing);
        assert!(!MaterialsTab::NotTrained.includes(file.file_status));
        assert!(!MaterialsTab::Trained.includes(file.file_status));

        let file: TrainingFile =
            serde_json::from_str(&file_with_status(r#""Archived""#)).expect("unknown");
        assert_eq!(file.file_status, FileStatus::Unknown);
        assert_eq!(file.file_status.tone(), RowTone::Muted);
    }

    #[test]
    fn status_tones() {
        assert_eq!(FileStatus::Skipped.tone(), RowTone::Muted);
        assert_eq!(FileStatus::Trained.tone(), RowTone::Success);
        assert_eq!(FileStatus::Trained.to_string(), "Trained");
    }
}
