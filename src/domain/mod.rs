//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the school records shown in lists.

pub mod student;
pub mod training_file;

pub use student::Student;
pub use training_file::{FileStatus, MaterialsTab, TrainingFile};
