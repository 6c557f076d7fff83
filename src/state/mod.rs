//! State - Models Behind the Pages
//!
//! Plain data models that pages wrap in GPUI entities.

pub mod collection_state;
pub mod materials_state;
pub mod view_settings;

pub use collection_state::{CollectionRecord, CollectionState};
pub use materials_state::MaterialsState;
pub use view_settings::ViewSettings;
