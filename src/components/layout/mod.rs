//! Layout Components
//!
//! Shell pieces around the pages.

pub mod sidebar;
