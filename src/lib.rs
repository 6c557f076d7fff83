//! Campus GUI Library
//!
//! List views for the school-management desktop client: a generic paginated,
//! sortable data table and the pages built on it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod state;
pub mod theme;
pub mod utils;
