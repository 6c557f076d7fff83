//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Below this viewport width (logical pixels) tables switch to card layout
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Page-size choices offered by the pagination control
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Default rows per page (matches the backend default)
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size the backend accepts
pub const MAX_PAGE_SIZE: usize = 100;

/// Page windows with at most this many pages are rendered without ellipses
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Table row and header heights in pixels
pub const TABLE_ROW_HEIGHT: f32 = 40.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
