//! Viewport
//!
//! Responsive layout selection for collection views.

use crate::constants::NARROW_BREAKPOINT;

/// How a collection is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Header + rows
    #[default]
    Table,
    /// One card per record
    Cards,
}

/// Whether a viewport width counts as narrow
pub fn is_narrow(width: f32) -> bool {
    width < NARROW_BREAKPOINT
}

/// Pick a layout. Cards need a narrow viewport, a card renderer and the card
/// layout switch; everything else is a table.
pub fn layout_mode(narrow: bool, has_card_renderer: bool, card_layout: bool) -> LayoutMode {
    if narrow && has_card_renderer && card_layout {
        LayoutMode::Cards
    } else {
        LayoutMode::Table
    }
}
