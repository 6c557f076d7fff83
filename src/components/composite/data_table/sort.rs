//! Sort State
//!
//! Caller-owned sort descriptors and the header-click toggle cycle.

use gpui::SharedString;

/// Sort direction for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// One entry of the sort state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub column_id: SharedString,
    pub direction: SortDirection,
}

impl SortEntry {
    pub fn new(column_id: impl Into<SharedString>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn asc(column_id: impl Into<SharedString>) -> Self {
        Self::new(column_id, SortDirection::Ascending)
    }

    pub fn desc(column_id: impl Into<SharedString>) -> Self {
        Self::new(column_id, SortDirection::Descending)
    }

    /// Whether this entry targets the given column
    pub fn is(&self, column_id: &str) -> bool {
        AsRef::<str>::as_ref(&self.column_id) == column_id
    }
}

/// Ordered sort descriptors, highest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    pub fn new(entries: Vec<SortEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current direction for a column, if it is sorted
    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|e| e.is(column_id))
            .map(|e| e.direction)
    }

    /// Header indicator for a sortable column
    pub fn indicator(&self, column_id: &str) -> &'static str {
        self.direction_of(column_id)
            .map(|d| d.indicator())
            .unwrap_or("↕")
    }

    /// State after a header click on `column_id`.
    ///
    /// The clicked column cycles unsorted -> ascending -> descending -> unsorted.
    /// Without `multi`, every other column is cleared.
    pub fn toggled(&self, column_id: &str, multi: bool) -> SortState {
        let next = match self.direction_of(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };

        let mut entries: Vec<SortEntry> = if multi {
            self.entries.clone()
        } else {
            self.entries
                .iter()
                .filter(|e| e.is(column_id))
                .cloned()
                .collect()
        };

        match next {
            Some(direction) => {
                if let Some(entry) = entries.iter_mut().find(|e| e.is(column_id)) {
                    entry.direction = direction;
                } else {
                    entries.push(SortEntry::new(column_id.to_string(), direction));
                }
            }
            None => entries.retain(|e| !e.is(column_id)),
        }

        SortState { entries }
    }
}

impl From<Vec<SortEntry>> for SortState {
    fn from(entries: Vec<SortEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let state = SortState::default();
        let asc = state.toggled("name", false);
        assert_eq!(asc.entries(), &[SortEntry::asc("name")]);

        let desc = asc.toggled("name", false);
        assert_eq!(desc.entries(), &[SortEntry::desc("name")]);

        let cleared = desc.toggled("name", false);
        assert!(cleared.is_empty());
    }

    #[test]
    fn toggle_other_column_clears_single_sort() {
        let state = SortState::new(vec![SortEntry::desc("name")]);
        let next = state.toggled("grade", false);
        assert_eq!(next.entries(), &[SortEntry::asc("grade")]);
    }

    #[test]
    fn toggle_other_column_keeps_multi_sort() {
        let state = SortState::new(vec![SortEntry::desc("name")]);
        let next = state.toggled("grade", true);
        assert_eq!(
            next.entries(),
            &[SortEntry::desc("name"), SortEntry::asc("grade")]
        );

        let next = next.toggled("name", true);
        assert_eq!(next.entries(), &[SortEntry::asc("grade")]);
    }

    #[test]
    fn indicator_reflects_direction() {
        let state = SortState::new(vec![SortEntry::asc("name")]);
        assert_eq!(state.indicator("name"), "↑");
        assert_eq!(state.indicator("grade"), "↕");
        assert_eq!(state.toggled("name", false).indicator("name"), "↓");
    }
}
