//! Navigation - Active Page
//!
//! Defines the pages available in the application.

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// Student roster
    #[default]
    Students,
    /// Uploaded training materials
    Materials,
}

impl ActivePage {
    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Students => "nav.students",
            ActivePage::Materials => "nav.materials",
        }
    }

    /// Get all available pages for sidebar
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Students, ActivePage::Materials]
    }
}

/// Which page the workspace shows
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub active_page: ActivePage,
}

impl NavigationState {
    /// Returns true when the page changed
    pub fn set_active_page(&mut self, page: ActivePage) -> bool {
        if self.active_page == page {
            return false;
        }
        self.active_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_pages_reports_changes() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.active_page, ActivePage::Students);
        assert!(!nav.set_active_page(ActivePage::Students));
        assert!(nav.set_active_page(ActivePage::Materials));
        assert_eq!(ActivePage::all().len(), 2);
    }
}
