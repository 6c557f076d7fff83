//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global, Window};

use crate::app::navigation::NavigationState;
use crate::domain::Student;
use crate::state::{CollectionState, MaterialsState, ViewSettings};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted view preferences
    pub settings: Entity<ViewSettings>,
    /// Active page
    pub navigation: Entity<NavigationState>,
    /// Student roster (client-side search, sort and paging)
    pub students: Entity<CollectionState<Student>>,
    /// Training materials (server-style paging)
    pub materials: Entity<MaterialsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded settings
    pub fn init(settings: ViewSettings, cx: &mut App) -> Self {
        let page_size = settings.page_size();
        Self {
            settings: cx.new(|_| settings),
            navigation: cx.new(|_| NavigationState::default()),
            students: cx.new(|_| CollectionState::new(page_size)),
            materials: cx.new(|_| MaterialsState::new(page_size)),
        }
    }
}

/// Update the settings entity and persist them in the background
pub fn update_settings_and_save(
    entities: &AppEntities,
    action_name: &'static str,
    mutation: impl FnOnce(&mut ViewSettings),
    cx: &mut App,
) {
    let settings = entities.settings.update(cx, |settings, cx| {
        mutation(settings);
        cx.notify();
        settings.clone()
    });

    cx.background_executor()
        .spawn(async move {
            if let Err(e) = settings.save() {
                tracing::error!(error = %e, action = action_name, "Failed to save settings");
            } else {
                tracing::info!(action = action_name, "Settings saved");
            }
        })
        .detach();
}

/// Switch the UI language, remember it and redraw every view
pub fn switch_locale(
    entities: &AppEntities,
    locale: &'static str,
    window: &mut Window,
    cx: &mut App,
) {
    rust_i18n::set_locale(locale);
    update_settings_and_save(
        entities,
        "switch_locale",
        |settings| settings.set_locale(locale),
        cx,
    );
    window.refresh();
}
