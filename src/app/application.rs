//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use rust_i18n::t;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::state::ViewSettings;

actions!(campus, [Quit]);

/// Run the campus GUI application
pub fn run_app(settings: ViewSettings) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t!("app.title").to_string())),
                ..Default::default()
            }),
            ..Default::default()
        };

        match cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
