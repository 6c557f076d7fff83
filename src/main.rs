//! Campus GUI - Main Entry Point

use anyhow::Context as _;
use campus_gui::app::application::run_app;
use campus_gui::helpers::get_or_create_data_dir;
use campus_gui::state::ViewSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install stdout logging plus a daily log file when the data dir is usable
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = fmt::layer().with_target(false);

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "campus-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(stdout).init();
            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _log_guard = init_tracing();

    tracing::info!("Starting Campus GUI...");

    let settings = ViewSettings::try_load().context("Failed to load view settings")?;
    rust_i18n::set_locale(settings.locale());

    run_app(settings);
    Ok(())
}
