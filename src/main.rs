mod app;
mod config;
mod error;
mod model;
mod persistence;
mod ui;

use crate::app::RosterStore;
use crate::config::TrackerConfig;
use crate::persistence::ProgressFile;

use gtk4::glib::ExitCode;
use gtk4::prelude::*;
use gtk4::Application;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = TrackerConfig::from_env();
    tracing::info!(
        path = %config.progress_path.display(),
        characters = config.catalog.len(),
        "starting nectar tracker"
    );
    let progress = Rc::new(ProgressFile::new(config.progress_path.clone()));

    let roster = match progress.load(&config.catalog) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("failed to load {}: {}", progress.path().display(), e);
            return ExitCode::FAILURE;
        }
    };
    let store = RosterStore::shared(roster);

    let app = Application::builder()
        .application_id("com.nectartracker.app")
        .build();

    let store_activate = store.clone();
    let progress_activate = progress.clone();
    app.connect_activate(move |app| {
        ui::build_ui(app, store_activate.clone(), progress_activate.clone());
    });

    // Closing the window saves without asking
    app.connect_shutdown(move |_| {
        if let Err(e) = progress.save(store.borrow().roster()) {
            tracing::error!("failed to save progress on exit: {}", e);
        }
    });

    app.run()
}
