//! Customer Desk - desktop customer record entry.
//!
//! A single-window application for entering customer contact records into a
//! local SQLite store. Built with Iced 0.14.0 using the Elm architecture
//! (State, Message, Update, View).

// Module declarations
mod app;
mod component;
mod message;
mod state;
mod theme;
mod view;

use std::path::PathBuf;

use iced::Size;
use iced::window;

use app::App;

/// Application entry point.
///
/// Initializes logging, ensures the customers table exists, and only then
/// opens the entry form. A store that cannot be initialized is fatal: the
/// window is never shown against an uninitialized store.
pub fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Customer Desk");

    let db_path = database_path();
    if let Err(err) = cdesk_store::initialize(&db_path) {
        tracing::error!("database initialization failed: {err}");
        return Err(err.into());
    }

    // Run the Iced application using the builder pattern
    iced::application(move || App::new(db_path.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(480.0, 560.0),
            min_size: Some(Size::new(440.0, 520.0)),
            ..Default::default()
        })
        .run()?;

    Ok(())
}

/// Store location: the platform data directory, falling back to the working
/// directory when no home directory is available.
fn database_path() -> PathBuf {
    directories::ProjectDirs::from("com", "CustomerDesk", "Customer Desk")
        .map(|dirs| dirs.data_dir().join("customers.db"))
        .unwrap_or_else(|| PathBuf::from("customers.db"))
}
