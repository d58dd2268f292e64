//! harmony_picker - Command-line host for the harmony wheel picker
//!
//! Loads user preferences, restores the previous session, feeds simulated
//! pointer input into a [`harmony_wheel::ColorPicker`] and prints the
//! resulting palette.

pub mod app;
pub mod cli;
pub mod config;
pub mod session;
pub mod swatch;

pub use app::run;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, LogLevel, UserPreferences};
pub use session::SessionError;
