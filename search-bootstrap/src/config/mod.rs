//! Settings loading for the search bootstrap.

mod settings;

pub use settings::{Settings, SettingsError};
