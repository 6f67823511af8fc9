//! Application configuration file handling.
//!
//! The managed service reads a line-oriented KEY=VALUE env file. Gangway
//! parses it for the prober's key checks ([`env_file`]) and seeds it when
//! absent ([`materialize`]). It never edits a file that already exists —
//! presence is the sole guard protecting operator-edited secrets.

pub mod env_file;
pub mod materialize;

pub use env_file::EnvFile;
pub use materialize::{materialize, MaterializeOutcome};

/// Keys the prober requires in the service configuration.
///
/// Matches the settings surface of the review-assistant application.
pub const REQUIRED_KEYS: &[&str] = &[
    "OZON_CLIENT_ID",
    "OZON_API_KEY",
    "AI_PROVIDER",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "YANDEX_API_KEY",
    "YANDEX_FOLDER_ID",
    "YANDEX_MODEL",
    "DATABASE_URL",
    "RESPONSE_TONE",
    "RESPONSE_SIGNATURE",
    "HOST",
    "PORT",
    "DEBUG",
    "POLLING_INTERVAL_MINUTES",
];
