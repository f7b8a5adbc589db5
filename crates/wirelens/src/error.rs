//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use wirelens_config::ConfigError;
use wirelens_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const SOURCE: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Discovery source ─────────────────────────────────────────────
    #[error("No discovery snapshot configured")]
    #[diagnostic(
        code(wirelens::no_snapshot),
        help(
            "Pass --snapshot <path>, set WIRELENS_SNAPSHOT, or record a path with:\n\
             wirelens config init --snapshot <path>\n\
             Config file: {config_path}"
        )
    )]
    NoSnapshot { config_path: String },

    #[error("Cannot read discovery snapshot {origin}")]
    #[diagnostic(
        code(wirelens::source_unavailable),
        help("Check that the discovery backend has written the snapshot and that it is readable.")
    )]
    SourceUnavailable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Discovery snapshot {origin} is malformed")]
    #[diagnostic(code(wirelens::invalid_snapshot))]
    InvalidSnapshot {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Discovery failed: {message}")]
    #[diagnostic(code(wirelens::discovery))]
    Discovery { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(wirelens::not_found),
        help("Run: wirelens {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wirelens::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(wirelens::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(wirelens::config))]
    Config(ConfigError),

    // ── IO / runtime ─────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(wirelens::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceUnavailable { .. } | Self::Discovery { .. } => exit_code::SOURCE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NoSnapshot { .. } | Self::Validation { .. } | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SourceUnavailable { origin, source } => {
                CliError::SourceUnavailable { origin, source }
            }
            CoreError::Decode { origin, source } => CliError::InvalidSnapshot { origin, source },
            CoreError::Fetch { message } => CliError::Discovery { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}
