//! Error types for vite-config

use std::path::PathBuf;

/// Result type for vite-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort configuration resolution
///
/// A missing config file is not an error; it is reported as a
/// [`Diagnostic`](crate::Diagnostic) and resolution continues with defaults.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file exists but is not a valid JSON object
    #[error("Malformed config file at {path}: {message}")]
    MalformedConfigFile { path: PathBuf, message: String },

    /// A value could not be coerced into the option's type
    #[error("Invalid value for `{option}`: {value} (expected {expected})")]
    InvalidOptionValue {
        option: String,
        value: String,
        expected: &'static str,
    },

    /// The installed vite-plugin-ruby does not satisfy the supported range
    #[error(
        "vite-plugin-ruby@{requirement} is not compatible with the supported range {supported}. \
         Update the package or set `skipCompatibilityCheck` to bypass this check"
    )]
    IncompatiblePluginVersion {
        requirement: String,
        supported: String,
    },

    /// Filesystem error from vite-fs
    #[error(transparent)]
    Fs(#[from] vite_fs::Error),
}

impl Error {
    pub(crate) fn invalid(
        option: impl Into<String>,
        value: &serde_json::Value,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOptionValue {
            option: option.into(),
            value: value.to_string(),
            expected,
        }
    }
}
