//! Error types for theme loading and resolution

use thiserror::Error;

/// Fatal value parse failures.
///
/// Only keys whose naming convention demands a numeric shape can fail;
/// colors and plain integers fall through to the next category instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid insets `{value}` for `{key}` (expected top,left,bottom,right)")]
    Insets { key: String, value: String },

    #[error("invalid size `{value}` for `{key}` (expected width,height)")]
    Dimension { key: String, value: String },

    #[error("invalid integer `{value}` for `{key}`")]
    Integer { key: String, value: String },
}

impl ParseError {
    /// Property key the failure belongs to
    pub fn key(&self) -> &str {
        match self {
            ParseError::Insets { key, .. }
            | ParseError::Dimension { key, .. }
            | ParseError::Integer { key, .. } => key,
        }
    }
}

/// Syntax errors in `.properties` text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError {
    #[error("properties syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no factory registered for `{0}`")]
    Unknown(String),

    #[error("factory for `{id}` failed: {msg}")]
    Construction { id: String, msg: String },
}

/// Theme build failures. The previously published theme stays active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown theme variant `{0}`")]
    UnknownVariant(String),

    #[error(transparent)]
    Platform(#[from] zizi_platform::PlatformError),
}
