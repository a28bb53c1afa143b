//! Error types for the envyaml loader

use thiserror::Error;

/// Main error type for configuration loading
#[derive(Error, Debug)]
pub enum LoaderError {
    /// A transport string could not be encoded or decoded
    #[error("Transport error in {origin}: {source}")]
    Transport {
        origin: String,
        #[source]
        source: TransportError,
    },

    /// Configuration file or document errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors raised while encoding or decoding a transport string
#[derive(Error, Debug)]
pub enum TransportError {
    /// Environment variable value is not valid Unicode
    #[error("value is not valid unicode")]
    NotUnicode,

    /// Strict base64 decoding failed
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Compressed payload is corrupt or truncated
    #[error("zlib inflate failed: {0}")]
    Inflate(String),

    /// Compressing the document failed
    #[error("zlib deflate failed: {0}")]
    Deflate(#[from] std::io::Error),

    /// Inflated bytes are not a UTF-8 document
    #[error("inflated document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Configuration file and document errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required fallback file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Reading a configuration file failed
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not UTF-8 text
    #[error("Configuration file {path} is not valid UTF-8")]
    InvalidEncoding { path: String },

    /// YAML syntax error
    #[error("Configuration parse error in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document parsed but its top level is not a mapping
    #[error("Configuration in {origin} is not a mapping (found {found})")]
    NotAMapping { origin: String, found: String },
}

impl LoaderError {
    /// Wrap a transport failure with the place the payload belongs to
    pub fn transport(origin: impl Into<String>, source: TransportError) -> Self {
        LoaderError::Transport {
            origin: origin.into(),
            source,
        }
    }

    /// True for corrupt payloads and malformed documents
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            LoaderError::Transport { .. }
                | LoaderError::Config(ConfigError::InvalidEncoding { .. })
                | LoaderError::Config(ConfigError::Parse { .. })
                | LoaderError::Config(ConfigError::NotAMapping { .. })
        )
    }

    /// True when a configuration file was missing or unreadable
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            LoaderError::Config(ConfigError::FileNotFound { .. })
                | LoaderError::Config(ConfigError::Io { .. })
        )
    }
}
