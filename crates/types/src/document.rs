//! Raw configuration document and its provenance

use std::fmt;
use std::path::PathBuf;

/// Where a raw document was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Decoded from a transport string held in an environment variable
    EnvVar { name: String },
    /// Read from a YAML file on disk
    File { path: PathBuf },
    /// Supplied directly by the caller
    Inline,
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::EnvVar { name } => write!(f, "${}", name),
            DocumentSource::File { path } => write!(f, "{}", path.display()),
            DocumentSource::Inline => write!(f, "<inline>"),
        }
    }
}

/// YAML text exactly as it was resolved, before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
    source: DocumentSource,
}

impl RawDocument {
    /// Create a new raw document
    pub fn new(text: impl Into<String>, source: DocumentSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// Document that did not come from the environment or a file
    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(text, DocumentSource::Inline)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for RawDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
