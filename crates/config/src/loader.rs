//! Configuration loader implementation

use crate::{materialize, transport};
use serde_yaml::Mapping;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use types::{ConfigError, DocumentSource, LoaderError, RawDocument, Result, TransportError};

/// Environment variable checked when no name is given
pub const DEFAULT_ENV_NAME: &str = "APP_CONFIG";

/// File used when no environment-specific file applies
pub const DEFAULT_FILE: &str = "default.yml";

/// Resolves a configuration document from an environment variable or from
/// YAML files in a directory.
///
/// If the environment variable is present it always wins. Otherwise
/// `<dir>/<environment>.yml` is used when it is a regular file, falling back to
/// `<dir>/default.yml`.
///
/// ```no_run
/// use config::ConfigLoader;
///
/// let loader = ConfigLoader::new("config");
/// let settings = loader.load(Some("production"))?.as_hash()?;
/// # Ok::<(), types::LoaderError>(())
/// ```
///
/// Views are only reachable through the value returned by `load`:
///
/// ```compile_fail
/// use config::ConfigLoader;
///
/// let loader = ConfigLoader::new("config");
/// let settings = loader.as_hash();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: Option<PathBuf>,
    env_name: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            dir: None,
            env_name: DEFAULT_ENV_NAME.to_string(),
        }
    }
}

impl ConfigLoader {
    /// Create a loader reading YAML files from `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Use a different environment variable name
    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = env_name.into();
        self
    }

    /// Directory containing the YAML files, if one was configured
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    /// Resolve the document against the process environment.
    ///
    /// Every call resolves from scratch.
    pub fn load(&self, environment: Option<&str>) -> Result<LoadedConfig> {
        self.load_from_env_lookup(environment, |name| std::env::var_os(name))
    }

    /// Resolve the document using `lookup` in place of the process environment
    pub fn load_from_env_lookup<F>(&self, environment: Option<&str>, lookup: F) -> Result<LoadedConfig>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        let raw = match lookup(&self.env_name) {
            Some(value) => self.decode_env_value(value)?,
            None => self.read_file(environment)?,
        };

        Ok(LoadedConfig {
            env_name: self.env_name.clone(),
            raw,
        })
    }

    /// Path of the file `load` would read for `environment` when the
    /// environment variable is absent
    pub fn resolve_file_path(&self, environment: Option<&str>) -> PathBuf {
        if let Some(environment) = environment {
            let specific = self.path_for(&format!("{}.yml", environment));
            if specific.is_file() {
                return specific;
            }
            tracing::debug!(
                environment = environment,
                path = %specific.display(),
                "No environment-specific configuration file, using default"
            );
        }

        self.path_for(DEFAULT_FILE)
    }

    /// `<dir>/<file_name>`, joined textually so an absolute or rooted label
    /// still resolves under `dir`
    fn path_for(&self, file_name: &str) -> PathBuf {
        match &self.dir {
            Some(dir) => {
                let mut path = dir.as_os_str().to_os_string();
                path.push("/");
                path.push(file_name);
                PathBuf::from(path)
            }
            None => PathBuf::from(file_name),
        }
    }

    fn decode_env_value(&self, value: OsString) -> Result<RawDocument> {
        tracing::info!(env_name = %self.env_name, "Loading configuration from environment variable");

        let source = DocumentSource::EnvVar {
            name: self.env_name.clone(),
        };
        let encoded = value
            .into_string()
            .map_err(|_| LoaderError::transport(source.to_string(), TransportError::NotUnicode))?;
        let text = transport::decode(&encoded)
            .map_err(|e| LoaderError::transport(source.to_string(), e))?;

        Ok(RawDocument::new(text, source))
    }

    fn read_file(&self, environment: Option<&str>) -> Result<RawDocument> {
        let path = self.resolve_file_path(environment);
        tracing::info!(path = %path.display(), "Loading configuration file");

        let text = std::fs::read_to_string(&path).map_err(|source| {
            let display = path.display().to_string();
            match source.kind() {
                ErrorKind::NotFound => ConfigError::FileNotFound { path: display },
                ErrorKind::InvalidData => ConfigError::InvalidEncoding { path: display },
                _ => ConfigError::Io {
                    path: display,
                    source,
                },
            }
        })?;

        Ok(RawDocument::new(text, DocumentSource::File { path }))
    }
}

/// A resolved document together with the variable name it travels under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    env_name: String,
    raw: RawDocument,
}

impl LoadedConfig {
    /// Wrap an already resolved document
    pub fn new(env_name: impl Into<String>, raw: RawDocument) -> Self {
        Self {
            env_name: env_name.into(),
            raw,
        }
    }

    pub fn raw(&self) -> &RawDocument {
        &self.raw
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn into_raw(self) -> RawDocument {
        self.raw
    }

    /// Parse the document into a YAML mapping
    pub fn as_hash(&self) -> Result<Mapping> {
        materialize::as_hash(&self.raw)
    }

    /// Serialized document for passing as an environment variable
    pub fn as_env_value(&self) -> Result<String> {
        materialize::as_env_value(&self.raw)
    }

    /// `as_env_value` assigned to the loader's variable name
    pub fn as_env_assignment(&self) -> Result<String> {
        materialize::as_env_assignment(&self.env_name, &self.raw)
    }
}
