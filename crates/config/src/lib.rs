//! Configuration loading for envyaml
//!
//! Resolves a single YAML document from an environment variable carrying a
//! compressed, base64-encoded blob, or from `<environment>.yml` /
//! `default.yml` in a directory, and turns it back into that transport form.

pub mod loader;
pub mod materialize;
pub mod transport;

pub use loader::{ConfigLoader, LoadedConfig, DEFAULT_ENV_NAME, DEFAULT_FILE};
pub use materialize::{as_env_assignment, as_env_value, as_hash};
