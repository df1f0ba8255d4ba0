use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{RootError, RootResult};

/// File name searched in the working directory when `--config` is absent.
pub const DEFAULT_CONF_FILE: &str = "conf.json";

/// Configuration for a single send, loaded from `conf.json`.
///
/// `webhook` and `secret` come from the group bot's settings; `cardid`
/// and `version` identify the card template to render. All four are
/// required and validation only checks presence: values are stored
/// exactly as the file provides them.
#[derive(Clone, Deserialize)]
pub struct Conf {
    #[serde(default)]
    pub webhook: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub cardid: String,
    #[serde(default)]
    pub version: String,
}

impl Conf {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> RootResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let conf: Conf = serde_json::from_str(&contents)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Fail with [`RootError::MissingField`] naming the first required
    /// field that is absent or empty after trimming.
    pub fn validate(&self) -> RootResult<()> {
        for (field, value) in [
            ("webhook", &self.webhook),
            ("secret", &self.secret),
            ("cardid", &self.cardid),
            ("version", &self.version),
        ] {
            if value.trim().is_empty() {
                return Err(RootError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Return the default config file location (working directory).
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONF_FILE)
    }
}

impl fmt::Debug for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conf")
            .field("webhook", &self.webhook)
            .field("secret", &"[REDACTED]")
            .field("cardid", &self.cardid)
            .field("version", &self.version)
            .finish()
    }
}
