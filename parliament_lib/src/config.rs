//! Runtime settings: defaults, then an optional TOML file, then environment
//! variables. The CLI applies its own flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use parliament_api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;

use crate::error::ParliamentError;

pub const ENV_CONFIG: &str = "PARLIAMENT_CONFIG";
pub const ENV_API_URL: &str = "PARLIAMENT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "PARLIAMENT_TIMEOUT_SECS";
pub const ENV_SESSION_FILE: &str = "PARLIAMENT_SESSION_FILE";

const DEFAULT_CONFIG_FILE: &str = "parliament.toml";

/// Keys accepted in `parliament.toml`. All optional.
#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    session_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Backend API base.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Where the chat session id is persisted.
    pub session_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_file: default_session_file(),
        }
    }
}

impl Settings {
    /// Loads settings from `$PARLIAMENT_CONFIG` (or `./parliament.toml` if it
    /// exists) and the process environment.
    pub fn load() -> Result<Self, ParliamentError> {
        let explicit = std::env::var(ENV_CONFIG).ok().map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let file = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Loaded settings from {}", path.display());
                Some(contents)
            }
            Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(ParliamentError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds settings from TOML text and an environment lookup. Environment
    /// values win over the file.
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> Result<Self, ParliamentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(text) = toml_text {
            let file: FileSettings = toml::from_str(text)?;
            if let Some(api_url) = file.api_url {
                settings.api_url = api_url;
            }
            if let Some(secs) = file.timeout_secs {
                settings.timeout = timeout_from_secs(secs)?;
            }
            if let Some(path) = file.session_file {
                settings.session_file = path;
            }
        }

        if let Some(api_url) = env(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            settings.api_url = api_url.trim().to_string();
        }
        if let Some(raw) = env(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ParliamentError::Config(format!("{} must be a number, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            settings.timeout = timeout_from_secs(secs)?;
        }
        if let Some(path) = env(ENV_SESSION_FILE).filter(|v| !v.trim().is_empty()) {
            settings.session_file = PathBuf::from(path);
        }

        Ok(settings)
    }

    /// Overrides the API base, e.g. from a command-line flag.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim().to_string();
        self
    }

    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: self.timeout,
        }
    }
}

fn timeout_from_secs(secs: u64) -> Result<Duration, ParliamentError> {
    if secs == 0 {
        return Err(ParliamentError::Config(
            "timeout must be at least one second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parliament-watch")
        .join("chat_session.json")
}
