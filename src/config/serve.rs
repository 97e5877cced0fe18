//! Serve command configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use super::settings::ServerSettings;
use crate::error::PipelineDagError;

/// Configuration for the serve command
///
/// Settings are layered: defaults, then the optional TOML file, then any
/// value given on the command line or through the environment.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Resolved server settings
    pub settings: ServerSettings,
    /// File the settings were loaded from, if any
    pub settings_file: Option<PathBuf>,
}

impl ServeConfig {
    pub fn builder() -> ServeConfigBuilder {
        ServeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ServeConfigBuilder {
    settings_file: Option<PathBuf>,
    bind: Option<SocketAddr>,
    allow_origins: Option<Vec<String>>,
    allow_credentials: Option<bool>,
    max_body_bytes: Option<usize>,
}

impl ServeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings_file(mut self, settings_file: Option<PathBuf>) -> Self {
        self.settings_file = settings_file;
        self
    }

    pub fn with_bind(mut self, bind: Option<SocketAddr>) -> Self {
        self.bind = bind;
        self
    }

    /// An empty list leaves the file or default origins in place
    pub fn with_allow_origins(mut self, allow_origins: Vec<String>) -> Self {
        self.allow_origins = if allow_origins.is_empty() {
            None
        } else {
            Some(allow_origins)
        };
        self
    }

    pub fn with_allow_credentials(mut self, allow_credentials: Option<bool>) -> Self {
        self.allow_credentials = allow_credentials;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: Option<usize>) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

impl crate::common::ConfigBuilder for ServeConfigBuilder {
    type Config = ServeConfig;

    fn build(self) -> Result<Self::Config, PipelineDagError> {
        let mut settings = match &self.settings_file {
            Some(path) => ServerSettings::from_file(path)?,
            None => ServerSettings::default(),
        };

        if let Some(bind) = self.bind {
            settings.bind = bind;
        }
        if let Some(allow_origins) = self.allow_origins {
            settings.cors.allow_origins = allow_origins;
        }
        if let Some(allow_credentials) = self.allow_credentials {
            settings.cors.allow_credentials = allow_credentials;
        }
        if let Some(max_body_bytes) = self.max_body_bytes {
            settings.max_body_bytes = max_body_bytes;
        }

        settings.validate()?;

        Ok(ServeConfig {
            settings,
            settings_file: self.settings_file,
        })
    }
}
