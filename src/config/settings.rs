//! Server settings file
//!
//! ```toml
//! bind = "0.0.0.0:8000"
//! max_body_bytes = 1048576
//!
//! [cors]
//! allow_origins = ["http://localhost:3000"]
//! allow_credentials = true
//! ```

use std::net::SocketAddr;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::server::{ANY_ORIGIN, DEFAULT_BIND, DEFAULT_MAX_BODY_BYTES};
use crate::error::{PipelineDagError, TomlParseError};

/// Everything the HTTP server needs at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    pub max_body_bytes: usize,
    pub cors: CorsSettings,
}

/// Cross-origin policy handed to the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsSettings {
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors: CorsSettings::default(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origins: vec![ANY_ORIGIN.to_string()],
            allow_credentials: true,
        }
    }
}

impl CorsSettings {
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|origin| origin == ANY_ORIGIN)
    }
}

impl ServerSettings {
    pub fn from_file(path: &Path) -> Result<Self, PipelineDagError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PipelineDagError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::from_toml_str(&path.display().to_string(), &content)
    }

    pub fn from_toml_str(name: &str, content: &str) -> Result<Self, PipelineDagError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            PipelineDagError::TomlParseError(Box::new(TomlParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Reject settings the server could not honour
    pub fn validate(&self) -> Result<(), PipelineDagError> {
        if self.max_body_bytes == 0 {
            return Err(PipelineDagError::ConfigurationError {
                message: "max_body_bytes must be greater than zero".to_string(),
            });
        }

        if self.cors.allow_origins.is_empty() {
            return Err(PipelineDagError::ConfigurationError {
                message: format!(
                    "cors.allow_origins must not be empty (use \"{ANY_ORIGIN}\" to allow any \
                     origin)"
                ),
            });
        }

        if self.cors.allows_any_origin() && self.cors.allow_origins.len() > 1 {
            return Err(PipelineDagError::ConfigurationError {
                message: format!(
                    "\"{ANY_ORIGIN}\" cannot be combined with explicit origins in \
                     cors.allow_origins"
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::default();

        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert!(settings.cors.allows_any_origin());
        assert!(settings.cors.allow_credentials);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = ServerSettings::from_toml_str(
            "serve.toml",
            r#"
            bind = "0.0.0.0:9000"

            [cors]
            allow_origins = ["http://localhost:3000"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(settings.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(settings.cors.allow_origins, vec!["http://localhost:3000"]);
        assert!(settings.cors.allow_credentials);
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = ServerSettings::from_toml_str("serve.toml", "bind = ").unwrap_err();

        match err {
            PipelineDagError::TomlParseError(inner) => {
                assert_eq!(inner.file, "serve.toml");
                assert!(inner.span.is_some());
            }
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ServerSettings::from_toml_str("serve.toml", "port = 8000").unwrap_err();
        assert!(matches!(err, PipelineDagError::TomlParseError(_)));
    }

    #[test]
    fn test_validate_rejects_mixed_origins() {
        let mut settings = ServerSettings::default();
        settings.cors.allow_origins = vec!["*".to_string(), "http://localhost:3000".to_string()];

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_body_limit() {
        let settings = ServerSettings {
            max_body_bytes: 0,
            ..ServerSettings::default()
        };

        assert!(settings.validate().is_err());
    }
}
