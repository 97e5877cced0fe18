//! # Configuration Module
//!
//! This module provides configuration structures for all pipeline-dag
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command that evaluates
//!   pipeline files
//! - **ServeConfig**: Configuration for the `serve` command, layering CLI
//!   overrides on top of a [`ServerSettings`] TOML file
//!
//! ## Example
//!
//! ```
//! use pipeline_dag::cli::OutputFormat;
//! use pipeline_dag::common::{ConfigBuilder, InputSource};
//! use pipeline_dag::config::{CheckConfig, ServeConfig};
//!
//! let check = CheckConfig::builder()
//!     .with_inputs(vec![InputSource::Pattern("pipelines/".into())])
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//! assert!(check.error_on_cycles);
//!
//! let serve = ServeConfig::builder()
//!     .with_bind(Some("0.0.0.0:8000".parse().unwrap()))
//!     .build()
//!     .unwrap();
//! assert!(serve.settings.cors.allows_any_origin());
//! ```

pub mod check;
pub mod serve;
pub mod settings;

pub use check::CheckConfig;
pub use serve::ServeConfig;
pub use settings::{CorsSettings, ServerSettings};
