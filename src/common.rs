//! Common functionality shared across commands

use clap::Args;

use crate::cli::{LogFormat, LogLevel, OutputFormat};

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "PIPELINE_DAG_FORMAT"
    )]
    pub format: OutputFormat,
}

/// Logging arguments accepted by every command
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Log verbosity (RUST_LOG takes precedence when set)
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "info",
        env = "PIPELINE_DAG_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Log line format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "text",
        env = "PIPELINE_DAG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

/// Where a pipeline document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Pattern(String),
}

impl InputSource {
    /// Map raw `check` arguments to input sources, reading stdin when none
    /// are given
    pub fn from_args(args: &[String]) -> Vec<InputSource> {
        if args.is_empty() {
            return vec![InputSource::Stdin];
        }

        args.iter()
            .map(|arg| {
                if arg == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::Pattern(arg.clone())
                }
            })
            .collect()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::PipelineDagError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::PipelineDagError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::PipelineDagError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
