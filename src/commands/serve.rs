//! Serve command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ServeConfig;
use crate::error::PipelineDagError;

impl FromCommand for ServeConfig {
    fn from_command(command: Commands) -> Result<Self, PipelineDagError> {
        match command {
            Commands::Serve {
                bind,
                config,
                allow_origins,
                allow_credentials,
                max_body_bytes,
            } => ServeConfig::builder()
                .with_settings_file(config)
                .with_bind(bind)
                .with_allow_origins(allow_origins)
                .with_allow_credentials(allow_credentials)
                .with_max_body_bytes(max_body_bytes)
                .build(),
            _ => Err(PipelineDagError::ConfigurationError {
                message: "Invalid command type for ServeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ServeConfig);

/// Execute the serve command and block until the server shuts down
pub fn execute_serve_command(command: Commands) -> Result<()> {
    let config = ServeConfig::from_command(command)
        .wrap_err("Failed to parse serve command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::serve::ServeExecutor;
    ServeExecutor::execute(config)
}
