//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, InputSource};
use crate::config::CheckConfig;
use crate::error::PipelineDagError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, PipelineDagError> {
        match command {
            Commands::Check {
                paths,
                format,
                error_on_cycles,
            } => CheckConfig::builder()
                .with_inputs(InputSource::from_args(&paths))
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(PipelineDagError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for evaluating pipeline files
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
