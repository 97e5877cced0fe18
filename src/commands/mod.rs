//! Command implementations for the pipeline-dag CLI
//!
//! - serve: Answer pipeline checks over HTTP
//! - check: Evaluate pipeline files from the command line

pub mod check;
pub mod serve;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Serve { .. } => serve::execute_serve_command(command),
        Commands::Check { .. } => check::execute_check_command(command),
    }
}
