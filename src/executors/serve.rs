//! Serve command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::ServeConfig;
use crate::constants::server::PARSE_ROUTE;
use crate::executors::CommandExecutor;
use crate::server;

pub struct ServeExecutor;

impl CommandExecutor for ServeExecutor {
    type Config = ServeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Serving pipeline checks on http://{}{}",
            style("🚦").cyan(),
            style(config.settings.bind).bold(),
            PARSE_ROUTE
        );
        if let Some(path) = &config.settings_file {
            eprintln!(
                "  {} Settings loaded from {}",
                style("→").dim(),
                style(path.display()).dim()
            );
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .into_diagnostic()
            .wrap_err("Failed to start the async runtime")?;

        runtime
            .block_on(server::serve(config.settings))
            .wrap_err("Pipeline server failed")
    }
}
