//! Check command configuration

use crate::cli::OutputFormat;
use crate::common::InputSource;

/// Configuration for the check command
///
/// This struct contains all options for evaluating pipeline files and
/// reporting which of them contain cycles.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Files, directories, glob patterns or stdin to read pipelines from
    pub inputs: Vec<InputSource>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any pipeline has a cycle
    pub error_on_cycles: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    inputs: Option<Vec<InputSource>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            inputs: None,
            format: None,
            error_on_cycles: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<InputSource>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::PipelineDagError> {
        Ok(CheckConfig {
            inputs: self.inputs.ok_or_else(|| {
                crate::error::PipelineDagError::ConfigurationError {
                    message: "Missing required field: inputs".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::PipelineDagError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.unwrap_or(false),
        })
    }
}
