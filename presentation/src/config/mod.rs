//! Presentation-level configuration
//!
//! Output settings resolved from the config file and command line flags.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format from the config file, if any
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Command line wins over the config file, which wins over text
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.format).unwrap_or_default()
    }

    /// Colors are off when disabled by flag or config, and always for JSON
    pub fn use_color(&self, no_color_flag: bool, format: OutputFormat) -> bool {
        self.color && !no_color_flag && format == OutputFormat::Text
    }
}
