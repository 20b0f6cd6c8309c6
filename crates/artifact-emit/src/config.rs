use crate::output::{OutputFormat, OutputStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub use_colors: bool,
    pub style: OutputStyle,
    pub format: OutputFormat,
    pub verbosity: VerbosityLevel,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            style: OutputStyle::Pretty,
            format: OutputFormat::Text,
            verbosity: VerbosityLevel::Normal,
        }
    }
}

impl EmitterConfig {
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerbosityLevel {
    Quiet,
    Normal,
    Verbose,
}

impl VerbosityLevel {
    pub fn should_print_parameters(&self) -> bool {
        !matches!(self, VerbosityLevel::Quiet)
    }

    pub fn should_print_sizes(&self) -> bool {
        matches!(self, VerbosityLevel::Verbose)
    }

    pub fn should_print_debug(&self) -> bool {
        matches!(self, VerbosityLevel::Verbose)
    }
}
