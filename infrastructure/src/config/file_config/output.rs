//! `[output]` section: how a finished submission is shown

use estimator_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format used when the command line does not pick one
    pub format: Option<OutputFormat>,
    /// ANSI colors in terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format for this run: the requested one, else the configured one,
    /// else [`OutputFormat::Full`].
    pub fn effective_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}
