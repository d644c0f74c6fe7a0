//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a submission report
///
/// This is a domain concept representing how the outcome should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Live terminal rendering with spinner and animation (default)
    #[default]
    Full,
    /// Machine-readable JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(format, OutputFormat::Full);
    }
}
