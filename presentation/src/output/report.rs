//! Console output for submission reports

use colored::Colorize;
use estimator_application::SubmissionReport;
use estimator_domain::{EstimateOutcome, EstimateRequest};

/// Formats submission reports for console display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Summary of a finished submission, used when the live view is off
    pub fn format(report: &SubmissionReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== House Price Estimate ===".cyan().bold()));
        output.push_str(&Self::format_request(&report.request));
        output.push('\n');

        let line = match &report.outcome {
            Some(EstimateOutcome::Estimate { text }) => {
                format!("{} {}", "Estimated price:".green().bold(), text.bold())
            }
            Some(rejected @ EstimateOutcome::Rejected { .. }) => {
                rejected.display_text().red().to_string()
            }
            None => report.display_text.red().to_string(),
        };
        output.push_str(&line);
        output.push('\n');

        if let Some(error) = &report.transport_error {
            output.push_str(&format!("{} {}\n", "Cause:".dimmed(), error.dimmed()));
        }
        output.push_str(&format!(
            "{}\n",
            format!("({} ms)", report.elapsed_ms).dimmed()
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(report: &SubmissionReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Echo of the posted form, one field per line
    pub fn format_request(request: &EstimateRequest) -> String {
        let value = |field: &Option<String>| field.clone().unwrap_or_else(|| "-".to_string());
        let flag = |set: bool| if set { "yes" } else { "no" };

        let rows = [
            ("Bedrooms", value(&request.bedrooms)),
            ("Bathrooms", value(&request.bathrooms)),
            ("Square feet", value(&request.sqft)),
            ("Floors", value(&request.floors)),
            ("Age", value(&request.age)),
            ("Waterfront", flag(request.waterfront).to_string()),
            ("Garage", flag(request.garage).to_string()),
            ("Garden", flag(request.garden).to_string()),
            ("Location", value(&request.location)),
            ("Currency", value(&request.currency)),
        ];

        rows.iter()
            .map(|(label, value)| format!("  {:<12} {}\n", format!("{}:", label).dimmed(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use estimator_domain::SubmissionPhase;

    fn report(outcome: Option<EstimateOutcome>, display_text: &str) -> SubmissionReport {
        SubmissionReport {
            request: EstimateRequest {
                bedrooms: Some("3".to_string()),
                sqft: Some("1500".to_string()),
                garage: true,
                location: Some("Suburb".to_string()),
                currency: Some("USD".to_string()),
                ..Default::default()
            },
            phase: SubmissionPhase::Succeeded,
            outcome,
            transport_error: None,
            display_text: display_text.to_string(),
            submitted_at: Utc::now(),
            elapsed_ms: 812,
        }
    }

    #[test]
    fn test_format_estimate() {
        let output = ReportFormatter::format(&report(
            Some(EstimateOutcome::Estimate {
                text: "$350,000".to_string(),
            }),
            "$350,000",
        ));
        assert!(output.contains("$350,000"));
        assert!(output.contains("1500"));
        assert!(output.contains("812 ms"));
    }

    #[test]
    fn test_format_rejection() {
        let output = ReportFormatter::format(&report(
            Some(EstimateOutcome::Rejected {
                message: "Invalid input".to_string(),
            }),
            "Error: Invalid input",
        ));
        assert!(output.contains("Error: Invalid input"));
    }

    #[test]
    fn test_format_transport_failure() {
        let mut failed = report(None, "An error occurred.");
        failed.phase = SubmissionPhase::Failed;
        failed.transport_error = Some("connection refused".to_string());

        let output = ReportFormatter::format(&failed);
        assert!(output.contains("An error occurred."));
        assert!(output.contains("connection refused"));
    }

    #[test]
    fn test_format_json_is_parseable() {
        let json = ReportFormatter::format_json(&report(
            Some(EstimateOutcome::Estimate {
                text: "$1".to_string(),
            }),
            "$1",
        ));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "succeeded");
        assert_eq!(value["request"]["garage"], true);
        assert_eq!(value["request"]["bathrooms"], serde_json::Value::Null);
    }

    #[test]
    fn test_request_echo_marks_missing_fields() {
        let echo = ReportFormatter::format_request(&EstimateRequest::default());
        assert!(echo.contains("-"));
        assert!(echo.contains("no"));
    }
}
