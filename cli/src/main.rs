//! CLI entrypoint for house-estimator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use estimator_application::{HeadlessView, SubmissionReport, SubmitEstimateUseCase};
use estimator_domain::OutputFormat;
use estimator_infrastructure::{ConfigLoader, FileConfig, FileOutputConfig, HttpEstimateGateway};
use estimator_presentation::{Cli, EstimateRepl, ReportFormatter, TerminalView};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Label of the submit button while idle
const SUBMIT_LABEL: &str = "Estimate Price";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting house-estimator");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(|issue| format!("  - {}", issue))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", details);
    }
    debug!("Effective configuration: {:?}", config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = run_format(&cli, &config.output)?;

    let behavior = config.display.to_behavior_config();

    // === Dependency Injection ===
    let gateway = Arc::new(HttpEstimateGateway::with_timeout(
        &config.endpoint.base_url,
        config.endpoint.timeout(),
    )?);
    info!("Estimation service: {}", gateway.predict_url());

    let location = config.form.location;
    let currency = config.form.currency;

    // Interactive mode
    if cli.interactive {
        let view = Arc::new(terminal_view(&cli));
        let use_case =
            SubmitEstimateUseCase::new(gateway, view.bindings()).with_config(behavior);

        EstimateRepl::new(use_case, view)
            .with_defaults(location, currency)
            .with_request_echo(!cli.quiet)
            .run()
            .await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single estimate mode
    let form = cli.form_snapshot(location, currency);

    let report = match format {
        OutputFormat::Json => {
            let view = HeadlessView::new(form, SUBMIT_LABEL);
            let use_case =
                SubmitEstimateUseCase::new(gateway, view.bindings()).with_config(behavior);
            let report = use_case.submit().await?;
            println!("{}", ReportFormatter::format_json(&report));
            report
        }
        OutputFormat::Full => {
            let view = Arc::new(terminal_view(&cli));
            view.set_form(form);
            let use_case =
                SubmitEstimateUseCase::new(gateway, view.bindings()).with_config(behavior);
            let report = use_case.submit().await?;
            if cli.quiet {
                print!("{}", ReportFormatter::format(&report));
            } else {
                view.present().await;
            }
            report
        }
    };

    Ok(ExitCode::from(exit_status(&report)))
}

/// Output format for this run; interactive sessions only render to the terminal
fn run_format(cli: &Cli, output: &FileOutputConfig) -> Result<OutputFormat> {
    let format = output.effective_format(cli.output.map(OutputFormat::from));
    if cli.interactive && format == OutputFormat::Json {
        bail!("JSON output is not available in interactive mode.");
    }
    Ok(format)
}

/// 0 when the service produced an estimate, 1 for an application or transport error
fn exit_status(report: &SubmissionReport) -> u8 {
    if report.is_estimate() { 0 } else { 1 }
}

fn terminal_view(cli: &Cli) -> TerminalView {
    let view = TerminalView::new(Default::default(), SUBMIT_LABEL);
    if cli.quiet { view.quiet() } else { view }
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, and additionally to a daily-rolling file when a
/// log directory is given.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "house-estimator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use estimator_domain::{EstimateOutcome, EstimateRequest, SubmissionPhase};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("house-estimator").chain(args.iter().copied()))
    }

    fn report(phase: SubmissionPhase, outcome: Option<EstimateOutcome>) -> SubmissionReport {
        SubmissionReport {
            request: EstimateRequest::default(),
            phase,
            outcome,
            transport_error: None,
            display_text: String::new(),
            submitted_at: Utc::now(),
            elapsed_ms: 0,
        }
    }

    #[test]
    fn test_flag_format_wins_over_config() {
        let config = FileOutputConfig {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        assert_eq!(run_format(&cli(&[]), &config).unwrap(), OutputFormat::Json);
        assert_eq!(
            run_format(&cli(&["-o", "full"]), &config).unwrap(),
            OutputFormat::Full
        );
    }

    #[test]
    fn test_interactive_refuses_json() {
        let config = FileOutputConfig::default();
        assert!(run_format(&cli(&["-i", "-o", "json"]), &config).is_err());
        assert_eq!(run_format(&cli(&["-i"]), &config).unwrap(), OutputFormat::Full);
    }

    #[test]
    fn test_interactive_refuses_configured_json() {
        let config = FileOutputConfig {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        assert!(run_format(&cli(&["--interactive"]), &config).is_err());
    }

    #[test]
    fn test_exit_status() {
        let estimate = report(
            SubmissionPhase::Succeeded,
            Some(EstimateOutcome::Estimate {
                text: "$500,000".to_string(),
            }),
        );
        let rejected = report(
            SubmissionPhase::Succeeded,
            Some(EstimateOutcome::Rejected {
                message: "Invalid input".to_string(),
            }),
        );
        let failed = report(SubmissionPhase::Failed, None);

        assert_eq!(exit_status(&estimate), 0);
        assert_eq!(exit_status(&rejected), 1);
        assert_eq!(exit_status(&failed), 1);
    }
}
