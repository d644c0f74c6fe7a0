//! Interactive estimate loop

use crate::output::ReportFormatter;
use crate::prompt::FormPrompt;
use crate::terminal::TerminalView;
use estimator_application::{EstimateGateway, SubmissionReport, SubmitEstimateUseCase};
use estimator_domain::{Currency, Location};
use rustyline::Result as RlResult;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing::warn;

const ANOTHER_PROMPT: &str = "\nEstimate another house? (y/n): ";

/// Prompt, submit and show, until the user stops
pub struct EstimateRepl<G: EstimateGateway + 'static> {
    use_case: SubmitEstimateUseCase<G>,
    view: Arc<TerminalView>,
    location: Location,
    currency: Currency,
    show_request: bool,
}

impl<G: EstimateGateway + 'static> EstimateRepl<G> {
    /// The use case must be bound to `view`
    pub fn new(use_case: SubmitEstimateUseCase<G>, view: Arc<TerminalView>) -> Self {
        Self {
            use_case,
            view,
            location: Location::default(),
            currency: Currency::default(),
            show_request: false,
        }
    }

    /// Defaults offered for the select fields
    pub fn with_defaults(mut self, location: Location, currency: Currency) -> Self {
        self.location = location;
        self.currency = currency;
        self
    }

    /// Echo the posted form after each estimate
    pub fn with_request_echo(mut self, show: bool) -> Self {
        self.show_request = show;
        self
    }

    /// Run the loop; returns the last report, if any submission completed
    pub async fn run(&self) -> RlResult<Option<SubmissionReport>> {
        let mut prompt = FormPrompt::new(self.location, self.currency)?;
        let mut last = None;

        self.print_welcome();

        loop {
            let form = match prompt.read_form() {
                Ok(form) => form,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => return Err(err),
            };

            self.view.set_form(form);
            if let Some(report) = self.process_form().await {
                last = Some(report);
            }

            match prompt.confirm(ANOTHER_PROMPT) {
                Ok(true) => continue,
                Ok(false) | Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(last)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        House Price Estimator - Form         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Please enter the details of the house.");
        println!("Press Ctrl-D to quit.");
        println!();
    }

    async fn process_form(&self) -> Option<SubmissionReport> {
        println!();
        match self.use_case.submit().await {
            Ok(report) => {
                self.view.present().await;
                if self.show_request {
                    print!("{}", ReportFormatter::format_request(&report.request));
                }
                Some(report)
            }
            Err(e) => {
                warn!("Submission not started: {}", e);
                eprintln!("Error: {}", e);
                None
            }
        }
    }
}
