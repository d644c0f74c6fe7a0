//! Submit Estimate use case
//!
//! Runs one submission cycle: put the view into its busy state, post the
//! form once, wait out the reveal delay, then render the outcome.

use crate::config::{BehaviorConfig, InFlightPolicy};
use crate::ports::estimate_gateway::EstimateGateway;
use crate::ports::view::ViewBindings;
use chrono::{DateTime, Utc};
use estimator_domain::{
    DomainError, EntranceAnimation, EstimateOutcome, EstimateRequest, FontSize, ScrollOptions,
    SubmissionPhase, TRANSPORT_FAILURE_TEXT, TextColor,
};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// Errors that prevent a submission cycle from running
///
/// Application and transport errors are not listed here: they end a cycle
/// normally and are described by the [`SubmissionReport`].
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    Busy,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Summary of one finished submission cycle
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    /// Body that was posted
    pub request: EstimateRequest,
    /// Terminal phase the cycle reached (`succeeded` or `failed`)
    pub phase: SubmissionPhase,
    /// What the service answered, when it answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<EstimateOutcome>,
    /// Why the exchange failed, when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_error: Option<String>,
    /// Text left in the price display
    pub display_text: String,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl SubmissionReport {
    /// True only when the service produced an estimate
    pub fn is_estimate(&self) -> bool {
        matches!(self.outcome, Some(EstimateOutcome::Estimate { .. }))
    }
}

/// Use case for submitting the estimate form
pub struct SubmitEstimateUseCase<G: EstimateGateway + 'static> {
    gateway: Arc<G>,
    view: ViewBindings,
    config: BehaviorConfig,
    in_flight: AtomicUsize,
}

impl<G: EstimateGateway + 'static> SubmitEstimateUseCase<G> {
    pub fn new(gateway: Arc<G>, view: ViewBindings) -> Self {
        Self {
            gateway,
            view,
            config: BehaviorConfig::default(),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of cycles currently between submit and outcome
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one submission cycle
    ///
    /// Suspends exactly twice: on the remote call and on the reveal delay
    /// (the latter only when a response arrived).
    pub async fn submit(&self) -> Result<SubmissionReport, SubmitError> {
        let _guard = self.enter()?;
        let started = Instant::now();
        let submitted_at = Utc::now();

        let phase = SubmissionPhase::Idle.transition(SubmissionPhase::Submitting)?;
        let original_label = self.show_busy();

        let request = EstimateRequest::from_form(&self.view.form.snapshot());
        info!("Submitting estimate request");
        debug!("Request body: {}", request.to_json());

        let (phase, outcome, transport_error) = match self.gateway.predict(&request).await {
            Ok(response) => {
                if !self.config.reveal_delay.is_zero() {
                    tokio::time::sleep(self.config.reveal_delay).await;
                }
                let outcome = response.outcome();
                self.show_outcome(&outcome, &original_label);
                match &outcome {
                    EstimateOutcome::Estimate { text } => info!("Estimate received: {}", text),
                    EstimateOutcome::Rejected { message } => {
                        info!("Service rejected the request: {}", message)
                    }
                }
                (phase.transition(SubmissionPhase::Succeeded)?, Some(outcome), None)
            }
            Err(e) => {
                error!("Error: {}", e);
                self.show_transport_failure(&original_label);
                (
                    phase.transition(SubmissionPhase::Failed)?,
                    None,
                    Some(e.to_string()),
                )
            }
        };

        let display_text = match &outcome {
            Some(outcome) => outcome.display_text(),
            None => TRANSPORT_FAILURE_TEXT.to_string(),
        };

        Ok(SubmissionReport {
            request,
            phase,
            outcome,
            transport_error,
            display_text,
            submitted_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    fn enter(&self) -> Result<InFlightGuard<'_>, SubmitError> {
        match self.config.in_flight {
            InFlightPolicy::Allow => {
                self.in_flight.fetch_add(1, Ordering::SeqCst);
            }
            InFlightPolicy::Reject => {
                self.in_flight
                    .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                    .map_err(|_| SubmitError::Busy)?;
            }
        }
        Ok(InFlightGuard(&self.in_flight))
    }

    /// Enter the busy state; returns the label to restore afterwards
    fn show_busy(&self) -> String {
        let button = &self.view.submit_button;
        let original_label = button.label();
        button.set_label(&self.config.busy_label);
        button.set_enabled(false);

        self.view.result_area.set_visible(true);
        self.view.price_display.set_visible(false);
        self.view.loading_indicator.set_visible(true);

        original_label
    }

    fn show_outcome(&self, outcome: &EstimateOutcome, original_label: &str) {
        let display = &self.view.price_display;
        self.view.loading_indicator.set_visible(false);
        display.set_visible(true);

        match outcome {
            EstimateOutcome::Rejected { .. } => {
                display.set_text(&outcome.display_text());
                display.set_font_size(FontSize::Reduced);
                display.set_color(TextColor::Error);
            }
            EstimateOutcome::Estimate { text } => {
                display.set_text(text);
                display.set_font_size(FontSize::Normal);
                // A previous rejection may have left the error color behind.
                display.set_color(TextColor::Default);
                display.animate(&EntranceAnimation::price_reveal());
            }
        }

        self.restore_button(original_label);
        self.view
            .result_area
            .scroll_into_view(ScrollOptions::smooth_nearest());
    }

    fn show_transport_failure(&self, original_label: &str) {
        self.view.loading_indicator.set_visible(false);
        self.view.price_display.set_visible(true);
        self.view.price_display.set_text(TRANSPORT_FAILURE_TEXT);
        self.restore_button(original_label);
    }

    fn restore_button(&self, original_label: &str) {
        self.view.submit_button.set_label(original_label);
        self.view.submit_button.set_enabled(true);
    }
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
