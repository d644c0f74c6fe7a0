//! Terminal rendition of the estimate form view
//!
//! The loading indicator is a live spinner. The price display is printed
//! once per cycle by [`TerminalView::present`], after the use case has
//! finished mutating it.

use colored::Colorize;
use estimator_application::{
    FormSource, LoadingIndicator, PriceDisplay, ResultArea, SubmitButton, ViewBindings,
};
use estimator_domain::{EntranceAnimation, FontSize, FormSnapshot, ScrollOptions, TextColor};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Time between two frames of the entrance animation
const FRAME_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone)]
struct PriceState {
    visible: bool,
    text: String,
    font_size: FontSize,
    color: TextColor,
}

struct TerminalState {
    form: FormSnapshot,
    button_label: String,
    button_enabled: bool,
    result_visible: bool,
    price: PriceState,
    spinner: Option<ProgressBar>,
    pending_animation: Option<EntranceAnimation>,
}

/// View printing to the terminal
pub struct TerminalView {
    state: Mutex<TerminalState>,
    animate: bool,
    spinner: bool,
}

impl TerminalView {
    pub fn new(form: FormSnapshot, button_label: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                form,
                button_label: button_label.into(),
                button_enabled: true,
                result_visible: false,
                price: PriceState {
                    visible: false,
                    text: String::new(),
                    font_size: FontSize::Normal,
                    color: TextColor::Default,
                },
                spinner: None,
                pending_animation: None,
            }),
            animate: true,
            spinner: true,
        }
    }

    /// Plain output: no spinner, no animation
    pub fn quiet(mut self) -> Self {
        self.animate = false;
        self.spinner = false;
        self
    }

    /// Bindings backed by this view
    pub fn bindings(self: &Arc<Self>) -> ViewBindings {
        ViewBindings {
            form: Arc::new(TerminalForm(Arc::clone(self))),
            submit_button: Arc::new(TerminalButton(Arc::clone(self))),
            result_area: Arc::new(TerminalResultArea(Arc::clone(self))),
            price_display: Arc::new(TerminalPriceDisplay(Arc::clone(self))),
            loading_indicator: Arc::new(TerminalLoadingIndicator(Arc::clone(self))),
        }
    }

    /// Replace the form contents before the next submit
    pub fn set_form(&self, form: FormSnapshot) {
        self.lock().form = form;
    }

    pub fn button_label(&self) -> String {
        self.lock().button_label.clone()
    }

    pub fn is_button_enabled(&self) -> bool {
        self.lock().button_enabled
    }

    /// Styled price line, or `None` while the display is hidden
    pub fn render_price(&self) -> Option<String> {
        let state = self.lock();
        if !state.result_visible || !state.price.visible {
            return None;
        }
        Some(style_price(&state.price))
    }

    /// Print the price display, playing a pending entrance animation
    pub async fn present(&self) {
        let (line, plain, animation) = {
            let mut state = self.lock();
            let animation = state.pending_animation.take();
            if !state.result_visible || !state.price.visible {
                return;
            }
            (
                style_price(&state.price),
                state.price.clone(),
                animation,
            )
        };

        if let Some(animation) = animation.filter(|_| self.animate) {
            play_reveal(&plain, &animation).await;
        }
        println!("\r{}", line);
    }

    fn lock(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn show_spinner(&self) {
        if !self.spinner {
            return;
        }
        let mut state = self.lock();
        if state.spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(state.button_label.clone());
        pb.set_message("Estimating price...");
        pb.enable_steady_tick(Duration::from_millis(100));
        state.spinner = Some(pb);
    }

    fn hide_spinner(&self) {
        if let Some(pb) = self.lock().spinner.take() {
            pb.finish_and_clear();
        }
    }
}

fn style_price(price: &PriceState) -> String {
    let text = match price.font_size {
        FontSize::Normal => price.text.bold(),
        FontSize::Reduced => price.text.normal(),
    };
    match price.color {
        TextColor::Error => text.red().to_string(),
        TextColor::Default => text.to_string(),
    }
}

/// Reveal the text character by character following the animation's opacity
async fn play_reveal(price: &PriceState, animation: &EntranceAnimation) {
    let chars: Vec<char> = price.text.chars().collect();
    let mut elapsed = Duration::ZERO;
    while elapsed < animation.duration {
        let frame = animation.frame_at(elapsed);
        let shown = ((chars.len() as f64) * frame.opacity).ceil() as usize;
        let partial: String = chars.iter().take(shown.min(chars.len())).collect();
        print!("\r{}", partial.bold());
        let _ = std::io::stdout().flush();
        tokio::time::sleep(FRAME_INTERVAL).await;
        elapsed += FRAME_INTERVAL;
    }
}

struct TerminalForm(Arc<TerminalView>);

impl FormSource for TerminalForm {
    fn snapshot(&self) -> FormSnapshot {
        self.0.lock().form.clone()
    }
}

struct TerminalButton(Arc<TerminalView>);

impl SubmitButton for TerminalButton {
    fn label(&self) -> String {
        self.0.button_label()
    }

    fn set_label(&self, label: &str) {
        let mut state = self.0.lock();
        state.button_label = label.to_string();
        if let Some(pb) = &state.spinner {
            pb.set_prefix(label.to_string());
        }
    }

    fn set_enabled(&self, enabled: bool) {
        self.0.lock().button_enabled = enabled;
    }
}

struct TerminalResultArea(Arc<TerminalView>);

impl ResultArea for TerminalResultArea {
    fn set_visible(&self, visible: bool) {
        self.0.lock().result_visible = visible;
    }

    // The terminal always shows its last line.
    fn scroll_into_view(&self, _options: ScrollOptions) {}
}

struct TerminalPriceDisplay(Arc<TerminalView>);

impl PriceDisplay for TerminalPriceDisplay {
    fn set_visible(&self, visible: bool) {
        self.0.lock().price.visible = visible;
    }

    fn set_text(&self, text: &str) {
        self.0.lock().price.text = text.to_string();
    }

    fn set_font_size(&self, size: FontSize) {
        self.0.lock().price.font_size = size;
    }

    fn set_color(&self, color: TextColor) {
        self.0.lock().price.color = color;
    }

    fn animate(&self, animation: &EntranceAnimation) {
        self.0.lock().pending_animation = Some(*animation);
    }
}

struct TerminalLoadingIndicator(Arc<TerminalView>);

impl LoadingIndicator for TerminalLoadingIndicator {
    fn set_visible(&self, visible: bool) {
        if visible {
            self.0.show_spinner();
        } else {
            self.0.hide_spinner();
        }
    }
}
