//! In-memory view bindings
//!
//! Keeps element state in memory and records every mutation, so a
//! submission can run without any UI (JSON output, tests).

use super::view::{FormSource, LoadingIndicator, PriceDisplay, ResultArea, SubmitButton, ViewBindings};
use estimator_domain::{EntranceAnimation, FontSize, FormSnapshot, ScrollOptions, TextColor};
use std::sync::{Arc, Mutex, MutexGuard};

/// One mutation applied to a headless element
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ButtonLabel(String),
    ButtonEnabled(bool),
    ResultAreaVisible(bool),
    ResultAreaScrolled(ScrollOptions),
    PriceVisible(bool),
    PriceText(String),
    PriceFontSize(FontSize),
    PriceColor(TextColor),
    PriceAnimated(EntranceAnimation),
    LoadingVisible(bool),
}

/// Current state of every element
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub button_label: String,
    pub button_enabled: bool,
    pub result_area_visible: bool,
    pub price_visible: bool,
    pub price_text: String,
    pub price_font_size: FontSize,
    pub price_color: TextColor,
    pub loading_visible: bool,
}

impl DisplayState {
    fn idle(button_label: String) -> Self {
        Self {
            button_label,
            button_enabled: true,
            result_area_visible: false,
            price_visible: false,
            price_text: String::new(),
            price_font_size: FontSize::Normal,
            price_color: TextColor::Default,
            loading_visible: false,
        }
    }
}

struct HeadlessState {
    form: FormSnapshot,
    display: DisplayState,
    events: Vec<ViewEvent>,
}

/// View whose elements live in memory
pub struct HeadlessView {
    state: Mutex<HeadlessState>,
}

impl HeadlessView {
    pub fn new(form: FormSnapshot, button_label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(HeadlessState {
                form,
                display: DisplayState::idle(button_label.into()),
                events: Vec::new(),
            }),
        })
    }

    /// Bindings backed by this view
    pub fn bindings(self: &Arc<Self>) -> ViewBindings {
        ViewBindings {
            form: Arc::new(HeadlessForm(Arc::clone(self))),
            submit_button: Arc::new(HeadlessButton(Arc::clone(self))),
            result_area: Arc::new(HeadlessResultArea(Arc::clone(self))),
            price_display: Arc::new(HeadlessPriceDisplay(Arc::clone(self))),
            loading_indicator: Arc::new(HeadlessLoadingIndicator(Arc::clone(self))),
        }
    }

    /// Replace the form contents, as a user editing fields would
    pub fn set_form(&self, form: FormSnapshot) {
        self.lock().form = form;
    }

    pub fn display(&self) -> DisplayState {
        self.lock().display.clone()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, HeadlessState> {
        // Element state stays consistent even if a holder panicked.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, event: ViewEvent) {
        let mut state = self.lock();
        let display = &mut state.display;
        match &event {
            ViewEvent::ButtonLabel(label) => display.button_label = label.clone(),
            ViewEvent::ButtonEnabled(enabled) => display.button_enabled = *enabled,
            ViewEvent::ResultAreaVisible(visible) => display.result_area_visible = *visible,
            ViewEvent::ResultAreaScrolled(_) | ViewEvent::PriceAnimated(_) => {}
            ViewEvent::PriceVisible(visible) => display.price_visible = *visible,
            ViewEvent::PriceText(text) => display.price_text = text.clone(),
            ViewEvent::PriceFontSize(size) => display.price_font_size = *size,
            ViewEvent::PriceColor(color) => display.price_color = *color,
            ViewEvent::LoadingVisible(visible) => display.loading_visible = *visible,
        }
        state.events.push(event);
    }
}

struct HeadlessForm(Arc<HeadlessView>);

impl FormSource for HeadlessForm {
    fn snapshot(&self) -> FormSnapshot {
        self.0.lock().form.clone()
    }
}

struct HeadlessButton(Arc<HeadlessView>);

impl SubmitButton for HeadlessButton {
    fn label(&self) -> String {
        self.0.lock().display.button_label.clone()
    }

    fn set_label(&self, label: &str) {
        self.0.apply(ViewEvent::ButtonLabel(label.to_string()));
    }

    fn set_enabled(&self, enabled: bool) {
        self.0.apply(ViewEvent::ButtonEnabled(enabled));
    }
}

struct HeadlessResultArea(Arc<HeadlessView>);

impl ResultArea for HeadlessResultArea {
    fn set_visible(&self, visible: bool) {
        self.0.apply(ViewEvent::ResultAreaVisible(visible));
    }

    fn scroll_into_view(&self, options: ScrollOptions) {
        self.0.apply(ViewEvent::ResultAreaScrolled(options));
    }
}

struct HeadlessPriceDisplay(Arc<HeadlessView>);

impl PriceDisplay for HeadlessPriceDisplay {
    fn set_visible(&self, visible: bool) {
        self.0.apply(ViewEvent::PriceVisible(visible));
    }

    fn set_text(&self, text: &str) {
        self.0.apply(ViewEvent::PriceText(text.to_string()));
    }

    fn set_font_size(&self, size: FontSize) {
        self.0.apply(ViewEvent::PriceFontSize(size));
    }

    fn set_color(&self, color: TextColor) {
        self.0.apply(ViewEvent::PriceColor(color));
    }

    fn animate(&self, animation: &EntranceAnimation) {
        self.0.apply(ViewEvent::PriceAnimated(*animation));
    }
}

struct HeadlessLoadingIndicator(Arc<HeadlessView>);

impl LoadingIndicator for HeadlessLoadingIndicator {
    fn set_visible(&self, visible: bool) {
        self.0.apply(ViewEvent::LoadingVisible(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator_domain::fields;

    #[test]
    fn test_starts_idle() {
        let view = HeadlessView::new(FormSnapshot::new(), "Estimate Price");
        let display = view.display();
        assert_eq!(display.button_label, "Estimate Price");
        assert!(display.button_enabled);
        assert!(!display.result_area_visible);
        assert!(view.events().is_empty());
    }

    #[test]
    fn test_bindings_mutate_shared_state() {
        let view = HeadlessView::new(FormSnapshot::new(), "Go");
        let bindings = view.bindings();

        bindings.submit_button.set_label("Busy");
        bindings.price_display.set_color(TextColor::Error);
        bindings.loading_indicator.set_visible(true);

        let display = view.display();
        assert_eq!(display.button_label, "Busy");
        assert_eq!(bindings.submit_button.label(), "Busy");
        assert_eq!(display.price_color, TextColor::Error);
        assert!(display.loading_visible);
        assert_eq!(view.events().len(), 3);
    }

    #[test]
    fn test_form_replacement() {
        let view = HeadlessView::new(FormSnapshot::new(), "Go");
        let bindings = view.bindings();
        view.set_form(FormSnapshot::new().with_value(fields::AGE, "4"));
        assert_eq!(bindings.form.snapshot().value(fields::AGE), Some("4"));
    }
}
