//! View binding ports
//!
//! The submission use case never looks elements up by itself; it receives
//! one binding per element it touches. Implementations live in the
//! presentation layer (terminal) or in [`super::headless_view`] (in-memory).

use estimator_domain::{EntranceAnimation, FontSize, FormSnapshot, ScrollOptions, TextColor};
use std::sync::Arc;

/// The form whose fields are submitted
pub trait FormSource: Send + Sync {
    /// Current field values and checkbox states
    fn snapshot(&self) -> FormSnapshot;
}

/// Button that triggers a submission
pub trait SubmitButton: Send + Sync {
    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    fn set_enabled(&self, enabled: bool);
}

/// Container holding the loading indicator and the price display
pub trait ResultArea: Send + Sync {
    fn set_visible(&self, visible: bool);

    fn scroll_into_view(&self, options: ScrollOptions);
}

/// Element showing the estimate or an error message
pub trait PriceDisplay: Send + Sync {
    fn set_visible(&self, visible: bool);

    fn set_text(&self, text: &str);

    fn set_font_size(&self, size: FontSize);

    fn set_color(&self, color: TextColor);

    /// Start the entrance animation; must not block until it ends
    fn animate(&self, animation: &EntranceAnimation);
}

/// Indicator shown while a request is in flight
pub trait LoadingIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// Every element the submission use case touches
#[derive(Clone)]
pub struct ViewBindings {
    pub form: Arc<dyn FormSource>,
    pub submit_button: Arc<dyn SubmitButton>,
    pub result_area: Arc<dyn ResultArea>,
    pub price_display: Arc<dyn PriceDisplay>,
    pub loading_indicator: Arc<dyn LoadingIndicator>,
}

impl std::fmt::Debug for ViewBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewBindings").finish_non_exhaustive()
    }
}
