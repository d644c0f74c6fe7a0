//! Display rules for the estimate form and its result area.

mod style;

pub use style::{
    BUSY_LABEL, CubicBezier, EntranceAnimation, FontSize, Keyframe, ScrollBlock, ScrollOptions,
    TRANSPORT_FAILURE_TEXT, TextColor,
};

/// Element ids of the estimate page markup
pub mod element_ids {
    pub const PREDICTION_FORM: &str = "predictionForm";
    pub const RESULT_AREA: &str = "resultArea";
    pub const PRICE_DISPLAY: &str = "priceDisplay";
    pub const LOADING_SPINNER: &str = "loadingSpinner";
    pub const WATERFRONT: &str = "waterfront";
    pub const GARAGE: &str = "garage";
    pub const GARDEN: &str = "garden";

    /// Class of the submit button inside the form
    pub const SUBMIT_BUTTON_CLASS: &str = "cta-button";
}
