//! Estimate request value object

use super::form::{FormSnapshot, fields};
use serde::{Deserialize, Serialize};

/// Body of one `POST /predict` call
///
/// Built fresh from a [`FormSnapshot`] on every submit; nothing carries over
/// from a previous submission. Numeric fields stay text: the client forwards
/// what the form holds and leaves interpretation to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub sqft: Option<String>,
    pub floors: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub currency: Option<String>,
    pub waterfront: bool,
    pub garage: bool,
    pub garden: bool,
}

impl EstimateRequest {
    /// Gather the submission from the current form state
    pub fn from_form(form: &FormSnapshot) -> Self {
        let text = |name: &str| form.value(name).map(str::to_string);
        Self {
            bedrooms: text(fields::BEDROOMS),
            bathrooms: text(fields::BATHROOMS),
            sqft: text(fields::SQFT),
            floors: text(fields::FLOORS),
            age: text(fields::AGE),
            location: text(fields::LOCATION),
            currency: text(fields::CURRENCY),
            waterfront: form.is_checked(fields::WATERFRONT),
            garage: form.is_checked(fields::GARAGE),
            garden: form.is_checked(fields::GARDEN),
        }
    }

    /// JSON body as sent on the wire
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&FormSnapshot> for EstimateRequest {
    fn from(form: &FormSnapshot) -> Self {
        Self::from_form(form)
    }
}
