//! Form snapshot value object

use std::collections::BTreeMap;

/// Names of the form fields read at submit time
pub mod fields {
    pub const BEDROOMS: &str = "bedrooms";
    pub const BATHROOMS: &str = "bathrooms";
    pub const SQFT: &str = "sqft";
    pub const FLOORS: &str = "floors";
    pub const AGE: &str = "age";
    pub const LOCATION: &str = "location";
    pub const CURRENCY: &str = "currency";

    pub const WATERFRONT: &str = "waterfront";
    pub const GARAGE: &str = "garage";
    pub const GARDEN: &str = "garden";

    /// Text and select fields, in submission order
    pub const TEXT_FIELDS: [&str; 7] = [BEDROOMS, BATHROOMS, SQFT, FLOORS, AGE, LOCATION, CURRENCY];

    /// Checkbox fields, in submission order
    pub const CHECKBOXES: [&str; 3] = [WATERFRONT, GARAGE, GARDEN];
}

/// State of the form at the moment it is submitted
///
/// Text and select inputs are kept exactly as entered; checkboxes are kept
/// as their checked state. A field that was never set reads as `None`
/// (text) or unchecked (checkbox).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
    checkboxes: BTreeMap<String, bool>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text or select field value
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(name, value);
        self
    }

    /// Set a checkbox state
    pub fn with_checkbox(mut self, name: impl Into<String>, checked: bool) -> Self {
        self.set_checkbox(name, checked);
        self
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn set_checkbox(&mut self, name: impl Into<String>, checked: bool) {
        self.checkboxes.insert(name.into(), checked);
    }

    /// Value of a text or select field, if the form holds one
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Checked state of a checkbox (unchecked when absent)
    pub fn is_checked(&self, name: &str) -> bool {
        self.checkboxes.get(name).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lookup() {
        let form = FormSnapshot::new().with_value(fields::BEDROOMS, "3");
        assert_eq!(form.value(fields::BEDROOMS), Some("3"));
        assert_eq!(form.value(fields::SQFT), None);
    }

    #[test]
    fn test_values_kept_verbatim() {
        let form = FormSnapshot::new().with_value(fields::FLOORS, " 1.5 ");
        assert_eq!(form.value(fields::FLOORS), Some(" 1.5 "));
    }

    #[test]
    fn test_absent_checkbox_is_unchecked() {
        let form = FormSnapshot::new().with_checkbox(fields::GARAGE, true);
        assert!(form.is_checked(fields::GARAGE));
        assert!(!form.is_checked(fields::GARDEN));
    }

    #[test]
    fn test_set_overwrites() {
        let mut form = FormSnapshot::new().with_checkbox(fields::WATERFRONT, true);
        form.set_checkbox(fields::WATERFRONT, false);
        form.set_value(fields::AGE, "10");
        form.set_value(fields::AGE, "12");
        assert!(!form.is_checked(fields::WATERFRONT));
        assert_eq!(form.value(fields::AGE), Some("12"));
    }
}
