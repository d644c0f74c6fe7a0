//! Form defaults from TOML (`[form]` section)

use estimator_domain::{Currency, Location};
use serde::{Deserialize, Serialize};

/// Raw form defaults from TOML
///
/// Used by the interactive prompt when the user leaves a select field empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    pub location: Location,
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_deserialize() {
        let toml_str = r#"
[form]
location = "City Center"
currency = "INR"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.form.location, Location::CityCenter);
        assert_eq!(config.form.currency, Currency::Inr);
    }

    #[test]
    fn test_unknown_location_rejected() {
        let toml_str = r#"
[form]
location = "Downtown"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
