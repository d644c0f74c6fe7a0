//! Known select-field options
//!
//! These list what the estimation service was trained on and what it can
//! convert to. They drive prompts and help text only; submissions still
//! carry plain strings.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Neighbourhood category of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Suburb,
    #[serde(rename = "City Center")]
    CityCenter,
    Rural,
}

impl Location {
    pub fn all() -> &'static [Location] {
        &[Location::Suburb, Location::CityCenter, Location::Rural]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Suburb => "Suburb",
            Location::CityCenter => "City Center",
            Location::Rural => "Rural",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Location::all()
            .iter()
            .copied()
            .find(|location| location.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownLocation(s.to_string()))
    }
}

/// Currency the estimate is quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Inr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "INR" => Ok(Currency::Inr),
            _ => Err(DomainError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse_case_insensitive() {
        assert_eq!("city center".parse::<Location>().unwrap(), Location::CityCenter);
        assert_eq!(" RURAL ".parse::<Location>().unwrap(), Location::Rural);
    }

    #[test]
    fn test_location_unknown() {
        let err = "Moon".parse::<Location>().unwrap_err();
        assert_eq!(err, DomainError::UnknownLocation("Moon".to_string()));
    }

    #[test]
    fn test_location_serde_matches_display() {
        for location in Location::all() {
            let json = serde_json::to_string(location).unwrap();
            assert_eq!(json, format!("\"{}\"", location));
        }
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::Inr);
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Location::default(), Location::Suburb);
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
