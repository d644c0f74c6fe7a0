//! Prediction response decoding

use super::outcome::EstimateOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded body of a `/predict` response
///
/// Decoding is permissive: any JSON document is accepted, only the
/// `prediction` and `error` keys of an object are looked at, and anything
/// else (other keys, non-object documents) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl PredictionResponse {
    /// Parse a response body; fails only when the body is not JSON at all
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    /// Pick the known keys out of an arbitrary JSON document
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut object) => Self {
                prediction: object.remove("prediction"),
                error: object.remove("error"),
            },
            _ => Self::default(),
        }
    }

    /// Whether the service reported an application error
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }

    /// Classify the response as an estimate or an application error
    pub fn outcome(&self) -> EstimateOutcome {
        match self.error.as_ref().filter(|error| is_truthy(error)) {
            Some(error) => EstimateOutcome::Rejected {
                message: render_value(error),
            },
            None => EstimateOutcome::Estimate {
                text: self.prediction.as_ref().map(render_value).unwrap_or_default(),
            },
        }
    }
}

impl From<Value> for PredictionResponse {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// `null`, `false`, `0` and `""` are falsy; everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a JSON value: strings verbatim, `null` empty, the rest as JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prediction() {
        let response = PredictionResponse::parse(r#"{"prediction":"$500,000"}"#).unwrap();
        assert!(!response.has_error());
        assert_eq!(
            response.outcome(),
            EstimateOutcome::Estimate {
                text: "$500,000".to_string()
            }
        );
    }

    #[test]
    fn test_parse_error() {
        let response = PredictionResponse::parse(r#"{"error":"Invalid input"}"#).unwrap();
        assert!(response.has_error());
        assert_eq!(
            response.outcome(),
            EstimateOutcome::Rejected {
                message: "Invalid input".to_string()
            }
        );
    }

    #[test]
    fn test_error_wins_over_prediction() {
        let response = PredictionResponse::from(json!({"prediction": "$1", "error": "boom"}));
        assert!(response.outcome().is_rejected());
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        for error in [json!(null), json!(false), json!(0), json!("")] {
            let response = PredictionResponse::from(json!({"prediction": "$2", "error": error}));
            assert_eq!(
                response.outcome(),
                EstimateOutcome::Estimate {
                    text: "$2".to_string()
                }
            );
        }
    }

    #[test]
    fn test_unknown_shape_is_empty_estimate() {
        let response = PredictionResponse::parse(r#"{"price": 12}"#).unwrap();
        assert_eq!(
            response.outcome(),
            EstimateOutcome::Estimate {
                text: String::new()
            }
        );

        let response = PredictionResponse::parse("[1, 2, 3]").unwrap();
        assert_eq!(response, PredictionResponse::default());
    }

    #[test]
    fn test_non_json_body_fails() {
        assert!(PredictionResponse::parse("<html>500</html>").is_err());
    }

    #[test]
    fn test_render_non_string_values() {
        assert_eq!(render_value(&json!(512000.5)), "512000.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!({"code": 3})), r#"{"code":3}"#);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0.0)));
    }
}
