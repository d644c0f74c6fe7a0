//! Line-by-line form entry

use estimator_domain::{Currency, FormSnapshot, Location, fields};
use rustyline::DefaultEditor;
use rustyline::Result as RlResult;
use std::str::FromStr;

/// Kind of input a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// Free text kept as typed
    Text,
    /// `y`/`n` checkbox
    YesNo,
    /// One of [`Location::all`]
    Location,
    /// One of [`Currency::all`]
    Currency,
}

/// One prompt of the form
#[derive(Debug, Clone, Copy)]
pub struct FormQuestion {
    pub field: &'static str,
    pub prompt: &'static str,
    pub kind: AnswerKind,
}

/// Questions in the order the page lays out its inputs
pub const QUESTIONS: &[FormQuestion] = &[
    FormQuestion {
        field: fields::BEDROOMS,
        prompt: "Number of Bedrooms (e.g., 3): ",
        kind: AnswerKind::Text,
    },
    FormQuestion {
        field: fields::BATHROOMS,
        prompt: "Number of Bathrooms (e.g., 2): ",
        kind: AnswerKind::Text,
    },
    FormQuestion {
        field: fields::SQFT,
        prompt: "Square Feet Living Area (e.g., 1500): ",
        kind: AnswerKind::Text,
    },
    FormQuestion {
        field: fields::FLOORS,
        prompt: "Number of Floors (e.g., 1, 1.5, 2): ",
        kind: AnswerKind::Text,
    },
    FormQuestion {
        field: fields::AGE,
        prompt: "Age of the house (years): ",
        kind: AnswerKind::Text,
    },
    FormQuestion {
        field: fields::WATERFRONT,
        prompt: "Waterfront View? (y/n): ",
        kind: AnswerKind::YesNo,
    },
    FormQuestion {
        field: fields::GARAGE,
        prompt: "Has Garage? (y/n): ",
        kind: AnswerKind::YesNo,
    },
    FormQuestion {
        field: fields::GARDEN,
        prompt: "Has Garden? (y/n): ",
        kind: AnswerKind::YesNo,
    },
    FormQuestion {
        field: fields::LOCATION,
        prompt: "Enter Location: ",
        kind: AnswerKind::Location,
    },
    FormQuestion {
        field: fields::CURRENCY,
        prompt: "Enter Currency: ",
        kind: AnswerKind::Currency,
    },
];

/// Only `y`/`yes` (any case) checks a box.
pub fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Empty input selects the default; a known option is canonicalized.
///
/// Anything else is forwarded as typed so the service can reject it.
pub fn resolve_location(input: &str, default: Location) -> String {
    resolve_option::<Location>(input, default.as_str())
}

/// Same rules as [`resolve_location`] for the currency select.
pub fn resolve_currency(input: &str, default: Currency) -> String {
    resolve_option::<Currency>(input, default.as_str())
}

fn resolve_option<T>(input: &str, default: &str) -> String
where
    T: FromStr + std::fmt::Display,
{
    let input = input.trim();
    if input.is_empty() {
        return default.to_string();
    }
    T::from_str(input)
        .map(|option| option.to_string())
        .unwrap_or_else(|_| input.to_string())
}

/// Prompts for every form field on the terminal
pub struct FormPrompt {
    editor: DefaultEditor,
    location: Location,
    currency: Currency,
}

impl FormPrompt {
    /// Create a prompt whose select fields default to the given options
    pub fn new(location: Location, currency: Currency) -> RlResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            location,
            currency,
        })
    }

    /// Ask every question in order and collect the answers
    pub fn read_form(&mut self) -> RlResult<FormSnapshot> {
        let mut form = FormSnapshot::new();
        for question in QUESTIONS {
            if question.kind == AnswerKind::Location {
                println!(
                    "\nLocations: {} (default: {})",
                    join_options(Location::all()),
                    self.location
                );
            }
            if question.kind == AnswerKind::Currency {
                println!(
                    "Currencies: {} (default: {})",
                    join_options(Currency::all()),
                    self.currency
                );
            }
            let line = self.editor.readline(question.prompt)?;
            self.apply_answer(&mut form, question, &line);
        }
        Ok(form)
    }

    /// Ask a y/n question
    pub fn confirm(&mut self, question: &str) -> RlResult<bool> {
        let line = self.editor.readline(question)?;
        Ok(parse_yes_no(&line))
    }

    /// Record one answer in the form
    pub fn apply_answer(&self, form: &mut FormSnapshot, question: &FormQuestion, input: &str) {
        match question.kind {
            AnswerKind::Text => form.set_value(question.field, input.trim()),
            AnswerKind::YesNo => form.set_checkbox(question.field, parse_yes_no(input)),
            AnswerKind::Location => {
                form.set_value(question.field, resolve_location(input, self.location))
            }
            AnswerKind::Currency => {
                form.set_value(question.field, resolve_currency(input, self.currency))
            }
        }
    }
}

fn join_options<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .map(|option| option.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no(" Y "));
        assert!(parse_yes_no("yes"));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("maybe"));
    }

    #[test]
    fn test_resolve_location() {
        assert_eq!(resolve_location("", Location::Suburb), "Suburb");
        assert_eq!(resolve_location("city center", Location::Suburb), "City Center");
        assert_eq!(resolve_location("Mars", Location::Suburb), "Mars");
    }

    #[test]
    fn test_resolve_currency() {
        assert_eq!(resolve_currency("  ", Currency::Inr), "INR");
        assert_eq!(resolve_currency("usd", Currency::Inr), "USD");
        assert_eq!(resolve_currency("EUR", Currency::Usd), "EUR");
    }

    #[test]
    fn test_questions_cover_every_field() {
        let asked: Vec<&str> = QUESTIONS.iter().map(|q| q.field).collect();
        for field in fields::TEXT_FIELDS.iter().chain(fields::CHECKBOXES.iter()) {
            assert!(asked.contains(field), "no question for {}", field);
        }
        assert_eq!(QUESTIONS.len(), fields::TEXT_FIELDS.len() + fields::CHECKBOXES.len());
    }
}
