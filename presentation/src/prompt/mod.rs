//! Interactive form entry

pub mod form;

pub use form::{FormPrompt, parse_yes_no, resolve_currency, resolve_location};
