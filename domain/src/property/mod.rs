//! Property submission: the flat field set a user fills in.
//!
//! - [`form::FormSnapshot`]: form state captured at submit time
//! - [`request::EstimateRequest`]: the JSON body posted to the service
//! - [`options`]: known location and currency choices

pub mod form;
pub mod options;
pub mod request;

pub use form::{FormSnapshot, fields};
pub use options::{Currency, Location};
pub use request::EstimateRequest;
