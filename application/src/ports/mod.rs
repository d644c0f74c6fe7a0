//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod estimate_gateway;
pub mod headless_view;
pub mod view;
