//! Interactive session

pub mod repl;

pub use repl::EstimateRepl;
