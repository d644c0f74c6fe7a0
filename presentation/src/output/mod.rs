//! Output formatting for submission reports

pub mod report;

pub use report::ReportFormatter;
