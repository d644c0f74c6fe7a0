//! Terminal view bindings

pub mod view;

pub use view::TerminalView;
