//! Output formatting for ranking runs

pub mod console;
pub mod formatter;
