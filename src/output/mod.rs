//! Report structures and formatters

pub mod report;
pub mod formatter;
