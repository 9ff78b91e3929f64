//! Tailored resume drafting

pub mod tables;
pub mod contact;
pub mod education;
pub mod sections;
pub mod draft;
