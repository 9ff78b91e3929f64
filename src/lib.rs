//! Resume tailor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod runner;
pub mod tailoring;

pub use config::Config;
pub use error::{Result, TailorError};
