//! Input processing module
//! Handles file detection, text extraction, vocabulary loading and pipeline ingestion

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod env_ingest;
