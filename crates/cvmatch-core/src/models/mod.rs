//! Data models shared across the pipeline.

pub mod config;
pub mod job;
pub mod matching;
pub mod profile;
