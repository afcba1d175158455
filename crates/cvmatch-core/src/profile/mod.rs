//! Candidate profile building: document text plus field extraction.

mod builder;
pub mod rules;

pub use builder::{ProfileBuilder, ResumeParser};
