//! Core library for resume parsing and job matching.
//!
//! This crate provides:
//! - Document text extraction (plain text, PDF, DOCX)
//! - Rule-based resume field extraction (contact, skills, experience, education)
//! - Candidate profile building
//! - A TF-IDF vector space model over job postings and a blended match ranker

pub mod error;
pub mod models;
pub mod document;
pub mod profile;
pub mod matching;
pub mod store;

pub use error::{CvMatchError, Result};
pub use models::config::CvMatchConfig;
pub use models::job::JobPosting;
pub use models::matching::MatchResult;
pub use models::profile::{CandidateProfile, Experience, StoredProfile};
pub use document::{Document, DocumentFormat, ExtractionLimits};
pub use profile::{ProfileBuilder, ResumeParser};
pub use matching::{FittedModel, JobMatcher, ModelCache, ScoreWeights, Vectorizer, VectorizerParams};
pub use store::{JobStore, MemoryStore, sample_jobs};
