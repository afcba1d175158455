//! Rule-based field extractors for resumes.
//!
//! Every extractor is total: a field that is not found comes back as its
//! empty value, never as an error.

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;
pub mod skills;
pub mod text;

pub use contact::{extract_email, extract_phone, EmailExtractor, PhoneExtractor};
pub use education::extract_education;
pub use experience::{extract_experience, extract_positions, extract_years, YearsExtractor};
pub use skills::{extract_skills, SkillExtractor};
pub use text::clean_text;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
