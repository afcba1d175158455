//! Job posting records supplied by the caller's store.

use serde::{Deserialize, Serialize};

/// A job posting. Read-only input to the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Store-assigned identifier.
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub description: String,

    /// Required skills in posting order.
    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Minimum years of experience (0 = no requirement).
    #[serde(default)]
    pub min_experience: f64,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub salary_range: String,
}

impl JobPosting {
    /// Create a posting with the fields the matcher reads.
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            company: String::new(),
            description: description.into(),
            required_skills: Vec::new(),
            min_experience: 0.0,
            location: String::new(),
            salary_range: String::new(),
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_experience(mut self, years: f64) -> Self {
        self.min_experience = years;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_salary_range(mut self, salary_range: impl Into<String>) -> Self {
        self.salary_range = salary_range.into();
        self
    }

    /// Text indexed by the vector space model: title, description and
    /// space-joined required skills.
    pub fn document_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.required_skills.join(" ")
        )
    }
}
