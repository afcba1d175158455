//! Regex patterns and keyword tables for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Known skill terms matched by substring against the whole resume.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "node", "sql", "mongodb",
    "aws", "docker", "kubernetes", "git", "linux", "machine learning",
    "deep learning", "tensorflow", "pytorch", "nlp", "data science",
    "pandas", "numpy", "scikit-learn", "django", "flask", "angular",
    "vue", "html", "css", "typescript", "c++", "c#", "php", "ruby",
    "go", "rust", "swift", "kotlin", "scala", "r", "matlab", "excel",
    "tableau", "power bi", "agile", "scrum", "devops", "ci/cd",
    "rest api", "graphql", "microservices", "blockchain", "cybersecurity",
];

/// Keywords marking a line as a held position.
pub const POSITION_KEYWORDS: &[&str] = &["engineer", "developer", "manager", "analyst", "specialist"];

lazy_static! {
    // Contact
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    /// Tried in order; the first pattern with any match wins.
    pub static ref PHONE_PATTERNS: Vec<Regex> = vec![
        // 555-123-4567, 555.123.4567, 5551234567
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        // (555) 123-4567
        Regex::new(r"\(\d{3}\)\s?\d{3}[-.]?\d{4}").unwrap(),
        // +44 20 7946 0958
        Regex::new(r"\+\d{1,3}[-.]?\d{1,4}[-.]?\d{1,4}[-.]?\d{1,9}").unwrap(),
    ];

    // Skill section headers, matched against lowercased text
    pub static ref SKILL_HEADERS: Vec<Regex> = vec![
        Regex::new(r"skills?[:\-]?\s*([^\n]+)").unwrap(),
        Regex::new(r"technical skills?[:\-]?\s*([^\n]+)").unwrap(),
        Regex::new(r"proficienc(?:y|ies)[:\-]?\s*([^\n]+)").unwrap(),
    ];

    pub static ref SKILL_DELIMITERS: Regex = Regex::new(r"[,;|•\-\n]").unwrap();

    // Experience
    pub static ref YEARS_EXPERIENCE: Vec<Regex> = vec![
        Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience").unwrap(),
        Regex::new(r"(?i)experience[:\-]?\s*(\d+)\+?\s*years?").unwrap(),
    ];

    // Education
    pub static ref EDUCATION: Vec<Regex> = vec![
        // Unanchored: "B.Sc", "MTech" and "BSc (Hons)" all count.
        Regex::new(r"(?i)(?:bachelor|master|ph\.?d|doctorate|mba|b\.?s|m\.?s|b\.?a|m\.?a)").unwrap(),
        Regex::new(r"(?i)(?:degree|diploma|certification)").unwrap(),
    ];

    // Text cleanup
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref UNSAFE_CHARS: Regex = Regex::new(r"[^\w\s.,!?\-]").unwrap();
}
