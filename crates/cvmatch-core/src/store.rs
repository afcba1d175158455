//! Seam to the external record store.
//!
//! The library never persists anything. Callers hand job postings and
//! stored profiles in through [`JobStore`].

use crate::error::Result;
use crate::models::job::JobPosting;
use crate::models::profile::StoredProfile;

/// Read access to the caller's records.
pub trait JobStore {
    /// Every job posting, in store order.
    fn all_jobs(&self) -> Result<Vec<JobPosting>>;

    /// A stored profile by id, `None` if absent.
    fn resume(&self, id: u64) -> Result<Option<StoredProfile>>;
}

/// Store over plain in-memory vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    jobs: Vec<JobPosting>,
    resumes: Vec<StoredProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with [`sample_jobs`].
    pub fn sample() -> Self {
        Self::new().with_jobs(sample_jobs())
    }

    pub fn with_jobs(mut self, jobs: Vec<JobPosting>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_resumes(mut self, resumes: Vec<StoredProfile>) -> Self {
        self.resumes = resumes;
        self
    }

    /// Load postings from a JSON array.
    pub fn from_jobs_json(json: &str) -> Result<Self> {
        let jobs: Vec<JobPosting> = serde_json::from_str(json)?;
        Ok(Self::new().with_jobs(jobs))
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }
}

impl JobStore for MemoryStore {
    fn all_jobs(&self) -> Result<Vec<JobPosting>> {
        Ok(self.jobs.clone())
    }

    fn resume(&self, id: u64) -> Result<Option<StoredProfile>> {
        Ok(self.resumes.iter().find(|stored| stored.id == id).cloned())
    }
}

/// The six postings an empty store is seeded with.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting::new(
            1,
            "Senior Python Developer",
            "Join Infosys as a Senior Python Developer. Work on enterprise-level applications, microservices, and cloud-based solutions. Collaborate with global teams to deliver high-quality software solutions for Fortune 500 clients.",
        )
        .with_company("Infosys")
        .with_skills(["Python", "Django", "Flask", "REST API", "PostgreSQL", "Docker", "Git", "AWS"])
        .with_min_experience(5.0)
        .with_location("Bangalore, Karnataka")
        .with_salary_range("₹12,00,000 - ₹20,00,000"),
        JobPosting::new(
            2,
            "Machine Learning Engineer",
            "TCS is hiring Machine Learning Engineers to work on AI/ML projects for global clients. Develop and deploy ML models, work with data science teams, and implement MLOps practices. Experience with production ML systems required.",
        )
        .with_company("TCS")
        .with_skills(["Python", "Machine Learning", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "Numpy", "SQL", "MLOps"])
        .with_min_experience(3.0)
        .with_location("Mumbai, Maharashtra")
        .with_salary_range("₹10,00,000 - ₹18,00,000"),
        JobPosting::new(
            3,
            "Full Stack Developer",
            "Wipro is looking for Full Stack Developers to build scalable web applications. Work on both frontend and backend development, participate in agile sprints, and deliver features for client projects across various domains.",
        )
        .with_company("Wipro")
        .with_skills(["JavaScript", "React", "Node.js", "MongoDB", "Express", "HTML", "CSS", "Git", "REST API"])
        .with_min_experience(2.0)
        .with_location("Bangalore, Karnataka")
        .with_salary_range("₹6,00,000 - ₹12,00,000"),
        JobPosting::new(
            4,
            "Data Scientist",
            "HCL is seeking Data Scientists to analyze business data and build predictive analytics solutions. Work with stakeholders to understand requirements, create data models, and provide actionable insights using advanced analytics.",
        )
        .with_company("HCL Technologies")
        .with_skills(["Python", "R", "SQL", "Machine Learning", "Data Science", "Pandas", "Tableau", "Statistics", "Power BI"])
        .with_min_experience(4.0)
        .with_location("Noida, Uttar Pradesh")
        .with_salary_range("₹9,00,000 - ₹16,00,000"),
        JobPosting::new(
            5,
            "DevOps Engineer",
            "Tech Mahindra requires DevOps Engineers to manage cloud infrastructure, automate deployments, and maintain CI/CD pipelines. Work with AWS/Azure, containerization technologies, and ensure system reliability and scalability.",
        )
        .with_company("Tech Mahindra")
        .with_skills(["AWS", "Docker", "Kubernetes", "CI/CD", "Linux", "Python", "Terraform", "Jenkins", "GitLab"])
        .with_min_experience(3.0)
        .with_location("Pune, Maharashtra")
        .with_salary_range("₹8,00,000 - ₹15,00,000"),
        JobPosting::new(
            6,
            "Frontend Developer",
            "Flipkart is hiring Frontend Developers to build user interfaces for our e-commerce platform. Work on React-based applications, optimize performance, and create seamless shopping experiences for millions of users.",
        )
        .with_company("Flipkart")
        .with_skills(["React", "TypeScript", "HTML", "CSS", "JavaScript", "Redux", "Webpack", "Git", "Responsive Design"])
        .with_min_experience(2.0)
        .with_location("Bangalore, Karnataka")
        .with_salary_range("₹8,00,000 - ₹15,00,000"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CvMatchError;

    #[test]
    fn test_sample_corpus() {
        let jobs = MemoryStore::sample().all_jobs().unwrap();
        assert_eq!(jobs.len(), 6);
        let ids: Vec<u64> = jobs.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(jobs.iter().all(|job| !job.required_skills.is_empty()));
    }

    #[test]
    fn test_jobs_from_json() {
        let store = MemoryStore::from_jobs_json(
            r#"[{"id": 9, "title": "Rust Engineer", "required_skills": ["Rust"], "min_experience": 2}]"#,
        )
        .unwrap();
        assert_eq!(store.jobs()[0].min_experience, 2.0);
    }

    #[test]
    fn test_bad_json() {
        let err = MemoryStore::from_jobs_json("{not json").unwrap_err();
        assert!(matches!(err, CvMatchError::Serde(_)));
    }

    #[test]
    fn test_resume_lookup() {
        let json = r#"{"id": 4, "raw_text": "", "cleaned_text": ""}"#;
        let stored: StoredProfile = serde_json::from_str(json).unwrap();
        let store = MemoryStore::new().with_resumes(vec![stored]);

        assert!(store.resume(4).unwrap().is_some());
        assert!(store.resume(5).unwrap().is_none());
    }
}
