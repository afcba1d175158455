//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod jobs;
pub mod matches;
pub mod parse;

use std::fs;
use std::path::Path;

use cvmatch_core::models::job::JobPosting;
use cvmatch_core::{CvMatchConfig, MemoryStore};
use tracing::debug;

/// Load the configuration from an explicit path, the default location, or
/// fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CvMatchConfig> {
    if let Some(path) = config_path {
        return Ok(CvMatchConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(CvMatchConfig::from_file(&default_path)?)
    } else {
        Ok(CvMatchConfig::default())
    }
}

/// Job store from a JSON file, or the sample corpus.
pub fn load_store(jobs_path: Option<&Path>) -> anyhow::Result<MemoryStore> {
    match jobs_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read jobs file {}: {}", path.display(), e))?;
            let store = MemoryStore::from_jobs_json(&json)?;
            debug!("Loaded {} job postings from {}", store.jobs().len(), path.display());
            Ok(store)
        }
        None => {
            debug!("No jobs file given, using sample postings");
            Ok(MemoryStore::sample())
        }
    }
}

/// Display title for a posting list entry.
pub fn job_label(job: &JobPosting) -> String {
    if job.company.is_empty() {
        job.title.clone()
    } else {
        format!("{} at {}", job.title, job.company)
    }
}
