//! Batch command - match many resumes against one job corpus.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use cvmatch_core::models::matching::MatchResult;
use cvmatch_core::models::profile::CandidateProfile;
use cvmatch_core::{JobMatcher, JobStore, ProfileBuilder, ResumeParser};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Job postings as a JSON array (default: sample postings)
    #[arg(long)]
    jobs: Option<PathBuf>,

    /// Number of matches per resume (default: from config)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output directory for per-resume reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Per-resume report written to the output directory.
#[derive(Serialize)]
struct MatchReport<'a> {
    generated_at: String,
    profile: &'a CandidateProfile,
    matches: &'a [MatchResult],
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    outcome: Option<(CandidateProfile, Vec<MatchResult>)>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "pdf" | "docx" | "doc")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} resumes to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // One corpus for the whole batch.
    let jobs = super::load_store(args.jobs.as_deref())?.all_jobs()?;
    let top_n = args.top.unwrap_or(config.matching.top_n);
    let parser = ProfileBuilder::new().with_limits(config.extraction_limits());
    let matcher = JobMatcher::from_config(&config.matching);

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = parser
            .parse_path(&path, None)
            .map_err(anyhow::Error::from)
            .and_then(|profile| {
                let matches = matcher.rank(&profile, &jobs, top_n)?;
                Ok((profile, matches))
            });

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(outcome) => results.push(ProcessResult {
                path,
                outcome: Some(outcome),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        outcome: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    progress.abandon();
                    anyhow::bail!("Processing {} failed: {}", path.display(), error_msg);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.outcome.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some((profile, matches)) = &result.outcome {
                write_report(output_dir, &result.path, profile, matches)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} resumes in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_report(
    output_dir: &Path,
    source: &Path,
    profile: &CandidateProfile,
    matches: &[MatchResult],
) -> anyhow::Result<()> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let output_path = output_dir.join(format!("{}.json", stem));

    let report = MatchReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        profile,
        matches,
    };
    fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
    debug!("Wrote report to {}", output_path.display());

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "email",
        "skills",
        "experience_years",
        "match_count",
        "top_job_id",
        "top_job_title",
        "top_overall_score",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some((profile, matches)) = &result.outcome {
            let top = matches.first();
            wtr.write_record([
                filename,
                "success",
                &profile.email,
                &profile.skills.len().to_string(),
                &profile.experience.years.to_string(),
                &matches.len().to_string(),
                &top.map(|m| m.job_id.to_string()).unwrap_or_default(),
                top.map(|m| m.job_title.as_str()).unwrap_or(""),
                &top.map(|m| format!("{:.2}", m.overall_score)).unwrap_or_default(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
