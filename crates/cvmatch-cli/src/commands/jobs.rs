//! Jobs command - write or inspect job posting files.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use cvmatch_core::{sample_jobs, JobStore};

/// Arguments for the jobs command.
#[derive(Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    command: JobsCommand,
}

#[derive(Subcommand)]
enum JobsCommand {
    /// Write the sample postings as JSON
    Sample {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List postings in a jobs file
    List {
        /// Job postings as a JSON array (default: sample postings)
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
}

pub async fn run(args: JobsArgs) -> anyhow::Result<()> {
    match args.command {
        JobsCommand::Sample { output } => write_sample(output),
        JobsCommand::List { jobs } => list_jobs(jobs),
    }
}

fn write_sample(output: Option<PathBuf>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&sample_jobs())?;

    if let Some(output_path) = output {
        fs::write(&output_path, json)?;
        println!(
            "{} Sample postings written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn list_jobs(jobs_path: Option<PathBuf>) -> anyhow::Result<()> {
    let jobs = super::load_store(jobs_path.as_deref())?.all_jobs()?;

    for job in &jobs {
        println!(
            "{:>4}  {}  {}",
            job.id,
            super::job_label(job),
            style(format!("{} skills, {}+ years", job.required_skills.len(), job.min_experience)).dim()
        );
    }
    println!();
    println!("{} {} postings", style("ℹ").blue(), jobs.len());

    Ok(())
}
