//! Parse command - build a candidate profile from one resume.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cvmatch_core::models::profile::CandidateProfile;
use cvmatch_core::{ProfileBuilder, ResumeParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Resume file (txt, pdf, docx)
    #[arg(required = true)]
    input: PathBuf,

    /// Candidate name (defaults to "Unknown")
    #[arg(short, long)]
    name: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ProfileFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ProfileFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing resume: {}", args.input.display());

    let parser = ProfileBuilder::new().with_limits(config.extraction_limits());
    let profile = parser.parse_path(&args.input, args.name.as_deref())?;

    let output = match args.format {
        ProfileFormat::Json => serde_json::to_string_pretty(&profile)?,
        ProfileFormat::Text => format_profile_text(&profile),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Profile written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_profile_text(profile: &CandidateProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Candidate: {}\n", profile.candidate_name));
    if !profile.filename.is_empty() {
        output.push_str(&format!("File: {}\n", profile.filename));
    }
    output.push_str(&format!("Email: {}\n", or_dash(&profile.email)));
    output.push_str(&format!("Phone: {}\n", or_dash(&profile.phone)));
    output.push('\n');

    let skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();
    output.push_str(&format!("Skills ({}): {}\n", skills.len(), skills.join(", ")));
    output.push_str(&format!("Experience: {} years\n", profile.experience.years));

    if !profile.experience.positions.is_empty() {
        output.push_str("Positions:\n");
        for position in &profile.experience.positions {
            output.push_str(&format!("  - {}\n", position));
        }
    }

    if !profile.education.is_empty() {
        output.push_str("Education:\n");
        for line in &profile.education {
            output.push_str(&format!("  - {}\n", line));
        }
    }

    output.push_str(&format!(
        "\n{} words, {} characters\n",
        profile.word_count, profile.char_count
    ));

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
