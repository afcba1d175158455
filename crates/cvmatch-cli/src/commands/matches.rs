//! Match command - rank job postings against one resume.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cvmatch_core::models::config::CvMatchConfig;
use cvmatch_core::models::matching::MatchResult;
use cvmatch_core::models::profile::CandidateProfile;
use cvmatch_core::{JobMatcher, ProfileBuilder, ResumeParser};

/// Arguments for the match command.
#[derive(Args)]
pub struct MatchArgs {
    /// Resume file (txt, pdf, docx) or a parsed profile (.json)
    #[arg(required = true)]
    input: PathBuf,

    /// Job postings as a JSON array (default: sample postings)
    #[arg(long)]
    jobs: Option<PathBuf>,

    /// Number of matches to return (default: from config)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: MatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let profile = load_profile(&args.input, &config)?;
    let store = super::load_store(args.jobs.as_deref())?;
    let top_n = args.top.unwrap_or(config.matching.top_n);

    info!("Matching {} against {} postings", args.input.display(), store.jobs().len());

    let matcher = JobMatcher::from_config(&config.matching);
    let matches = matcher.rank_from_store(&profile, &store, top_n)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&matches)?,
        OutputFormat::Csv => format_matches_csv(&matches)?,
        OutputFormat::Text => format_matches_text(&profile, &matches),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} matches written to {}",
            style("✓").green(),
            matches.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse a resume, or read a profile saved by `cvmatch parse`.
pub fn load_profile(path: &Path, config: &CvMatchConfig) -> anyhow::Result<CandidateProfile> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let json = fs::read_to_string(path)?;
        let profile: CandidateProfile = serde_json::from_str(&json)
            .map_err(|e| anyhow::anyhow!("Invalid profile {}: {}", path.display(), e))?;
        return Ok(profile);
    }

    let parser = ProfileBuilder::new().with_limits(config.extraction_limits());
    Ok(parser.parse_path(path, None)?)
}

pub fn format_matches_csv(matches: &[MatchResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "rank",
        "job_id",
        "job_title",
        "company",
        "similarity_score",
        "skill_match",
        "experience_match",
        "overall_score",
        "matching_skills",
        "missing_skills",
    ])?;

    for (index, result) in matches.iter().enumerate() {
        wtr.write_record([
            &(index + 1).to_string(),
            &result.job_id.to_string(),
            &result.job_title,
            &result.company,
            &format!("{:.2}", result.similarity_score),
            &format!("{:.2}", result.skill_match),
            &format!("{:.2}", result.experience_match),
            &format!("{:.2}", result.overall_score),
            &result.matching_skills.join(";"),
            &result.missing_skills.join(";"),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_matches_text(profile: &CandidateProfile, matches: &[MatchResult]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Matches for {} ({} skills, {} years)\n",
        profile.candidate_name,
        profile.skills.len(),
        profile.experience.years
    ));

    if matches.is_empty() {
        output.push_str("\nNo matching jobs found.\n");
        return output;
    }

    for (index, result) in matches.iter().enumerate() {
        output.push('\n');
        output.push_str(&format!(
            "{}. {} - {} [{:.2}]\n",
            index + 1,
            result.job_title,
            result.company,
            result.overall_score
        ));
        output.push_str(&format!(
            "   similarity {:.2}  skills {:.1}  experience {:.1}\n",
            result.similarity_score, result.skill_match, result.experience_match
        ));
        if !result.matching_skills.is_empty() {
            output.push_str(&format!("   has:     {}\n", result.matching_skills.join(", ")));
        }
        if !result.missing_skills.is_empty() {
            output.push_str(&format!("   missing: {}\n", result.missing_skills.join(", ")));
        }
    }

    output
}
