use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const RESUME: &str = "Jane Doe
jane.doe@example.com | 555-123-4567

Senior Python Developer, Acme Corp
6 years of experience with Django, Flask, Docker and AWS.

Skills: Python, Django, PostgreSQL, REST API

B.S. Computer Science
";

/// Command with the config directory pointed at a scratch location.
fn cvmatch(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cvmatch").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home);
    cmd
}

fn write_resume(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, RESUME).unwrap();
    path
}

#[test]
fn parse_prints_profile_json() {
    let dir = TempDir::new().unwrap();
    let resume = write_resume(&dir, "jane.txt");

    let output = cvmatch(dir.path())
        .args(["parse", resume.to_str().unwrap(), "--name", "Jane Doe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let profile: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(profile["email"], "jane.doe@example.com");
    assert_eq!(profile["candidate_name"], "Jane Doe");
    assert_eq!(profile["filename"], "jane.txt");
    assert_eq!(profile["experience"]["years"], 6);
    let skills: Vec<&str> = profile["skills"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(skills.contains(&"python"));
    assert!(skills.contains(&"postgresql"));
}

#[test]
fn parse_text_format() {
    let dir = TempDir::new().unwrap();
    let resume = write_resume(&dir, "jane.txt");

    cvmatch(dir.path())
        .args(["parse", resume.to_str().unwrap(), "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidate: Unknown"))
        .stdout(predicate::str::contains("Experience: 6 years"));
}

#[test]
fn parse_rejects_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.odt");
    fs::write(&path, "whatever").unwrap();

    cvmatch(dir.path())
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn match_against_sample_postings() {
    let dir = TempDir::new().unwrap();
    let resume = write_resume(&dir, "jane.txt");

    let output = cvmatch(dir.path())
        .args(["match", resume.to_str().unwrap(), "-f", "json", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let matches: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(!matches.is_empty() && matches.len() <= 3);
    let scores: Vec<f64> = matches
        .iter()
        .map(|m| m["overall_score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(matches[0]["job_title"], "Senior Python Developer");
}

#[test]
fn match_with_jobs_file_and_saved_profile() {
    let dir = TempDir::new().unwrap();
    let resume = write_resume(&dir, "jane.txt");
    let profile_path = dir.path().join("jane.json");
    let jobs_path = dir.path().join("jobs.json");

    fs::write(
        &jobs_path,
        r#"[{"id": 1, "title": "Dev", "company": "X", "description": "Python developer role",
             "required_skills": ["Python", "SQL"], "min_experience": 0}]"#,
    )
    .unwrap();

    cvmatch(dir.path())
        .args(["parse", resume.to_str().unwrap(), "-o", profile_path.to_str().unwrap()])
        .assert()
        .success();

    let output = cvmatch(dir.path())
        .args([
            "match",
            profile_path.to_str().unwrap(),
            "--jobs",
            jobs_path.to_str().unwrap(),
            "-f",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let matches: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["skill_match"].as_f64(), Some(50.0));
    assert_eq!(matches[0]["experience_match"].as_f64(), Some(100.0));
    assert_eq!(matches[0]["missing_skills"][0], "sql");
}

#[test]
fn match_csv_output() {
    let dir = TempDir::new().unwrap();
    let resume = write_resume(&dir, "jane.txt");

    cvmatch(dir.path())
        .args(["match", resume.to_str().unwrap(), "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank,job_id,job_title"));
}

#[test]
fn jobs_sample_round_trips() {
    let dir = TempDir::new().unwrap();
    let jobs_path = dir.path().join("jobs.json");

    cvmatch(dir.path())
        .args(["jobs", "sample", "-o", jobs_path.to_str().unwrap()])
        .assert()
        .success();

    let jobs: Vec<Value> = serde_json::from_str(&fs::read_to_string(&jobs_path).unwrap()).unwrap();
    assert_eq!(jobs.len(), 6);

    cvmatch(dir.path())
        .args(["jobs", "list", "--jobs", jobs_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DevOps Engineer at Tech Mahindra"));
}

#[test]
fn batch_writes_reports_and_summary() {
    let dir = TempDir::new().unwrap();
    let inbox = dir.path().join("inbox");
    let out = dir.path().join("out");
    fs::create_dir_all(&inbox).unwrap();
    fs::write(inbox.join("jane.txt"), RESUME).unwrap();
    fs::write(inbox.join("broken.pdf"), "not a pdf").unwrap();

    let pattern = format!("{}/*", inbox.display());
    cvmatch(dir.path())
        .args([
            "batch",
            &pattern,
            "--output-dir",
            out.to_str().unwrap(),
            "--summary",
            "--continue-on-error",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful"));

    let report: Value = serde_json::from_str(&fs::read_to_string(out.join("jane.json")).unwrap()).unwrap();
    assert!(report["matches"].as_array().is_some_and(|m| !m.is_empty()));

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("jane.txt,success"));
    assert!(summary.contains("broken.pdf,error"));
}

#[test]
fn batch_stops_on_first_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.pdf"), "not a pdf").unwrap();

    let pattern = format!("{}/*.pdf", dir.path().display());
    cvmatch(dir.path()).args(["batch", &pattern]).assert().failure();
}

#[test]
fn config_init_then_get_and_set() {
    let dir = TempDir::new().unwrap();

    cvmatch(dir.path()).args(["config", "init"]).assert().success();
    cvmatch(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cvmatch(dir.path())
        .args(["config", "set", "matching.top_n", "2"])
        .assert()
        .success();
    cvmatch(dir.path())
        .args(["config", "get", "matching.top_n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));

    // The configured top_n applies to match.
    let resume = write_resume(&dir, "jane.txt");
    let output = cvmatch(dir.path())
        .args(["match", resume.to_str().unwrap(), "-f", "json"])
        .output()
        .unwrap();
    let matches: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(matches.len() <= 2);
}
