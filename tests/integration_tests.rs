//! Integration tests for the MRT CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an mrt command
fn mrt() -> Command {
    Command::cargo_bin("mrt").unwrap()
}

/// Helper to create a workspace in a temp directory
fn setup_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    mrt().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

/// Helper to create a project
fn create_project(tmp: &TempDir, title: &str) {
    mrt()
        .current_dir(tmp.path())
        .args(["project", "new", "--title", title])
        .assert()
        .success();
}

/// Helper to add a citation
fn add_citation(tmp: &TempDir, title: &str, authors: &str, year: &str, journal: &str) {
    mrt()
        .current_dir(tmp.path())
        .args([
            "citation",
            "add",
            "--title",
            title,
            "--authors",
            authors,
            "--year",
            year,
            "--journal",
            journal,
        ])
        .assert()
        .success();
}

/// Helper to write a small numeric dataset
fn write_sample_dataset(tmp: &TempDir) -> std::path::PathBuf {
    let path = tmp.path().join("sample.csv");
    fs::write(
        &path,
        "score,hours,group\n\
         1,2,control\n\
         2,3,control\n\
         3,4,control\n\
         4,5,treatment\n\
         5,6,treatment\n\
         6,7,treatment\n",
    )
    .unwrap();
    path
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    mrt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meridian Research Toolkit"));
}

#[test]
fn test_version_displays() {
    mrt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mrt"));
}

#[test]
fn test_unknown_command_fails() {
    mrt()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_not_in_workspace_fails() {
    let tmp = TempDir::new().unwrap();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a research workspace"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_creates_workspace_structure() {
    let tmp = TempDir::new().unwrap();

    mrt()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(tmp.path().join("data/projects.csv").is_file());
    assert!(tmp.path().join("data/citations.csv").is_file());
    assert!(tmp.path().join("data/reports").is_dir());
}

#[test]
fn test_init_is_idempotent() {
    let tmp = setup_workspace();
    create_project(&tmp, "Kept Project");

    mrt().current_dir(tmp.path()).arg("init").assert().success();

    // Existing data survives a second init
    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept Project"));
}

#[test]
fn test_init_with_explicit_path() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("research");

    mrt()
        .arg("init")
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("data/projects.csv").is_file());
}

// ============================================================================
// Project Command Tests
// ============================================================================

#[test]
fn test_project_list_empty_workspace() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));
}

#[test]
fn test_project_new_and_list() {
    let tmp = setup_workspace();
    create_project(&tmp, "First Study");
    create_project(&tmp, "Second Study");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Study"))
        .stdout(predicate::str::contains("Second Study"))
        .stdout(predicate::str::contains("2 project(s) found"));
}

#[test]
fn test_project_new_requires_title() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_project_new_rejects_empty_title() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "new", "--title", ""])
        .assert()
        .failure();
}

#[test]
fn test_project_new_starts_active_with_zero_progress() {
    let tmp = setup_workspace();
    create_project(&tmp, "Pilot Study");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "show", "Pilot Study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active"))
        .stdout(predicate::str::contains("[----------]   0%"));
}

#[test]
fn test_project_new_composes_problem_statement() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "new",
            "--title",
            "Sleep Study",
            "--context",
            "college students",
            "--focus",
            "sleep deprivation",
            "--significance",
            "it affects academic performance",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("college students"))
        .stdout(predicate::str::contains("sleep deprivation"));

    mrt()
        .current_dir(tmp.path())
        .args(["project", "show", "Sleep Study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Problem Statement"));
}

#[test]
fn test_project_new_partial_statement_fields_fail() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "new",
            "--title",
            "Partial",
            "--context",
            "some context",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--significance"));
}

#[test]
fn test_project_new_with_questions() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "new",
            "--title",
            "Questions Study",
            "--question",
            "What drives the effect?",
            "--question",
            "Does it replicate?",
        ])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "show", "Questions Study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. What drives the effect?"))
        .stdout(predicate::str::contains("2. Does it replicate?"));
}

#[test]
fn test_project_list_filter_by_status() {
    let tmp = setup_workspace();
    create_project(&tmp, "Active One");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list", "--status", "Active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active One"))
        .stdout(predicate::str::contains("1 project(s) found"));

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list", "--status", "Completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));
}

#[test]
fn test_project_list_truncates_long_accented_title() {
    let tmp = setup_workspace();
    create_project(&tmp, "Étude longitudinale des phénomènes éducatifs en région francophone");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Étude longitudinale des phénomè"))
        .stdout(predicate::str::contains("..."));
}

#[test]
fn test_project_list_json_format() {
    let tmp = setup_workspace();
    create_project(&tmp, "JSON Study");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("\"title\""))
        .stdout(predicate::str::contains("JSON Study"));
}

#[test]
fn test_project_show_not_found() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["project", "show", "Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project found"));
}

#[test]
fn test_project_update_progress_and_status() {
    let tmp = setup_workspace();
    create_project(&tmp, "Moving Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "update",
            "Moving Study",
            "--status",
            "Completed",
            "--progress",
            "literature-review=0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated project"));

    mrt()
        .current_dir(tmp.path())
        .args(["project", "show", "Moving Study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"))
        .stdout(predicate::str::contains("[#####-----]  50%"));
}

#[test]
fn test_project_update_rejects_out_of_range_progress() {
    let tmp = setup_workspace();
    create_project(&tmp, "Bounded Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "update",
            "Bounded Study",
            "--progress",
            "analysis=1.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fraction in [0, 1]"));
}

#[test]
fn test_project_update_rejects_unknown_stage() {
    let tmp = setup_workspace();
    create_project(&tmp, "Staged Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "update",
            "Staged Study",
            "--progress",
            "peer-review=0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stage"));
}

#[test]
fn test_project_update_results_feed_the_report() {
    let tmp = setup_workspace();
    create_project(&tmp, "Concluded Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "project",
            "update",
            "Concluded Study",
            "--methodology",
            "Randomized survey",
            "--results",
            "No significant difference found",
        ])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Concluded Study", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Randomized survey"))
        .stdout(predicate::str::contains("No significant difference found"));
}

#[test]
fn test_duplicate_project_titles_tolerated() {
    let tmp = setup_workspace();
    create_project(&tmp, "Twin");
    create_project(&tmp, "Twin");

    mrt()
        .current_dir(tmp.path())
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 project(s) found"));
}

// ============================================================================
// Citation Command Tests
// ============================================================================

#[test]
fn test_citation_list_empty_workspace() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No citations found"));
}

#[test]
fn test_citation_add_and_list() {
    let tmp = setup_workspace();
    add_citation(&tmp, "Study X", "Smith, J.", "2020", "Journal Y");
    add_citation(&tmp, "Study Z", "Doe, A.", "2021", "Journal W");

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Study X"))
        .stdout(predicate::str::contains("Study Z"))
        .stdout(predicate::str::contains("2 citation(s) found"));
}

#[test]
fn test_citation_list_filter_by_year() {
    let tmp = setup_workspace();
    add_citation(&tmp, "Older", "A.", "2019", "J1");
    add_citation(&tmp, "Newer", "B.", "2023", "J2");

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "list", "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Newer"))
        .stdout(predicate::str::contains("1 citation(s) found"));
}

#[test]
fn test_citation_add_unknown_project_warns_but_stores() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "citation",
            "add",
            "--title",
            "Linked Study",
            "--authors",
            "Smith, J.",
            "--year",
            "2020",
            "--journal",
            "Journal Y",
            "--project",
            "No Such Project",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("No project titled"));

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "list", "--project", "No Such Project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 citation(s) found"));
}

#[test]
fn test_citation_add_requires_authors() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "add", "--title", "Incomplete", "--year", "2020"])
        .assert()
        .failure();
}

#[test]
fn test_citation_export_apa() {
    let tmp = setup_workspace();
    add_citation(&tmp, "Study X", "Smith, J.", "2020", "Journal Y");

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, J. (2020). Study X. Journal Y."));
}

#[test]
fn test_citation_export_includes_doi() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "citation",
            "add",
            "--title",
            "DOI Study",
            "--authors",
            "Doe, A.",
            "--year",
            "2022",
            "--journal",
            "Journal W",
            "--doi",
            "10.1000/xyz",
        ])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://doi.org/10.1000/xyz"));
}

#[test]
fn test_citation_export_to_file() {
    let tmp = setup_workspace();
    add_citation(&tmp, "Study X", "Smith, J.", "2020", "Journal Y");

    let out = tmp.path().join("references.txt");
    mrt()
        .current_dir(tmp.path())
        .args(["citation", "export", "-o"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Smith, J. (2020). Study X. Journal Y."));
}

#[test]
fn test_citation_export_unsupported_style_fails() {
    let tmp = setup_workspace();
    add_citation(&tmp, "Study X", "Smith, J.", "2020", "Journal Y");

    mrt()
        .current_dir(tmp.path())
        .args(["citation", "export", "--style", "MLA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported citation style"));
}

// ============================================================================
// Analyze Command Tests
// ============================================================================

#[test]
fn test_analyze_describe() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("describe")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("COLUMN"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("hours"));
}

#[test]
fn test_analyze_describe_selected_column() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("describe")
        .arg(&dataset)
        .args(["-c", "score"])
        .assert()
        .success()
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("3.5000"));
}

#[test]
fn test_analyze_describe_unknown_column_fails() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("describe")
        .arg(&dataset)
        .args(["-c", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such column"));
}

#[test]
fn test_analyze_describe_missing_file_fails() {
    mrt()
        .args(["analyze", "describe", "/nonexistent/data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read dataset"));
}

#[test]
fn test_analyze_correlate() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    // hours is score + 1, so the correlation is exactly 1
    mrt()
        .arg("analyze")
        .arg("correlate")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000"));
}

#[test]
fn test_analyze_correlate_json_format() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("correlate")
        .arg(&dataset)
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"columns\""))
        .stdout(predicate::str::contains("\"values\""));
}

#[test]
fn test_analyze_t_test() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("test")
        .arg(&dataset)
        .args(["-d", "score", "-g", "group"])
        .assert()
        .success()
        .stdout(predicate::str::contains("control"))
        .stdout(predicate::str::contains("treatment"))
        .stdout(predicate::str::contains("Test statistic:"))
        .stdout(predicate::str::contains("P-value:"))
        .stdout(predicate::str::contains("Conclusion:"));
}

#[test]
fn test_analyze_mann_whitney() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("test")
        .arg(&dataset)
        .args(["-d", "score", "-g", "group", "-k", "mann-whitney"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P-value:"));
}

#[test]
fn test_analyze_test_unknown_kind_fails() {
    let tmp = TempDir::new().unwrap();
    let dataset = write_sample_dataset(&tmp);

    mrt()
        .arg("analyze")
        .arg("test")
        .arg(&dataset)
        .args(["-d", "score", "-g", "group", "-k", "anova"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported test kind"));
}

#[test]
fn test_analyze_test_wrong_group_count_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("three_groups.csv");
    fs::write(
        &path,
        "score,group\n1,a\n2,b\n3,c\n4,a\n5,b\n6,c\n",
    )
    .unwrap();

    mrt()
        .arg("analyze")
        .arg("test")
        .arg(&path)
        .args(["-d", "score", "-g", "group"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 2 categories"));
}

// ============================================================================
// Report Command Tests
// ============================================================================

#[test]
fn test_report_generate_with_placeholders() {
    let tmp = setup_workspace();
    create_project(&tmp, "Empty Report Study");

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Empty Report Study", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Research Report"))
        .stdout(predicate::str::contains("Title: Empty Report Study"))
        .stdout(predicate::str::contains("No problem statement provided"))
        .stdout(predicate::str::contains("No research questions defined"))
        .stdout(predicate::str::contains("Methodology not specified"))
        .stdout(predicate::str::contains("No analysis results available"))
        .stdout(predicate::str::contains("No citations"));
}

#[test]
fn test_report_generate_includes_project_citations() {
    let tmp = setup_workspace();
    create_project(&tmp, "Cited Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "citation",
            "add",
            "--title",
            "Study X",
            "--authors",
            "Smith, J.",
            "--year",
            "2020",
            "--journal",
            "Journal Y",
            "--project",
            "Cited Study",
        ])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Cited Study", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, J. (2020). Study X. Journal Y."));
}

#[test]
fn test_report_generate_with_results_text() {
    let tmp = setup_workspace();
    create_project(&tmp, "Results Study");

    mrt()
        .current_dir(tmp.path())
        .args([
            "report",
            "generate",
            "-p",
            "Results Study",
            "--results",
            "t(4) = -1.00, p = 0.37",
            "--no-save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("t(4) = -1.00, p = 0.37"));
}

#[test]
fn test_report_generate_unknown_project_fails() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project found"));
}

#[test]
fn test_report_generate_saves_under_reports_dir() {
    let tmp = setup_workspace();
    create_project(&tmp, "Saved Study");

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Saved Study", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let files: Vec<_> = fs::read_dir(tmp.path().join("data/reports"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().to_string_lossy().ends_with(".txt"))
        .collect();
    assert_eq!(files.len(), 1, "Expected exactly one report file");

    let content = fs::read_to_string(files[0].path()).unwrap();
    assert!(content.contains("Title: Saved Study"));
}

#[test]
fn test_report_list_empty() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved reports found"));
}

#[test]
fn test_report_list_shows_saved_reports() {
    let tmp = setup_workspace();
    create_project(&tmp, "Listed Study");

    mrt()
        .current_dir(tmp.path())
        .args(["report", "generate", "-p", "Listed Study", "-q"])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("research_report_"))
        .stdout(predicate::str::contains("1 report(s) found"));
}

// ============================================================================
// Profile Command Tests
// ============================================================================

#[test]
fn test_profile_edit_and_show() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args([
            "profile",
            "edit",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada@example.edu",
            "--interests",
            "computation,mathematics",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated"));

    mrt()
        .current_dir(tmp.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("ada@example.edu"))
        .stdout(predicate::str::contains("computation, mathematics"));
}

#[test]
fn test_profile_add_publication_appends() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["profile", "edit", "--add-publication", "First paper (2020)"])
        .assert()
        .success();
    mrt()
        .current_dir(tmp.path())
        .args(["profile", "edit", "--add-publication", "Second paper (2021)"])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First paper (2020)"))
        .stdout(predicate::str::contains("Second paper (2021)"));
}

#[test]
fn test_profile_show_json_format() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["profile", "edit", "--name", "Ada"])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["profile", "show", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada\""));
}

// ============================================================================
// Settings Command Tests
// ============================================================================

#[test]
fn test_settings_show_defaults() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APA"))
        .stdout(predicate::str::contains("%Y-%m-%d"));
}

#[test]
fn test_settings_set_citation_style() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "set", "--citation-style", "MLA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings updated"));

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MLA"));
}

#[test]
fn test_settings_set_invalid_style_fails() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "set", "--citation-style", "Harvard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid citation style"));
}

#[test]
fn test_settings_set_auto_save() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "set", "--auto-save", "false"])
        .assert()
        .success();

    mrt()
        .current_dir(tmp.path())
        .args(["settings", "show", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"auto_save\": false"));
}

// ============================================================================
// Chat Command Tests
// ============================================================================

#[test]
fn test_chat_without_credential_degrades_gracefully() {
    let tmp = setup_workspace();

    mrt()
        .current_dir(tmp.path())
        .env_remove("MRT_API_KEY")
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .args(["chat", "--message", "hello"])
        .assert()
        .success()
        .stderr(predicate::str::contains("credential not configured"));
}

#[test]
fn test_chat_one_shot_outside_workspace_still_degrades() {
    let tmp = TempDir::new().unwrap();

    mrt()
        .current_dir(tmp.path())
        .env_remove("MRT_API_KEY")
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .args(["chat", "-m", "hello"])
        .assert()
        .success();
}
