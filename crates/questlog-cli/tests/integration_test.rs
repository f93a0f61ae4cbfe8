//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server also uses.

use std::{fs, process::Command};

use questlog_core::{RawPlan, derive_focus, intake};
use tempfile::TempDir;

const PLAN: &str = r#"{
    "questTitle": "Learn Spanish",
    "plan": [
        {"taskTitle": "Alphabet", "duration": "20 minutes", "xp": 10},
        {"taskTitle": "Numbers", "duration": "30 minutes", "xp": 15},
        {"taskTitle": "Greetings", "duration": "30 minutes", "xp": 15},
        {"taskTitle": "First conversation", "duration": "1 hour", "xp": 40}
    ]
}"#;

/// Run a CLI command and capture its output
fn run_cli_command(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_questlog"))
        .arg("--no-color")
        .args(args)
        .env_remove("QUESTLOG_PLANNER_URL")
        .output()
        .expect("Failed to run CLI command");
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_focus_output_matches_core_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("spanish.json");
    fs::write(&path, PLAN).unwrap();
    let path = path.to_str().unwrap();

    let raw: RawPlan = serde_json::from_str(PLAN).unwrap();
    let mut steps = intake::prepare(raw.plan).unwrap();

    let cli_output = run_cli_command(&["focus", path]);
    assert!(cli_output.contains(&derive_focus(&steps).to_string()));

    steps[0].completed = true;
    steps[1].completed = true;
    let cli_output = run_cli_command(&["focus", path, "--complete", "1,2"]);
    let expected = derive_focus(&steps);
    assert_eq!(expected.overall_progress, 50);
    assert!(cli_output.contains(&expected.to_string()));
}

#[test]
fn test_focus_summary_labels() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("spanish.json");
    fs::write(&path, PLAN).unwrap();

    let output = run_cli_command(&["focus", path.to_str().unwrap()]);
    assert!(output.contains("- **Difficulty**: Medium"));
    assert!(output.contains("- **Reward**: 80 XP (0 earned)"));
}
