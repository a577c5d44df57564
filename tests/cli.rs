#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DOCTORS: &str = r#"[
  {
    "id": "1",
    "name": "Aarav Shah",
    "specialities": [{"name": "Dentist"}],
    "fees": "₹ 500",
    "experience": "13 Years of experience",
    "languages": ["English", "Hindi"],
    "clinic": {"name": "Smile Care", "address": {"locality": "Andheri", "city": "Mumbai"}},
    "video_consult": true,
    "in_clinic": false
  },
  {
    "id": "2",
    "name": "Aarti Singh",
    "specialities": [{"name": "Cardiologist"}],
    "fees": "₹ 300",
    "experience": "5 Years of experience",
    "video_consult": false,
    "in_clinic": true
  },
  {
    "id": "3",
    "name": "Amit Roy",
    "photo": null,
    "specialities": [{"name": "Dentist"}, {"name": "Dermatologist"}],
    "fees": "₹ 800",
    "experience": "20 Years of experience",
    "video_consult": true,
    "in_clinic": true
  },
  {
    "id": "4",
    "name": "Deepa Shah",
    "specialities": [{"name": "Dermatologist"}],
    "fees": "₹ 450",
    "experience": "8 Years of experience",
    "video_consult": true,
    "in_clinic": true
  }
]"#;

struct Env {
    dir: TempDir,
    source: PathBuf,
}

fn setup() -> Env {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("doctors.json");
    fs::write(&source, DOCTORS).unwrap();
    Env { dir, source }
}

fn docfind(env: &Env) -> Command {
    let mut cmd = Command::cargo_bin("docfind").unwrap();
    cmd.env("DOCFIND_CONFIG_DIR", env.dir.path().join("config"))
        .env_remove("DOCFIND_LOG")
        .arg("--source")
        .arg(&env.source);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Names in the order they appear in `output`.
fn order<'a>(output: &str, names: &[&'a str]) -> Vec<&'a str> {
    let mut found: Vec<(usize, &str)> = names
        .iter()
        .filter_map(|name| output.find(name).map(|at| (at, *name)))
        .collect();
    found.sort();
    found.into_iter().map(|(_, name)| name).collect()
}

const ALL: [&str; 4] = ["Aarav Shah", "Aarti Singh", "Amit Roy", "Deepa Shah"];

#[test]
fn list_without_filters_shows_everything_in_source_order() {
    let env = setup();
    let output = stdout_of(docfind(&env).arg("list"));

    assert!(output.contains("Found 4 doctors"));
    assert_eq!(order(&output, &ALL), ALL);
    assert!(output.contains("URL: http://localhost:3000/\n"));
}

#[test]
fn default_command_is_list() {
    let env = setup();
    docfind(&env)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 doctors"));
}

#[test]
fn list_sorts_by_fees_ascending() {
    let env = setup();
    let output = stdout_of(docfind(&env).args(["list", "--sort", "fees"]));

    assert!(output.contains("Sorted by: Fees (Low to High)"));
    assert_eq!(
        order(&output, &ALL),
        ["Aarti Singh", "Deepa Shah", "Aarav Shah", "Amit Roy"]
    );
    assert!(output.contains("?sortBy=fees"));
}

#[test]
fn list_sorts_by_experience_descending() {
    let env = setup();
    let output = stdout_of(docfind(&env).args(["list", "--sort", "experience"]));

    assert_eq!(
        order(&output, &ALL),
        ["Amit Roy", "Aarav Shah", "Deepa Shah", "Aarti Singh"]
    );
}

#[test]
fn list_combines_filters() {
    let env = setup();
    let output = stdout_of(docfind(&env).args([
        "list",
        "--search",
        "shah",
        "--type",
        "video",
        "-p",
        "Dermatologist",
    ]));

    assert!(output.contains("Found 1 doctors"));
    assert_eq!(order(&output, &ALL), ["Deepa Shah"]);
    assert!(output.contains(
        "URL: http://localhost:3000/?search=shah&consultationType=Video+Consult&specialities=Dermatologist"
    ));
}

#[test]
fn specialities_match_any_selected() {
    let env = setup();
    let output = stdout_of(
        docfind(&env).args(["list", "-p", "Cardiologist", "-p", "Dermatologist"]),
    );

    assert_eq!(
        order(&output, &ALL),
        ["Aarti Singh", "Amit Roy", "Deepa Shah"]
    );
    assert!(output.contains("specialities=Cardiologist%2CDermatologist"));
}

#[test]
fn query_seeds_the_filters() {
    let env = setup();
    let output = stdout_of(
        docfind(&env)
            .args(["list", "--query", "consultationType=In+Clinic&sortBy=fees"]),
    );

    assert_eq!(
        order(&output, &ALL),
        ["Aarti Singh", "Deepa Shah", "Amit Roy"]
    );
}

#[test]
fn flags_override_query() {
    let env = setup();
    let output = stdout_of(docfind(&env).args([
        "list",
        "--query",
        "sortBy=fees&search=aa",
        "--sort",
        "none",
    ]));

    assert_eq!(order(&output, &ALL), ["Aarav Shah", "Aarti Singh"]);
    assert!(output.contains("URL: http://localhost:3000/?search=aa\n"));
}

#[test]
fn no_match_prints_empty_message() {
    let env = setup();
    docfind(&env)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 doctors"))
        .stdout(predicate::str::contains("No doctors found matching your criteria"));
}

#[test]
fn unknown_speciality_is_warned_about() {
    let env = setup();
    docfind(&env)
        .args(["list", "-p", "Astrologer"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown speciality: Astrologer"))
        .stdout(predicate::str::contains("Found 0 doctors"));
}

#[test]
fn suggest_returns_matching_names() {
    let env = setup();
    docfind(&env)
        .args(["suggest", "aar"])
        .assert()
        .success()
        .stdout("  1. Aarav Shah\n  2. Aarti Singh\n");
}

#[test]
fn suggest_caps_at_three() {
    let env = setup();
    let output = stdout_of(docfind(&env).args(["suggest", "a"]));
    assert_eq!(output.lines().count(), 3);
    assert!(!output.contains("Deepa Shah"));
}

#[test]
fn suggest_blank_text_is_empty() {
    let env = setup();
    docfind(&env)
        .args(["suggest", "  "])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn specialities_in_first_seen_order() {
    let env = setup();
    docfind(&env)
        .args(["specialities", "--query", "specialities=Dentist"])
        .assert()
        .success()
        .stdout("  [x] Dentist\n  [ ] Cardiologist\n  [ ] Dermatologist\n");
}

#[test]
fn malformed_payload_shows_error_panel() {
    let env = setup();
    fs::write(&env.source, r#"{"error": "maintenance"}"#).unwrap();

    docfind(&env)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error loading doctors"))
        .stderr(predicate::str::contains("Invalid data format received"));
}

#[test]
fn missing_source_file_fails() {
    let env = setup();
    fs::remove_file(&env.source).unwrap();

    docfind(&env)
        .args(["suggest", "aa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading doctors"));
}

#[test]
fn browse_walks_the_search_box() {
    let env = setup();
    let output = stdout_of(
        docfind(&env)
            .arg("browse")
            .write_stdin("type aa\npick 2\nurl\nquit\n"),
    );

    assert!(output.contains("  1. Aarav Shah\n  2. Aarti Singh\n"));
    assert!(output.contains("Found 1 doctors"));
    assert!(output.contains("URL: http://localhost:3000/?search=Aarti+Singh\n"));
}

#[test]
fn browse_applies_filter_commands() {
    let env = setup();
    let output = stdout_of(
        docfind(&env)
            .arg("browse")
            .write_stdin("consult clinic\nspec Dermatologist\nsort experience\n"),
    );

    assert!(output.ends_with(
        "URL: http://localhost:3000/?consultationType=In+Clinic&specialities=Dermatologist&sortBy=experience\n"
    ));
    let last = output.rsplit("Found").next().unwrap();
    assert_eq!(order(last, &ALL), ["Amit Roy", "Deepa Shah"]);
}

#[test]
fn browse_reports_bad_commands_and_continues() {
    let env = setup();
    docfind(&env)
        .arg("browse")
        .write_stdin("dance\nspec Astrologer\nreset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: dance"))
        .stdout(predicate::str::contains("Unknown speciality: Astrologer"))
        .stdout(predicate::str::contains("Found 4 doctors"));
}

#[test]
fn browse_survives_a_failed_load() {
    let env = setup();
    fs::write(&env.source, "[1, 2").unwrap();

    docfind(&env)
        .arg("browse")
        .write_stdin("show\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading doctors"))
        .stdout(predicate::str::contains("Error loading doctors"));
}

#[test]
fn config_set_and_get() {
    let env = setup();
    let config_dir = env.dir.path().join("config");

    Command::cargo_bin("docfind")
        .unwrap()
        .env("DOCFIND_CONFIG_DIR", &config_dir)
        .args(["config", "page-url", "https://doctors.example.com/find"])
        .assert()
        .success()
        .stderr(predicate::str::contains("page-url set to"));

    assert!(config_dir.join("config.json").exists());

    Command::cargo_bin("docfind")
        .unwrap()
        .env("DOCFIND_CONFIG_DIR", &config_dir)
        .args(["config", "page-url"])
        .assert()
        .success()
        .stdout("page-url = https://doctors.example.com/find\n");

    docfind(&env)
        .args(["list", "--sort", "fees"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "URL: https://doctors.example.com/find?sortBy=fees",
        ));
}

#[test]
fn config_rejects_unknown_key() {
    let env = setup();
    Command::cargo_bin("docfind")
        .unwrap()
        .env("DOCFIND_CONFIG_DIR", env.dir.path().join("config"))
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn config_source_is_used_when_no_flag_given() {
    let env = setup();
    let config_dir = env.dir.path().join("config");

    Command::cargo_bin("docfind")
        .unwrap()
        .env("DOCFIND_CONFIG_DIR", &config_dir)
        .args(["config", "source"])
        .arg(&env.source)
        .assert()
        .success();

    Command::cargo_bin("docfind")
        .unwrap()
        .env("DOCFIND_CONFIG_DIR", &config_dir)
        .args(["suggest", "deep"])
        .assert()
        .success()
        .stdout("  1. Deepa Shah\n");
}
