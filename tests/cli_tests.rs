use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG_KEYS: &[&str] = &[
    "NOTION_TOKEN",
    "NOTION_DATABASE_ID",
    "DATABASE_ID",
    "YOUTUBE_API_KEY",
    "YOUTUBE_CHANNEL_IDS",
    "TIKTOK_USERS",
    "RSS_FEEDS",
    "DEDUP_WINDOW",
    "NOTION_TITLE_PROPERTY",
    "NOTION_URL_PROPERTIES",
];

fn harvester_cmd() -> Command {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    for key in CONFIG_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_help_lists_commands() {
    harvester_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("sources"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_run_help_shows_dry_run_flag() {
    harvester_cmd()
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_missing_token_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTION_TOKEN"));
}

#[test]
fn test_missing_database_id_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTION_DATABASE_ID"));
}

#[test]
fn test_database_id_alias_is_accepted() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("DATABASE_ID", "test-db")
        .assert()
        .success();
}

#[test]
fn test_sources_with_nothing_configured() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sources configured."));
}

#[test]
fn test_sources_lists_configured_identifiers() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .env("RSS_FEEDS", "https://example.com/feed.xml")
        .env("TIKTOK_USERS", "someuser")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/feed.xml"))
        .stdout(predicate::str::contains("@someuser"));
}

#[test]
fn test_run_dry_run_with_no_sources_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("run")
        .arg("--dry-run")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found total 0 items."))
        .stdout(predicate::str::contains("Dry run complete."));
}

#[test]
fn test_run_with_no_sources_reports_empty_summary() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("run")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 0 records"));
}

#[test]
fn test_invalid_dedup_window_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .env("DEDUP_WINDOW", "lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DEDUP_WINDOW"));
}

#[test]
fn test_invalid_url_properties_mapping_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    harvester_cmd()
        .arg("sources")
        .current_dir(temp_dir.path())
        .env("NOTION_TOKEN", "test-token")
        .env("NOTION_DATABASE_ID", "test-db")
        .env("NOTION_URL_PROPERTIES", "youtube")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTION_URL_PROPERTIES"));
}
