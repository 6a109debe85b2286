use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rbs, setup_data_dir};

#[test]
fn test_stats_all_months_chicago() {
    let dir = setup_data_dir("stats_all_chicago");

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "chicago",
        ])
        .assert()
        .success()
        .stdout(contains("Chicago: 4 trips"))
        .stdout(contains("Most Popular Month:"))
        .stdout(contains("January"))
        .stdout(contains("Canal St"))
        .stdout(contains("Subscriber"))
        .stdout(contains("This took"));
}

#[test]
fn test_stats_month_filter_prints_note() {
    let dir = setup_data_dir("stats_month_note");

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "chicago",
            "--month",
            "June",
        ])
        .assert()
        .success()
        .stdout(contains("Chicago: 2 trips"))
        .stdout(contains("is not shown due to your month filtering selection of: June"))
        .stdout(contains("Most Popular Month:").not());
}

#[test]
fn test_stats_washington_has_no_demographics() {
    let dir = setup_data_dir("stats_washington");

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "washington",
        ])
        .assert()
        .success()
        .stdout(contains("There is no gender or date of birth data"))
        .stdout(contains("Earliest birth year").not());
}

#[test]
fn test_stats_empty_selection_reports_no_data() {
    let dir = setup_data_dir("stats_empty");

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "new-york-city",
            "--month",
            "december",
        ])
        .assert()
        .success()
        .stdout(contains("0 trips"))
        .stdout(contains("no data"));
}

#[test]
fn test_stats_json_report() {
    let dir = setup_data_dir("stats_json");

    let output = rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "chicago",
            "--day",
            "monday",
            "--json",
        ])
        .output()
        .expect("run stats --json");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(v["city"], "Chicago");
    assert_eq!(v["trips"], 3);
    assert_eq!(v["popular_day"]["value"], "Monday");
    assert_eq!(v["popular_day"]["fixed_by_selector"], true);
    assert_eq!(v["popular_month"]["value"], "January");
    assert_eq!(v["total_duration_seconds"], 1801);
    assert_eq!(v["mean_duration_seconds"], 600);
    assert_eq!(v["demographics"]["earliest_birth_year"], 1980);
}

#[test]
fn test_stats_invalid_selector_fails() {
    let dir = setup_data_dir("stats_invalid_selector");

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "chicago",
            "--month",
            "Smarch",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid selector"));
}

#[test]
fn test_stats_missing_dataset_fails() {
    let dir = std::env::temp_dir().join("rbikeshare_missing_dataset_dir");
    std::fs::remove_dir_all(&dir).ok();

    rbs()
        .args([
            "--data-dir",
            &dir.to_string_lossy(),
            "stats",
            "--city",
            "washington",
        ])
        .assert()
        .failure()
        .stderr(contains("washington.csv"));
}

#[test]
fn test_explore_with_scripted_input() {
    let dir = setup_data_dir("explore_scripted");

    rbs()
        .args(["--data-dir", &dir.to_string_lossy(), "explore"])
        .write_stdin("denver\nwashington\nall\nwednesday\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("That's not a valid response!"))
        .stdout(contains("\"Washington\" it will be!"))
        .stdout(contains("day filtering selection of: Wednesday"))
        .stdout(contains("Union Station / Capitol Hill"))
        .stdout(contains("now exiting the program"));
}

#[test]
fn test_explore_is_default_command() {
    let dir = setup_data_dir("explore_default");

    rbs()
        .args(["--data-dir", &dir.to_string_lossy()])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Calculating User Stats..."));
}

#[test]
fn test_explore_stops_on_closed_input() {
    let dir = setup_data_dir("explore_eof");

    rbs()
        .args(["--data-dir", &dir.to_string_lossy(), "explore"])
        .write_stdin("chicago\n")
        .assert()
        .failure()
        .stderr(contains("Input closed"));
}

#[test]
fn test_config_check_reports_datasets() {
    let dir = setup_data_dir("config_check");
    std::fs::remove_file(dir.join("washington.csv")).ok();

    rbs()
        .args(["--data-dir", &dir.to_string_lossy(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("chicago.csv"))
        .stderr(contains("missing"))
        .stdout(contains("1 dataset(s) not found"));
}

#[test]
fn test_config_print_shows_effective_yaml() {
    let dir = setup_data_dir("config_print");

    rbs()
        .args(["--data-dir", &dir.to_string_lossy(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("rbikeshare_test_home"))
        .stdout(contains("data_dir:"))
        .stdout(contains("config_print_rbikeshare_data"))
        .stdout(contains("page_size: 5"))
        .stdout(contains("show_timing: true"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    rbs()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
}
