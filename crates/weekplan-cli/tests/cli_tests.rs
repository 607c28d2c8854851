use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command pointed at a data directory
fn wp_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_cli_name_add_and_list() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir)
        .args(["name", "add", "Run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Run' to the catalog."));

    wp_cmd(&data_dir)
        .args(["name", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Run"));
}

#[test]
fn test_cli_name_list_empty() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir)
        .args(["name", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task names in the catalog."));
}

#[test]
fn test_cli_duplicate_name_fails() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();

    wp_cmd(&data_dir)
        .args(["name", "add", "Run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the catalog"));
}

#[test]
fn test_cli_task_add_requires_catalog_name() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not in the catalog"));
}

#[test]
fn test_cli_task_add_and_list() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();

    wp_cmd(&data_dir)
        .args([
            "task",
            "add",
            "monday",
            "08:00",
            "Run",
            "--priority",
            "3",
            "--description",
            "around the park",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled on Monday"))
        .stdout(predicate::str::contains("08:00 [ ] Run (priority 3)"));

    wp_cmd(&data_dir)
        .args(["task", "list", "monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Monday"))
        .stdout(predicate::str::contains("around the park"));
}

#[test]
fn test_cli_occupied_slot_fails() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();
    wp_cmd(&data_dir).args(["name", "add", "Swim"]).assert().success();
    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Run"])
        .assert()
        .success();

    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Swim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already occupied"));
}

#[test]
fn test_cli_invalid_time_fails() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();

    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "8am", "Run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_cli_done_and_points_flow() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();
    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Run"])
        .assert()
        .success();

    wp_cmd(&data_dir)
        .args(["points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 point(s) earned, 1 task(s) scheduled"));

    wp_cmd(&data_dir)
        .args(["task", "edit", "monday", "08:00", "--done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00 [x] Run"));

    wp_cmd(&data_dir)
        .args(["points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 point(s) earned, 1 task(s) scheduled"));
}

#[test]
fn test_cli_delete_twice_fails() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();
    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Run"])
        .assert()
        .success();

    wp_cmd(&data_dir)
        .args(["task", "delete", "monday", "08:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted from Monday"));

    wp_cmd(&data_dir)
        .args(["task", "delete", "monday", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No task scheduled"));
}

#[test]
fn test_cli_name_remove_cleans_planner() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir).args(["name", "add", "Run"]).assert().success();
    wp_cmd(&data_dir).args(["name", "add", "Swim"]).assert().success();
    wp_cmd(&data_dir)
        .args(["task", "add", "monday", "08:00", "Run"])
        .assert()
        .success();
    wp_cmd(&data_dir)
        .args(["task", "add", "tuesday", "09:00", "Swim"])
        .assert()
        .success();

    wp_cmd(&data_dir)
        .args(["name", "remove", "Swim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Swim' from the catalog."))
        .stdout(predicate::str::contains("Cleaned 1 scheduled task(s)"));

    wp_cmd(&data_dir)
        .args(["task", "list", "tuesday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks scheduled."));
}

#[test]
fn test_cli_default_command_lists_week() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks scheduled this week."));
}

#[test]
fn test_cli_corrupt_planner_is_startup_fatal() {
    let data_dir = create_cli_test_environment();
    std::fs::write(data_dir.path().join("planner.json"), "not json")
        .expect("Failed to seed corrupt document");

    wp_cmd(&data_dir)
        .args(["points"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt planner document"));
}

#[test]
fn test_cli_weekday_parse_error() {
    let data_dir = create_cli_test_environment();

    wp_cmd(&data_dir)
        .args(["task", "list", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weekday"));
}
