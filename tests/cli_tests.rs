use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{admin, init_roll_call, rc, setup_config, temp_path};

#[test]
fn test_init_seeds_default_roster() {
    let store = temp_path("cli_init", "csv");
    let config = temp_path("cli_init_config", "conf");

    rc().args(["--config", &config, "--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("2 attendees"));

    let content = fs::read_to_string(&store).expect("seeded store");
    assert!(content.starts_with("name,check_in,check_out,score"));
    assert!(content.contains("小明,,,0"));
    assert!(content.contains("小華,,,0"));
    // test mode leaves the config file alone
    assert!(!std::path::Path::new(&config).exists());
}

#[test]
fn test_init_writes_config_outside_test_mode() {
    let (config, store) = setup_config("cli_init_write", "offline", "csv");
    fs::remove_file(&config).ok();

    rc().args(["--config", &config, "--store", &store, "init", "--profile", "offline"])
        .assert()
        .success();

    let yaml = fs::read_to_string(&config).expect("config written");
    assert!(yaml.contains("profile: offline"));

    rc().args(["--config", &config, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_checkin_then_checkout_then_already_done() {
    let (config, store) = init_roll_call("cli_checkin_cycle");

    rc().args(["--config", &config, "checkin", "小明"])
        .assert()
        .success()
        .stdout(contains("小明 checked in at"));

    rc().args(["--config", &config, "checkin", "小明"])
        .assert()
        .success()
        .stdout(contains("小明 checked out at"));

    rc().args(["--config", &config, "checkin", "小明"])
        .assert()
        .success()
        .stdout(contains("already checked in and out"));

    let content = fs::read_to_string(&store).unwrap();
    let line = content
        .lines()
        .find(|l| l.starts_with("小明,"))
        .expect("row for 小明");
    let cells: Vec<&str> = line.split(',').collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[1].len(), 5, "check-in stamp is HH:MM");
    assert_eq!(cells[2].len(), 5, "check-out stamp is HH:MM");
    assert_eq!(cells[3], "0");
}

#[test]
fn test_checkin_unknown_name_changes_nothing() {
    let (config, store) = init_roll_call("cli_checkin_unknown");
    let before = fs::read(&store).unwrap();

    rc().args(["--config", &config, "checkin", "小李"])
        .assert()
        .success()
        .stderr(contains("not on the roster"));

    assert_eq!(fs::read(&store).unwrap(), before);
}

#[test]
fn test_offline_profile_checkin() {
    let (config, store) = setup_config("cli_offline", "offline", "csv");
    fs::write(&store, "email,name,check_in,mode\namy@example.com,Amy,,\n").unwrap();

    rc().args(["--config", &config, "checkin", "AMY@example.com"])
        .assert()
        .success()
        .stdout(contains("amy@example.com checked in at"));

    rc().args(["--config", &config, "checkin", "amy@example.com"])
        .assert()
        .success()
        .stdout(contains("no need to check in again"));

    let content = fs::read_to_string(&store).unwrap();
    assert!(content.starts_with("email,check_in,mode,name"));
    assert!(content.contains(",OFFLINE,Amy"));
}

#[test]
fn test_admin_requires_password() {
    let (config, _store) = init_roll_call("cli_admin_denied");

    rc().args(["--config", &config, "admin", "--password", "wrong", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn test_admin_score_three_times() {
    let (config, store) = init_roll_call("cli_admin_score");

    for _ in 0..3 {
        admin(&config, &["score", "小明"]).assert().success();
    }

    admin(&config, &["score", "小華", "--points", "-2"])
        .assert()
        .success()
        .stdout(contains("Removed 2 points"));

    let content = fs::read_to_string(&store).unwrap();
    assert!(content.contains("小明,,,15"));
    assert!(content.contains("小華,,,-2"));

    admin(&config, &["list"])
        .assert()
        .success()
        .stdout(contains("小明").and(contains("15")))
        .stdout(contains("2 attendees"));
}

#[test]
fn test_admin_score_unknown_attendee_fails() {
    let (config, _store) = init_roll_call("cli_admin_score_unknown");

    admin(&config, &["score", "nobody"])
        .assert()
        .failure()
        .stderr(contains("nobody"));
}

#[test]
fn test_admin_add_set_remove() {
    let (config, store) = init_roll_call("cli_admin_edit");

    admin(&config, &["add", "小李"]).assert().success();
    assert!(fs::read_to_string(&store).unwrap().contains("小李,,,0"));

    admin(&config, &["add", "小李"])
        .assert()
        .failure()
        .stderr(contains("already in the roster"));

    admin(&config, &["set", "小李", "--in", "08:30", "--score", "7"])
        .assert()
        .success();
    assert!(fs::read_to_string(&store).unwrap().contains("小李,08:30,,7"));

    admin(&config, &["set", "小華", "--out", "17:00"])
        .assert()
        .failure()
        .stderr(contains("before a check-in"));

    admin(&config, &["remove", "小李"]).assert().success();
    assert!(!fs::read_to_string(&store).unwrap().contains("小李"));
}

#[test]
fn test_admin_export_csv_has_bom() {
    let (config, _store) = init_roll_call("cli_export_csv");
    let out = temp_path("cli_export_csv_out", "csv");

    rc().args(["--config", &config, "checkin", "小華"])
        .assert()
        .success();

    admin(&config, &["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let bytes = fs::read(&out).expect("exported csv");
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.starts_with("name,check_in,check_out,score\n"));
    assert!(text.contains("小明,,,0"));
    assert!(text.contains("小華,"));
}

#[test]
fn test_admin_export_json() {
    let (config, _store) = init_roll_call("cli_export_json");
    let out = temp_path("cli_export_json_out", "json");

    admin(&config, &["score", "小明", "-n", "10"]).assert().success();
    admin(&config, &["export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json[0]["name"], "小明");
    assert_eq!(json[0]["score"], 10);
    assert!(json[0]["check_in"].is_null());
}

#[test]
fn test_admin_export_then_import_round_trip() {
    let (config, store) = init_roll_call("cli_export_import");
    let out = temp_path("cli_export_import_out", "csv");

    admin(&config, &["score", "小華"]).assert().success();
    admin(&config, &["export", "--file", &out]).assert().success();

    // admin edits the exported sheet and uploads it back
    let edited = fs::read_to_string(&out).unwrap() + "小李,,,\n";
    fs::write(&out, edited).unwrap();

    admin(&config, &["import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("3 attendees"));

    let content = fs::read_to_string(&store).unwrap();
    assert!(!content.starts_with('\u{feff}'));
    assert!(content.contains("小華,,,5"));
    assert!(content.contains("小李,,,0"));
}

#[test]
fn test_sheet_backend_cycle() {
    let (config, _store) = setup_config("cli_sheet", "roll-call", "sheet");

    rc().args(["--config", &config, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Seeded roster"));

    rc().args(["--config", &config, "checkin", "小華"])
        .assert()
        .success()
        .stdout(contains("checked in at"));

    admin(&config, &["list"])
        .assert()
        .success()
        .stdout(contains("checked in"))
        .stdout(contains("1 checked in"));
}

#[test]
fn test_admin_url() {
    let (config, _store) = init_roll_call("cli_url");

    admin(&config, &["url"])
        .assert()
        .success()
        .stdout(contains("https://checkin.example.org/"));
}

#[test]
fn test_sheet_backend_without_store_uses_sheet_default() {
    let home = std::env::temp_dir().join("cli_sheet_default_home_rollcall");
    fs::remove_dir_all(&home).ok();
    let app_dir = home.join(".rollcall");
    fs::create_dir_all(&app_dir).unwrap();
    // a CSV store left over from a csv-backed setup
    fs::write(app_dir.join("attendance_db.csv"), "name,check_in,check_out,score\n").unwrap();

    let config = app_dir.join("rollcall.conf");
    fs::write(&config, "backend: sheet\nadmin_password: letmein\n").unwrap();
    let config = config.to_string_lossy().to_string();

    rc().env("HOME", &home)
        .args(["--config", &config, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("attendance.sheet.sqlite"));

    rc().env("HOME", &home)
        .args(["--config", &config, "checkin", "小明"])
        .assert()
        .success()
        .stdout(contains("小明 checked in at"));

    assert!(app_dir.join("attendance.sheet.sqlite").exists());
    assert_eq!(
        fs::read_to_string(app_dir.join("attendance_db.csv")).unwrap(),
        "name,check_in,check_out,score\n"
    );
}

#[test]
fn test_offline_score_is_rejected() {
    let (config, store) = setup_config("cli_offline_score", "offline", "csv");
    fs::write(&store, "email,check_in,mode\namy@example.com,,\n").unwrap();

    admin(&config, &["score", "amy@example.com"])
        .assert()
        .failure()
        .stderr(contains("no score column"))
        .stdout(contains("Added").not());

    assert_eq!(
        fs::read_to_string(&store).unwrap(),
        "email,check_in,mode\namy@example.com,,\n"
    );
}

#[test]
fn test_set_mode_without_mode_column_is_rejected() {
    let (config, store) = init_roll_call("cli_set_mode");
    let before = fs::read_to_string(&store).unwrap();

    admin(&config, &["set", "小明", "--mode", "ONLINE"])
        .assert()
        .failure()
        .stderr(contains("no mode column"))
        .stdout(contains("Updated").not());

    assert_eq!(fs::read_to_string(&store).unwrap(), before);
}

#[test]
fn test_store_write_failure_aborts() {
    let (config, _store) = setup_config("cli_write_fail", "roll-call", "csv");
    let blocker = temp_path("cli_write_fail_blocker", "txt");
    fs::write(&blocker, "not a directory").unwrap();
    let store = format!("{blocker}/store.csv");

    rc().args(["--config", &config, "--store", &store, "checkin", "小明"])
        .assert()
        .failure()
        .stderr(contains("Error"))
        .stdout(contains("checked in").not());
}

#[test]
fn test_admin_export_xlsx() {
    let (config, _store) = init_roll_call("cli_export_xlsx");
    let out = temp_path("cli_export_xlsx_out", "xlsx");

    rc().args(["--config", &config, "checkin", "小明"])
        .assert()
        .success();

    admin(&config, &["export", "--format", "xlsx", "--file", &out, "--force"])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("exported xlsx");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_config_upgrade_keeps_command_line_store_out() {
    let (config, store) = setup_config("cli_upgrade", "roll-call", "csv");
    let other = temp_path("cli_upgrade_other", "csv");

    rc().args(["--config", &config, "--store", &other, "config", "--upgrade"])
        .assert()
        .success();

    let yaml = fs::read_to_string(&config).unwrap();
    assert!(yaml.contains(&store));
    assert!(!yaml.contains(&other));
    assert!(yaml.contains("seed:"));
}
