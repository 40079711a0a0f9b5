#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_PASSWORD: &str = "letmein";

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Unique path inside the system temp dir; any leftover file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file for a test and return (config path, store path).
pub fn setup_config(name: &str, profile: &str, backend: &str) -> (String, String) {
    let ext = if backend == "sheet" { "sqlite" } else { "csv" };
    let store = temp_path(&format!("{name}_store"), ext);
    let config = temp_path(&format!("{name}_config"), "conf");

    let yaml = format!(
        "backend: {backend}\n\
         store: {store:?}\n\
         profile: {profile}\n\
         admin_password: {ADMIN_PASSWORD}\n\
         report_prefix: Test\n\
         app_url: https://checkin.example.org/\n"
    );
    fs::write(&config, yaml).expect("write test config");

    (config, store)
}

/// Config + store seeded through `init`.
pub fn init_roll_call(name: &str) -> (String, String) {
    let (config, store) = setup_config(name, "roll-call", "csv");
    rc().args(["--config", &config, "--test", "init"])
        .assert()
        .success();
    (config, store)
}

pub fn admin(config: &str, args: &[&str]) -> Command {
    let mut cmd = rc();
    cmd.args(["--config", config, "admin", "--password", ADMIN_PASSWORD]);
    cmd.args(args);
    cmd
}
