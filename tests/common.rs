#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ila() -> Command {
    cargo_bin_cmd!("inetlog-analyzer")
}

/// Write a log fixture inside the system temp dir, replacing any leftover
/// file from a previous run.
pub fn write_log(name: &str, lines: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inetlog.csv", name));

    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    fs::write(&log_path, lines.join("\n")).expect("write log fixture");

    log_path
}

/// Create an empty working directory inside the system temp dir.
pub fn empty_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inetlog_dir", name));

    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");

    path
}
