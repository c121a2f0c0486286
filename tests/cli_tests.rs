use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{empty_dir, ila, write_log};

#[test]
fn help_exits_with_usage_code() {
    ila()
        .arg("--help")
        .assert()
        .code(1)
        .stdout(contains("Usage"));
}

#[test]
fn unknown_flag_exits_with_usage_code() {
    ila().arg("--frobnicate").assert().code(1);
}

#[test]
fn missing_file_exits_with_io_code() {
    ila()
        .arg("/definitely/not/here/iNetLog.csv")
        .assert()
        .code(3)
        .stderr(contains("I/O error"));
}

#[test]
fn malformed_date_range_exits_with_parse_code() {
    let log = write_log("bad_range", &["08/02/2017 10:00:00,1,1,1"]);

    ila().args(["-d", "nonsense", &log]).assert().code(3);

    ila()
        .args(["-d", "08/40/2017-08/06/2017", &log])
        .assert()
        .code(3)
        .stderr(contains("Invalid date format"));
}

#[test]
fn analyzes_log_and_prints_report() {
    let log = write_log(
        "report_smoke",
        &[
            "Timestamp,Connected to Local,Connected to Internet,Program Status (1-starting 0-normal -1-stopping)",
            "08/02/2017 10:00:00,1,1,1",
            "08/02/2017 11:00:00,1,0,0",
            "08/02/2017 12:00:00,1,1,-1",
        ],
    );

    ila().arg(&log).assert().success().stdout(
        contains("Internet Statistics from 08/02/2017 10:00:00 to 08/02/2017 12:00:00:")
            .and(contains("Total Time: value(inverse)"))
            .and(contains("Logged Time: value(inverse)"))
            .and(contains(" 50.0%( 50.0%)")),
    );
}

#[test]
fn verbose_prints_entry_count() {
    let log = write_log(
        "verbose",
        &[
            "08/02/2017 10:00:00,1,1,1",
            "08/02/2017 11:00:00,1,0,0",
            "08/02/2017 12:00:00,1,1,-1",
        ],
    );

    ila()
        .args(["-v", &log])
        .assert()
        .success()
        .stdout(contains("Creating analysis from 3 Internet connection entries."));
}

#[test]
fn corrupted_lines_do_not_change_the_report() {
    let clean = write_log(
        "tolerance_clean",
        &[
            "08/02/2017 10:00:00,1,1,1",
            "08/02/2017 11:00:00,1,0,0",
            "08/02/2017 12:00:00,1,1,-1",
        ],
    );
    let dirty = write_log(
        "tolerance_dirty",
        &[
            "08/02/2017 10:00:00,1,1,1",
            "##### corrupted #####",
            "08/02/2017 11:00:00,1,0,0",
            "08/02/2017 11:30",
            "08/02/2017 12:00:00,1,1,-1",
        ],
    );

    let clean_out = ila().arg(&clean).assert().success().get_output().stdout.clone();
    let dirty_out = ila().arg(&dirty).assert().success().get_output().stdout.clone();

    assert_eq!(clean_out, dirty_out);
}

#[test]
fn date_range_narrows_the_window() {
    let log = write_log(
        "range",
        &[
            "08/02/2017 10:00:00,1,1,1",
            "08/04/2017 10:00:00,1,1,-1",
        ],
    );

    ila()
        .args(["-d", "08/03/2017-08/10/2017", &log])
        .assert()
        .success()
        .stdout(contains(
            "Internet Statistics from 08/03/2017 00:00:00 to 08/04/2017 10:00:00:",
        ));
}

#[test]
fn upper_bound_before_the_log_reports_not_enough_entries() {
    let log = write_log(
        "degenerate",
        &[
            "08/02/2017 10:00:00,1,1,1",
            "08/02/2017 12:00:00,1,1,-1",
        ],
    );

    ila()
        .args(["-d", "08/01/2017-08/02/2017", &log])
        .assert()
        .success()
        .stdout(contains("Not enough entries to analyze"));
}

#[test]
fn log_without_valid_entries_is_not_a_failure() {
    let log = write_log("no_entries", &["garbage", "more garbage,1,1"]);

    ila()
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("No valid Internet log entries found."));
}

#[test]
fn default_file_is_assumed_with_a_warning() {
    let dir = empty_dir("default_file");

    ila()
        .current_dir(&dir)
        .assert()
        .code(3)
        .stdout(contains("No file to analyze provided. Assuming default 'iNetLog.csv'"));
}
