//! Render an analysis window and its totals as the two-table uptime report.

use crate::core::aggregator::ConnectivityTotals;
use crate::core::window::AnalysisWindow;
use crate::report::unit::TimeUnit;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_timestamp;
use chrono::TimeDelta;

/// Share of `whole` covered by `part`, in percent. A zero-length whole
/// yields 0 rather than a NaN cell.
pub fn pct(part: TimeDelta, whole: TimeDelta) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    100.0 * part.num_milliseconds() as f64 / whole.num_milliseconds() as f64
}

/// Complementary percentage. pct is a percentage 0-100.
pub fn inv_pct(pct: f64) -> f64 {
    100.0 - pct
}

fn time_cell(unit: TimeUnit, value: TimeDelta, inverse: TimeDelta) -> String {
    format!("{:5.1}({:5.1})", unit.scale(value), unit.scale(inverse))
}

fn pct_cell(p: f64) -> String {
    format!("{:5.1}%({:5.1}%)", p, inv_pct(p))
}

fn stats_table(heading: &str, rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new(vec![
        Column {
            header: String::new(),
            width: 7,
        },
        Column {
            header: "Logged:".to_string(),
            width: 18,
        },
        Column {
            header: "Local Connected:".to_string(),
            width: 24,
        },
        Column {
            header: "Internet Connected:".to_string(),
            width: 19,
        },
    ]);

    for row in rows {
        table.add_row(row);
    }

    format!("{}\n{}", heading, table.render())
}

/// Produce the full report text, or the single not-enough-data line when
/// the window is empty or inverted.
pub fn render(window: &AnalysisWindow, totals: &ConnectivityTotals) -> String {
    let all_time = window.all_time();

    if all_time <= TimeDelta::zero() {
        return "Not enough entries to analyze".to_string();
    }

    let unit = TimeUnit::select(all_time);

    let logged_pct_all = pct(totals.logged, all_time);
    let local_pct_all = inv_pct(pct(totals.local_down, all_time));
    let internet_pct_all = inv_pct(pct(totals.internet_down, all_time));

    // "Of the time we were actually watching, how much was each channel up"
    let local_pct_logged = inv_pct(pct(totals.local_down, totals.logged));
    let internet_pct_logged = inv_pct(pct(totals.internet_down, totals.logged));

    let start = format_timestamp(window.start);
    let end = format_timestamp(window.end);

    let total_table = stats_table(
        "Total Time: value(inverse)",
        vec![
            vec![
                unit.label().to_string(),
                time_cell(unit, totals.logged, all_time - totals.logged),
                time_cell(unit, all_time - totals.local_down, totals.local_down),
                time_cell(unit, all_time - totals.internet_down, totals.internet_down),
            ],
            vec![
                "Pct".to_string(),
                pct_cell(logged_pct_all),
                pct_cell(local_pct_all),
                pct_cell(internet_pct_all),
            ],
        ],
    );

    let logged_table = stats_table(
        "Logged Time: value(inverse)",
        vec![vec![
            "Pct".to_string(),
            pct_cell(100.0),
            pct_cell(local_pct_logged),
            pct_cell(internet_pct_logged),
        ]],
    );

    let mut out = String::new();
    out.push_str(&format!("Internet Statistics from {start} to {end}:\n\n"));
    out.push_str(&format!(
        "Logged {logged_pct_all:.1}% of time between {start} and {end}\n\n"
    ));
    out.push_str(&total_table);
    out.push('\n');
    out.push_str(&logged_table);

    while out.ends_with('\n') {
        out.pop();
    }
    out
}
