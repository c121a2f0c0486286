//! Adaptive display unit for report durations.

use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Mins,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// Pick the unit that keeps displayed magnitudes readable for a window
    /// of the given length. Thresholds are strict: a window of exactly
    /// three hours already reports in hours.
    pub fn select(all_time: TimeDelta) -> TimeUnit {
        if all_time < TimeDelta::hours(3) {
            TimeUnit::Mins
        } else if all_time < TimeDelta::days(3) {
            TimeUnit::Hours
        } else if all_time < TimeDelta::days(90) {
            TimeUnit::Days
        } else if all_time < TimeDelta::days(730) {
            TimeUnit::Months
        } else {
            TimeUnit::Years
        }
    }

    /// Row label in the report tables.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Mins => "Mins",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
            TimeUnit::Months => "Months",
            TimeUnit::Years => "Years",
        }
    }

    /// Milliseconds per displayed unit. Months and years use the civil
    /// averages of 30.4375 and 365.25 days.
    fn divisor_ms(&self) -> f64 {
        const MINUTE: f64 = 60_000.0;
        const HOUR: f64 = 60.0 * MINUTE;
        const DAY: f64 = 24.0 * HOUR;

        match self {
            TimeUnit::Mins => MINUTE,
            TimeUnit::Hours => HOUR,
            TimeUnit::Days => DAY,
            TimeUnit::Months => 30.4375 * DAY,
            TimeUnit::Years => 365.25 * DAY,
        }
    }

    /// Scale a duration into this unit.
    pub fn scale(&self, d: TimeDelta) -> f64 {
        d.num_milliseconds() as f64 / self.divisor_ms()
    }
}
