//! Analysis window: the clamped [start, end) range results are reported over.

use crate::models::observation::Observation;
use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AnalysisWindow {
    /// Clamp the caller-supplied bounds against the observation list.
    ///
    /// `start` is the later of the lower bound and the first record.
    /// `end` is the earlier of the upper bound (defaulting to `now`) and,
    /// when the log closes with a Stopping record, that record's timestamp;
    /// a log still open at its tail runs to `now` instead.
    ///
    /// Computed once per analysis run; returns None when there are no
    /// observations to clamp against.
    pub fn compute(
        observations: &[Observation],
        lower: Option<NaiveDateTime>,
        upper: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Option<AnalysisWindow> {
        let first = observations.first()?;
        let last = observations.last()?;

        let start = match lower {
            Some(bound) => bound.max(first.timestamp),
            None => first.timestamp,
        };

        let cap = upper.unwrap_or(now);
        let end = if last.marker.is_stopping() {
            cap.min(last.timestamp)
        } else {
            cap.min(now)
        };

        Some(AnalysisWindow { start, end })
    }

    pub fn all_time(&self) -> TimeDelta {
        self.end - self.start
    }
}
