use crate::core::aggregator::{self, ConnectivityTotals};
use crate::core::window::AnalysisWindow;
use crate::models::observation::Observation;
use chrono::NaiveDateTime;

/// Result of one analysis run, ready for rendering.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub window: AnalysisWindow,
    pub totals: ConnectivityTotals,
    pub entry_count: usize,
}

pub struct Core;

impl Core {
    /// Run window clamping and aggregation on an already-parsed
    /// observation list. Returns None when there is nothing to analyze.
    ///
    /// `now` is a parameter rather than a clock read, so repeated runs
    /// over the same inputs are reproducible.
    pub fn analyze(
        observations: &[Observation],
        lower: Option<NaiveDateTime>,
        upper: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Option<Analysis> {
        let window = AnalysisWindow::compute(observations, lower, upper, now)?;
        let totals = aggregator::aggregate(observations, window.start);

        Some(Analysis {
            window,
            totals,
            entry_count: observations.len(),
        })
    }
}
