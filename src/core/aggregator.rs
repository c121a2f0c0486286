//! Single-pass session aggregation over an ordered observation list.

use crate::models::observation::Observation;
use crate::models::session_marker::SessionMarker;
use chrono::{NaiveDateTime, TimeDelta};

/// Durations accumulated from inter-observation gaps inside logging
/// sessions. Time where no session was open is invisible here: absence of
/// monitoring is not evidence of disconnection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectivityTotals {
    pub logged: TimeDelta,
    pub local_down: TimeDelta,
    pub internet_down: TimeDelta,
}

impl ConnectivityTotals {
    pub fn zero() -> Self {
        Self {
            logged: TimeDelta::zero(),
            local_down: TimeDelta::zero(),
            internet_down: TimeDelta::zero(),
        }
    }

    /// Charge one inter-observation gap. Connectivity is judged on the
    /// sample that opened the gap: its flags describe the condition that
    /// held during the just-elapsed interval. With no previous sample the
    /// gap counts as logged time only.
    fn attribute(&mut self, delta: TimeDelta, previous: Option<&Observation>) {
        if let Some(prev) = previous {
            if !prev.local_connected {
                self.local_down = self.local_down + delta;
            }
            if !prev.internet_connected {
                self.internet_down = self.internet_down + delta;
            }
        }
        self.logged = self.logged + delta;
    }
}

/// Fold the observation sequence into connectivity totals.
///
/// A session opens on a Starting marker, or on a Normal sample seen while
/// no session is in progress (a log that begins mid-stream). It closes only
/// on a Stopping marker. Opening transitions attribute nothing themselves;
/// every later gap inside the session is charged to the totals.
pub fn aggregate(observations: &[Observation], window_start: NaiveDateTime) -> ConnectivityTotals {
    let mut totals = ConnectivityTotals::zero();
    let mut logging = false;
    let mut previous: Option<&Observation> = None;
    let mut previous_time = window_start;

    for cur in observations {
        let delta = cur.timestamp - previous_time;

        match cur.marker {
            SessionMarker::Starting => logging = true,
            SessionMarker::Stopping => {
                totals.attribute(delta, previous);
                logging = false;
            }
            SessionMarker::Normal if logging => totals.attribute(delta, previous),
            SessionMarker::Normal => logging = true,
        }

        previous = Some(cur);
        previous_time = cur.timestamp;
    }

    totals
}
