//! Log file access: read a connection log line by line into observations.

use crate::errors::AppResult;
use crate::models::observation::Observation;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Collect every decodable record, in file order.
///
/// Undecodable lines (corruption, a partial trailing write, the optional
/// column header) are dropped; a damaged line must not abort analysis of
/// the rest of the log.
pub fn read_observations<R: BufRead>(reader: R) -> AppResult<Vec<Observation>> {
    let mut observations = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Ok(obs) = Observation::parse(&line) {
            observations.push(obs);
        }
    }

    Ok(observations)
}

pub fn load_log<P: AsRef<Path>>(path: P) -> AppResult<Vec<Observation>> {
    let file = File::open(path)?;
    read_observations(BufReader::new(file))
}
