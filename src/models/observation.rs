use crate::errors::{AppError, AppResult};
use crate::models::session_marker::SessionMarker;
use crate::utils::time;
use chrono::NaiveDateTime;

/// One connectivity sample read from the connection log.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,  // ⇔ field 0 ("%m/%d/%Y %H:%M:%S")
    pub local_connected: bool,     // ⇔ field 1 ('1' | '0')
    pub internet_connected: bool,  // ⇔ field 2 ('1' | '0')
    pub marker: SessionMarker,     // ⇔ field 3 (1-starting 0-normal -1-stopping)
}

impl Observation {
    /// Decode a single CSV log line.
    ///
    /// The line must split into exactly four fields on ','; the record is
    /// rejected whole on any structural or field-level failure. No partial
    /// or defaulted observations ever come out of here.
    pub fn parse(line: &str) -> AppResult<Observation> {
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() != 4 {
            return Err(AppError::MalformedRecord(line.to_string()));
        }

        let timestamp = time::parse_timestamp(fields[0])
            .ok_or_else(|| AppError::MalformedRecord(line.to_string()))?;
        let local_connected =
            parse_flag(fields[1]).ok_or_else(|| AppError::MalformedRecord(line.to_string()))?;
        let internet_connected =
            parse_flag(fields[2]).ok_or_else(|| AppError::MalformedRecord(line.to_string()))?;
        let marker = fields[3]
            .parse::<i64>()
            .map(SessionMarker::from_code)
            .map_err(|_| AppError::MalformedRecord(line.to_string()))?;

        Ok(Observation {
            timestamp,
            local_connected,
            internet_connected,
            marker,
        })
    }

    /// Render this observation back to its log-line form.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            time::format_timestamp(self.timestamp),
            u8::from(self.local_connected),
            u8::from(self.internet_connected),
            self.marker.code()
        )
    }

    /// Column-description line a log writer may emit before the records.
    /// The reader never requires it; it falls out of parsing like any
    /// other undecodable line.
    pub fn csv_header() -> &'static str {
        "Timestamp,Connected to Local,Connected to Internet,Program Status (1-starting 0-normal -1-stopping)"
    }
}

/// Integer connectivity flag: the literal 1 means connected, any other
/// decodable integer means disconnected.
fn parse_flag(field: &str) -> Option<bool> {
    field.parse::<i64>().ok().map(|v| v == 1)
}
