//! Session route history
//!
//! The history is an explicit value owned by the caller. Route lookups never
//! append to it on their own; the caller decides what to record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::travel_time::{format_travel_time, minutes_from_f64};
use crate::value_objects::TravelMode;

/// One successful route lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Origin as typed by the user
    pub origin: String,
    /// Destination as typed by the user
    pub destination: String,
    /// Travel mode used
    pub mode: TravelMode,
    /// Route distance in kilometers
    pub distance_km: f64,
    /// Route duration in minutes
    pub duration_min: f64,
    /// When the route was computed
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// One-line summary, e.g. `"Lilongwe -> Blantyre (Car), 312.46 km, 4h 2m"`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} -> {} ({}), {:?} km, {}",
            self.origin,
            self.destination,
            self.mode,
            self.distance_km,
            format_travel_time(minutes_from_f64(self.duration_min))
        )
    }
}

/// Append-only list of the routes computed in one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteHistory {
    entries: Vec<HistoryEntry>,
}

impl RouteHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a route
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// At most `limit` entries, newest first
    ///
    /// Only limits what is returned; stored entries are never dropped.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export all entries as CSV with a header row
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Export` if serialization fails.
    pub fn to_csv(&self) -> Result<String, DomainError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.entries.is_empty() {
            writer
                .write_record(CSV_HEADER)
                .map_err(|e| DomainError::Export(e.to_string()))?;
        }
        for entry in &self.entries {
            writer
                .serialize(entry)
                .map_err(|e| DomainError::Export(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DomainError::Export(e.to_string()))
    }
}

const CSV_HEADER: [&str; 6] = [
    "origin",
    "destination",
    "mode",
    "distance_km",
    "duration_min",
    "created_at",
];

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn entry(origin: &str, destination: &str) -> HistoryEntry {
        HistoryEntry {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode: TravelMode::Car,
            distance_km: 312.46,
            duration_min: 242.0,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_push_and_len() {
        let mut history = RouteHistory::new();
        assert!(history.is_empty());
        history.push(entry("Lilongwe", "Blantyre"));
        history.push(entry("Zomba", "Mzuzu"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].origin, "Lilongwe");
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let mut history = RouteHistory::new();
        for i in 0..8 {
            history.push(entry(&format!("origin {i}"), "Blantyre"));
        }
        let recent: Vec<_> = history.recent(5).collect();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].origin, "origin 7");
        assert_eq!(recent[4].origin, "origin 3");
        // capping is display-only
        assert_eq!(history.len(), 8);
    }

    #[test]
    fn test_clear() {
        let mut history = RouteHistory::new();
        history.push(entry("Lilongwe", "Blantyre"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_summary_line() {
        let line = entry("Lilongwe", "Blantyre").summary_line();
        assert_eq!(line, "Lilongwe -> Blantyre (Car), 312.46 km, 4h 2m");
    }

    #[test]
    fn test_summary_line_whole_kilometres() {
        let mut whole = entry("Zomba", "Liwonde");
        whole.distance_km = 5.0;
        whole.duration_min = 45.0;
        assert_eq!(whole.summary_line(), "Zomba -> Liwonde (Car), 5.0 km, 45m");
    }

    #[test]
    fn test_to_csv() {
        let mut history = RouteHistory::new();
        history.push(entry("Lilongwe", "Blantyre, Malawi"));
        let csv = history.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "origin,destination,mode,distance_km,duration_min,created_at"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Lilongwe,\"Blantyre, Malawi\",car,312.46,242.0,"));
        assert!(row.contains("2026-03-01T08:30:00"));
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        let csv = RouteHistory::new().to_csv().unwrap();
        assert_eq!(
            csv.trim_end(),
            "origin,destination,mode,distance_km,duration_min,created_at"
        );
    }
}
