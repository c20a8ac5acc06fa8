//! # Solar Panel Data Event Extractor
//!
//! Flattens a record's per-parameter events into export rows: a single
//! `Events` header followed by one row per event holding only its value.
//!
//! Parameters are visited in ascending id order and events in stored
//! order. The first event with fewer than two fields or an empty value
//! aborts extraction and no rows are returned.

use crate::data::SolarPanelData;
use crate::errors::{SolarPanelDataError, SolarPanelDataResult};

/// Header cell of the export
pub const EVENTS_HEADER: &str = "Events";

/// Fields a well-formed event carries: timestamp and value
pub const EVENT_MIN_FIELDS: usize = 2;

/// Stateless extractor for CSV-shaped event rows
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarPanelDataEventExtractor;

impl SolarPanelDataEventExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Export rows for `data`, header first
    pub fn extract_events(&self, data: &SolarPanelData) -> SolarPanelDataResult<Vec<Vec<String>>> {
        let mut rows = vec![vec![EVENTS_HEADER.to_string()]];

        let Some(solar) = &data.solar else {
            return Ok(rows);
        };

        for (parameter_id, events) in solar {
            for event in events {
                match event.get(EVENT_MIN_FIELDS - 1) {
                    Some(value) if !value.is_empty() => {
                        rows.push(vec![value.clone()]);
                    }
                    _ => return Err(SolarPanelDataError::malformed_event_data(parameter_id)),
                }
            }
        }

        Ok(rows)
    }

    /// Render rows as CSV text
    pub fn to_csv(&self, rows: &[Vec<String>]) -> SolarPanelDataResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| SolarPanelDataError::Internal(format!("Failed to write csv row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SolarPanelDataError::Internal(format!("Failed to flush csv: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| SolarPanelDataError::Internal(format!("Invalid csv output: {}", e)))
    }
}
