// src/specs/patients.rs
//! Scraping *spec* for the "Patient Data" tab.
//!
//! Page shape:
//! - First sheet tab is `<div id="0">`; patient rows are the `tr` elements with
//!   the sheet's fixed rendered height (`style="height:20px;"`).
//! - Columns follow [`COLUMN_LAYOUT`]: 22 schema fields plus an empty spacer as
//!   the third column.
//! - The first row whose patient number cell is blank marks the end of data;
//!   the sheet keeps empty formatted rows below it.
//!
//! Extraction is lazy: [`PatientRows`] converts one row per `next()` call.

use scraper::Html;
use tracing::{debug, info};

use crate::config::options::ScrapeOptions;
use crate::core::html::{self, Row};
use crate::core::sanitize::{is_blank, normalize_cell};
use crate::error::ScrapeError;
use crate::patient::{COLUMN_LAYOUT, Column, Field, Patient};
use crate::window::RowWindow;

/// Cell text of every patient-table row on the page, window not yet applied.
pub struct PatientSheet {
    pub rows: Vec<Row>,
}

impl PatientSheet {
    /// Select the patient rows from a page using the configured selectors.
    pub fn parse(page: &str, opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let doc = Html::parse_document(page);
        let rows = html::select_rows(&doc, &opts.container, &opts.row_selector)?;
        if rows.is_empty() {
            tracing::warn!(
                container = %opts.container,
                rows = %opts.row_selector,
                "no patient rows matched"
            );
        }
        Ok(Self { rows })
    }

    pub fn patients(&self, window: RowWindow) -> PatientRows<'_> {
        extract(&self.rows, window)
    }
}

/// Lazy row → [`Patient`] conversion over a window of `rows`.
pub fn extract(rows: &[Row], window: RowWindow) -> PatientRows<'_> {
    let range = window.range(rows.len());
    PatientRows {
        selected: range.len(),
        rows: rows[range].iter(),
        total: rows.len(),
        emitted: 0,
        done: false,
    }
}

/// Iterator returned by [`extract`]. Fused: once it ends it stays ended.
pub struct PatientRows<'a> {
    rows: std::slice::Iter<'a, Row>,
    selected: usize,
    total: usize,
    emitted: usize,
    done: bool,
}

impl PatientRows<'_> {
    /// Records produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Rows inside the window.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Rows available in the whole table.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for PatientRows<'_> {
    type Item = Patient;

    fn next(&mut self) -> Option<Patient> {
        if self.done {
            return None;
        }

        let Some(row) = self.rows.next() else {
            self.done = true;
            info!("Scraped {} / {} patient rows.", self.emitted, self.total);
            return None;
        };

        // Whitespace-only counts as blank, same as a missing cell.
        if is_blank(row.first().map(String::as_str)) {
            self.done = true;
            debug!(after = self.emitted, "blank patient number, end of data");
            return None;
        }

        let patient = row_to_patient(row);
        self.emitted += 1;
        debug!(
            patient_number = patient.get(Field::PatientNumber).unwrap_or_default(),
            fields = patient.populated(),
            "patient row"
        );
        Some(patient)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { (0, Some(self.rows.len())) }
    }
}

impl std::iter::FusedIterator for PatientRows<'_> {}

/// Fill a record from one row. Stops at the end of a short row.
fn row_to_patient(row: &Row) -> Patient {
    let mut patient = Patient::new();
    for (col, content) in COLUMN_LAYOUT.iter().enumerate() {
        let Column::Field(field) = *content else { continue };
        let Some(cell) = row.get(col) else { break };
        patient.set(field, normalize_cell(cell));
    }
    patient
}
