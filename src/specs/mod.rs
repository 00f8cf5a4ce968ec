//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the data lives in the HTML* and *how to turn
//! it into records*. A spec parses an already fetched page; it does not fetch,
//! cache or export.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_patients → core::net::http_get (or saved file)
//!                               ↘ specs::patients::PatientSheet::parse
//!                               ↘ specs::patients::extract (lazy records)
//!     → file::export_patients
//! ```
//!
//! ## Conventions
//! - Selectors come from `ScrapeOptions` so a layout change on the sheet is a
//!   flag, not a code change.
//! - Column shapes are fixed per page and documented in the spec module.
//! - Specs are testable offline against saved pages (`tests/fixtures`).
pub mod patients;
