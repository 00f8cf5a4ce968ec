// src/lib.rs
//! Scraper for the published Kerala COVID-19 patient sheet.
//!
//! [`specs::patients`] turns the sheet's table rows into [`Patient`] records;
//! [`scrape`] wires fetching and extraction together; [`file`] exports.

pub mod config;
pub mod core;
pub mod error;
pub mod patient;
pub mod specs;
pub mod window;

pub mod csv;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::ScrapeError;
pub use patient::{Field, Patient};
pub use window::RowWindow;
