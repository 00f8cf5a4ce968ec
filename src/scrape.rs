// src/scrape.rs
use std::fs;

use tracing::info;

use crate::{
    config::options::{ScrapeOptions, Source},
    core::net,
    error::ScrapeError,
    patient::Patient,
    progress::Progress,
    specs::patients::PatientSheet,
};

/// Load the sheet page from the configured source.
pub fn load_page(source: &Source) -> Result<String, ScrapeError> {
    match source {
        Source::Url(url) => {
            info!(%url, "fetching patient sheet");
            net::http_get(url)
        }
        Source::File(path) => {
            info!(path = %path.display(), "reading saved patient sheet");
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// Fetch (or read) the page and collect the patients inside the row window.
pub fn collect_patients(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<Patient>, ScrapeError> {
    let page = load_page(&opts.source)?;
    parse_patients(&page, opts, progress)
}

/// Offline half of [`collect_patients`]: page HTML in, records out.
pub fn parse_patients(
    page: &str,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Patient>, ScrapeError> {
    let sheet = PatientSheet::parse(page, opts)?;
    let mut rows = sheet.patients(opts.window);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.selected());
        p.log(&format!(
            "{} of {} table rows in window {}..{}",
            rows.selected(),
            rows.total(),
            opts.window.start(),
            opts.window.end().map(|e| e.to_string()).unwrap_or_default(),
        ));
    }

    let mut out = Vec::with_capacity(rows.selected());
    for patient in rows.by_ref() {
        out.push(patient);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(out.len());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(rows.emitted());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Field;
    use crate::window::RowWindow;

    #[derive(Default)]
    struct Recorder {
        total: Option<usize>,
        done: Vec<usize>,
        finished: Option<usize>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = Some(total); }
        fn item_done(&mut self, count: usize) { self.done.push(count); }
        fn finish(&mut self, emitted: usize) { self.finished = Some(emitted); }
    }

    const PAGE: &str = r#"<div id="0"><table>
        <tr style="height:20px;"><th>1</th><td>1</td><td>30-01-2020</td><td></td><td>30-01-2020</td></tr>
        <tr style="height:20px;"><th>2</th><td>2</td><td>02-02-2020</td><td></td><td>02-02-2020</td></tr>
        <tr style="height:20px;"><th>3</th><td>3</td><td>03-02-2020</td><td></td><td>03-02-2020</td></tr>
        <tr style="height:20px;"><th>4</th><td></td></tr>
        </table></div>"#;

    #[test]
    fn progress_sees_every_record() {
        let mut rec = Recorder::default();
        let patients = parse_patients(PAGE, &ScrapeOptions::default(), Some(&mut rec)).unwrap();
        assert_eq!(patients.len(), 3);
        assert_eq!(rec.total, Some(4));
        assert_eq!(rec.done, vec![1, 2, 3]);
        assert_eq!(rec.finished, Some(3));
    }

    #[test]
    fn window_is_applied() {
        let opts = ScrapeOptions { window: RowWindow::new(2, 2), ..ScrapeOptions::default() };
        let patients = parse_patients(PAGE, &opts, None).unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].get(Field::PatientNumber), Some("2"));
    }

    #[test]
    fn saved_page_source_reads_file() {
        let path = std::env::temp_dir().join("kerala_scrape_saved_page.html");
        fs::write(&path, PAGE).unwrap();
        let opts = ScrapeOptions { source: Source::File(path), ..ScrapeOptions::default() };
        let patients = collect_patients(&opts, None).unwrap();
        assert_eq!(patients.len(), 3);
    }

    #[test]
    fn missing_saved_page_is_io_error() {
        let opts = ScrapeOptions {
            source: Source::File("/nonexistent/kerala/sheet.html".into()),
            ..ScrapeOptions::default()
        };
        assert!(matches!(collect_patients(&opts, None), Err(ScrapeError::Io(_))));
    }
}
