// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::write_patients;
use crate::error::ScrapeError;
use crate::patient::Patient;

/// Write `patients` as configured by `export`.
/// Returns the file written, or `None` when the target was stdout.
pub fn export_patients(
    export: &ExportOptions,
    patients: &[Patient],
) -> Result<Option<PathBuf>, ScrapeError> {
    let Some(path) = export.out_path() else {
        let stdout = io::stdout();
        write_to(stdout.lock(), export, patients)?;
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    write_to(BufWriter::new(file), export, patients)?;
    tracing::info!(path = %path.display(), records = patients.len(), "export written");
    Ok(Some(path))
}

/// Serialize into any writer according to the export format.
pub fn write_to<W: Write>(
    mut out: W,
    export: &ExportOptions,
    patients: &[Patient],
) -> Result<(), ScrapeError> {
    match export.format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            write_patients(&mut out, patients, export.include_headers, sep)?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, patients)?;
            writeln!(out)?;
        }
        ExportFormat::JsonLines => {
            for p in patients {
                serde_json::to_writer(&mut out, p)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Field;

    fn sample() -> Vec<Patient> {
        let mut a = Patient::new();
        a.set(Field::PatientNumber, "1");
        a.set(Field::DetectedDistrict, "Thrissur");
        let mut b = Patient::new();
        b.set(Field::PatientNumber, "2");
        vec![a, b]
    }

    fn render(format: ExportFormat) -> String {
        let mut export = ExportOptions::default();
        export.format = format;
        let mut buf = Vec::new();
        write_to(&mut buf, &export, &sample()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_lines_one_object_per_record() {
        let s = render(ExportFormat::JsonLines);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines, vec![
            r#"{"patient_number":"1","detected_district":"Thrissur"}"#,
            r#"{"patient_number":"2"}"#,
        ]);
    }

    #[test]
    fn json_is_an_array() {
        let v: serde_json::Value = serde_json::from_str(&render(ExportFormat::Json)).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(2));
        assert_eq!(v[0]["detected_district"], "Thrissur");
    }

    #[test]
    fn tsv_uses_tabs() {
        let s = render(ExportFormat::Tsv);
        assert!(s.lines().next().unwrap().starts_with("patient_number\tdate_announced\t"));
        assert_eq!(s.lines().count(), 3);
    }

    #[test]
    fn file_in_place_of_dir_is_rejected() {
        let path = std::env::temp_dir().join("kerala_scrape_not_a_dir");
        fs::write(&path, "x").unwrap();
        assert!(ensure_directory(&path).is_err());
    }
}
