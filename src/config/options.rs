// src/config/options.rs
use std::ffi::OsString;
use std::path::PathBuf;

use super::consts::*;
use crate::window::RowWindow;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where the sheet HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// Saved copy of the page, for offline runs.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: Source,
    pub container: String,
    pub row_selector: String,
    pub window: RowWindow,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: Source::Url(SHEET_URL.to_string()),
            container: CONTAINER_SELECTOR.to_string(),
            row_selector: ROW_SELECTOR.to_string(),
            window: RowWindow::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    JsonLines,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonl",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json | ExportFormat::JsonLines => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    /// Extension the user typed; when set, format changes leave it alone.
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    out_path: Option<OutputPath>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: Some(OutputPath::default()),
        }
    }
}

impl ExportOptions {
    /// Resolved output file, or `None` for stdout.
    pub fn out_path(&self) -> Option<PathBuf> {
        let out = self.out_path.as_ref()?;
        let mut name = out.file_stem.clone();
        name.push(".");
        match &out.user_ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        Some(out.dir.join(name))
    }

    pub fn to_stdout(&self) -> bool {
        self.out_path.is_none()
    }

    /// Parse a user path. `-` means stdout; a trailing separator or an existing
    /// directory keeps the default file name inside that directory.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s == STDOUT_PATH {
            self.out_path = None;
            return;
        }

        let p = PathBuf::from(normalize_separators(s));
        let mut out = OutputPath::default();

        if looks_like_dir_hint(s) || p.is_dir() {
            out.dir = p;
        } else {
            if let Some(parent) = p.parent() {
                out.dir = parent.to_path_buf();
            }
            if let Some(stem) = p.file_stem() {
                out.file_stem = stem.to_os_string();
            }
            out.user_ext = p.extension().map(|e| e.to_os_string());
        }
        self.out_path = Some(out);
    }
}

fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
