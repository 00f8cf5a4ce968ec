// src/config/consts.rs

// Source: "Patient Data" tab of the published Kerala sheet
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQU9eLCMT0XwWnoxV_LkyCkxMcPYO7z7ULdODoUFgcdzp48pgGpGrVZFXvraXYvUioVRsQgQDU_pQyI/pubhtml";
pub const SHEET_URL_ENV: &str = "KERALA_SHEET_URL";

// Table layout
pub const CONTAINER_SELECTOR: &str = r#"div[id="0"]"#;
pub const ROW_SELECTOR: &str = r#"tr[style="height:20px;"]"#;
pub const UNSPECIFIED: &str = "Unspecified";

// Net config
pub const USER_AGENT: &str = concat!("kerala_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_PAGE_BYTES: u64 = 64 * 1024 * 1024;

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "kerala_patients";
pub const STDOUT_PATH: &str = "-";
