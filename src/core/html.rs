// src/core/html.rs
//! Table access on top of `scraper`: pick rows with a CSS selector and
//! flatten each row to the text of its `td` cells.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// One table row as cell text, in column order.
pub type Row = Vec<String>;

pub fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Rows matched by `row_selector` inside elements matched by `container`.
/// `th` cells (the sheet's row numbers) are not data columns and are skipped.
pub fn select_rows(doc: &Html, container: &str, row_selector: &str) -> Result<Vec<Row>, ScrapeError> {
    let rows = parse_selector(&format!("{container} {row_selector}"))?;
    let td = parse_selector("td")?;

    Ok(doc
        .select(&rows)
        .map(|tr| tr.select(&td).map(cell_text).collect())
        .collect())
}

/// All descendant text of a cell, joined without separators (untrimmed).
pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="0"><table>
          <tr style="height:20px;"><th>1</th><td>a</td><td><div>b <b>c</b></div></td></tr>
          <tr style="height:40px;"><th>2</th><td>skipped</td></tr>
          <tr style="height:20px;"><th>3</th><td></td></tr>
        </table></div>
        <div id="1"><table>
          <tr style="height:20px;"><td>other tab</td></tr>
        </table></div>
    "#;

    #[test]
    fn selects_rows_of_first_tab_only() {
        let doc = Html::parse_document(PAGE);
        let rows = select_rows(&doc, r#"div[id="0"]"#, r#"tr[style="height:20px;"]"#).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "b c".to_string()], vec![String::new()]]);
    }

    #[test]
    fn bad_selector_is_reported() {
        let doc = Html::parse_document(PAGE);
        let err = select_rows(&doc, "div[", "tr").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector { .. }));
    }
}
