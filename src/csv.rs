// src/csv.rs
use std::io::{self, Write};

use crate::patient::{Field, Patient};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header (optional) + one row per patient, in schema order.
pub fn write_patients<W: Write>(
    mut w: W,
    patients: &[Patient],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &Field::headers(), sep)?;
    }
    for p in patients {
        write_row(&mut w, &p.to_row(), sep)?;
    }
    Ok(())
}
