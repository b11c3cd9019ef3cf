//! CSV encoder.
//!
//! Every field is wrapped in double quotes and fields are joined with commas.
//! In [`CsvQuoting::Legacy`] mode embedded quotes are written as-is, which is
//! what existing consumers of these files parse.

use kitroute_shared::CsvQuoting;

use super::layout::{Cell, Table};

/// Encodes a table as CSV, one `\n`-terminated line per row after the header.
#[must_use]
pub fn encode(table: &Table, quoting: CsvQuoting) -> Vec<u8> {
    let mut out = String::new();

    push_line(&mut out, table.headers(), quoting);
    for row in &table.rows {
        let texts: Vec<String> = row.cells.iter().map(Cell::to_text).collect();
        push_line(&mut out, texts.iter().map(String::as_str), quoting);
    }

    out.into_bytes()
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, quoting: CsvQuoting) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        match quoting {
            CsvQuoting::Legacy => out.push_str(field),
            CsvQuoting::Rfc4180 => out.push_str(&field.replace('"', "\"\"")),
        }
        out.push('"');
    }
    out.push('\n');
}
