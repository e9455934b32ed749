// src/csv.rs
//
// CSV/TSV serialization of a `Table` for Copy and Export.

use std::io::Write;

use ::csv::{QuoteStyle, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::table::Table;

/// Write `table` into any writer. Fields are quoted only when needed.
pub fn write_table<W: Write>(
    w: W,
    table: &Table,
    include_headers: bool,
    format: ExportFormat,
) -> Result<(), ::csv::Error> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(w);

    if include_headers && !table.headers.is_empty() {
        out.write_record(&table.headers)?;
    }
    for row in &table.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Clipboard / preview text for a table.
pub fn to_export_string(table: &Table, include_headers: bool, format: ExportFormat) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_table(&mut buf, table, include_headers, format) {
        loge!("CSV: serialize failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Parse CSV/TSV text back into rows, headers included.
pub fn parse_rows(text: &str, format: ExportFormat) -> Result<Vec<Vec<String>>, ::csv::Error> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(String::from).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec![s!("name"), s!("note")],
            rows: vec![
                vec![s!("Stüssy"), s!("8 Ball, tee")],
                vec![s!("Nike"), s!("say \"hi\"")],
            ],
        }
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        let txt = to_export_string(&sample(), true, ExportFormat::Csv);
        assert_eq!(txt, "name,note\nStüssy,\"8 Ball, tee\"\nNike,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_without_headers() {
        let txt = to_export_string(&sample(), false, ExportFormat::Tsv);
        assert!(txt.starts_with("Stüssy\t8 Ball, tee\n"));
        let back = parse_rows(&txt, ExportFormat::Tsv).unwrap();
        assert_eq!(back, sample().rows);
    }
}
