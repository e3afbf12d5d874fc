// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use charstat_engine::stats::{Report, StatEntry};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonEntry {
    #[serde(flatten)]
    entry: StatEntry,
    /// 表示と同じく小数1桁に丸めた値
    percent: f64,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    total: u64,
    entries: Vec<JsonEntry>,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        let entries = report
            .entries
            .iter()
            .map(|&entry| JsonEntry {
                entry,
                percent: (entry.percent(report.total) * 10.0).round() / 10.0,
            })
            .collect();
        Self {
            total: report.total,
            entries,
        }
    }
}

/// Write `report` to `out` in the requested format.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, report)?,
        OutputFormat::Csv => write_sv(out, report, ",")?,
        OutputFormat::Tsv => write_sv(out, report, "\t")?,
        OutputFormat::Json => write_json(out, report)?,
    }
    Ok(())
}

/// Quoted, escaped character literal (`'A'`, `'\n'`, `'\''`).
pub fn char_literal(ch: char) -> String {
    format!("{ch:?}")
}

fn percent_1dp(entry: &StatEntry, total: u64) -> String {
    format!("{:.1}", entry.percent(total))
}

fn write_plain<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    for e in &report.entries {
        writeln!(
            out,
            "{} {} {}",
            char_literal(e.ch),
            percent_1dp(e, report.total),
            e.count
        )?;
    }
    Ok(())
}

fn write_sv<W: Write>(out: &mut W, report: &Report, delimiter: &str) -> std::io::Result<()> {
    writeln!(out, "char{delimiter}percent{delimiter}count")?;
    for e in &report.entries {
        let mut literal = char_literal(e.ch);
        if delimiter == "," && (literal.contains(',') || literal.contains('"')) {
            literal = format!("\"{}\"", literal.replace('"', "\"\""));
        }
        writeln!(
            out,
            "{literal}{delimiter}{}{delimiter}{}",
            percent_1dp(e, report.total),
            e.count
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out)?;
    Ok(())
}
