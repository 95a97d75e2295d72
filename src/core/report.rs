use crate::domain::model::{OutputFormat, RuleRecord};
use crate::utils::error::Result;
use std::io::Write;

const HEADERS: [&str; 3] = ["Port", "Direction", "Rule Name"];
const COLUMN_PADDING: usize = 3;
const SEPARATOR_WIDTH: usize = 50;

pub fn write_records<W: Write>(out: &mut W, records: &[RuleRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, records),
        OutputFormat::Csv => write_csv(out, records),
        OutputFormat::Json => write_json(out, records),
    }
}

/// 左對齊表格：每欄寬度為該欄最長內容再加三個空白
pub fn write_table<W: Write>(out: &mut W, records: &[RuleRecord]) -> Result<()> {
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.port.as_str(), r.direction.title(), r.name.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }

    out.flush()?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str; 3], widths: &[usize; 3]) -> Result<()> {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!("{:<w$}", cell, w = width + COLUMN_PADDING));
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, records: &[RuleRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, records: &[RuleRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
