use crate::constants::{DEFAULT_OUTPUT_PATH, FULL_REPORT_TITLE};
use crate::models::Error;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Falls back to [`DEFAULT_OUTPUT_PATH`] when no destination (or an empty one) is given.
pub fn resolve_report_path(output_path: Option<&str>) -> PathBuf {
    match output_path.map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_OUTPUT_PATH),
    }
}

/// Writes a titled, line-oriented report and returns the absolute path written.
pub fn write_report<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", FULL_REPORT_TITLE)?;
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    finish_report(path, lines.len())
}

/// Writes pre-rendered CSV text and returns the absolute path written.
pub fn write_csv_report<P: AsRef<Path>>(path: P, csv: &str) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(csv.as_bytes())?;
    writer.flush()?;

    finish_report(path, csv.lines().count().saturating_sub(1))
}

fn finish_report(path: &Path, entry_count: usize) -> Result<PathBuf, Error> {
    let absolute_path = std::path::absolute(path)?;

    info!(
        "Wrote {} report entries to {}",
        entry_count,
        absolute_path.display()
    );

    Ok(absolute_path)
}
