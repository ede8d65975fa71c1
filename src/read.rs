// src/read.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, instrument};

/// Parse `path` as comma-delimited text and return every row as an ordered
/// list of fields.
///
/// The reader treats the first row like any other (`has_headers(false)`), so
/// a header row, if one exists, comes back as an ordinary record. Rows with
/// differing field counts are accepted as-is.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| {
            format!("Failed to parse CSV record in {:?}", path.as_ref())
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }

    debug!(records = records.len(), "parsed CSV");
    Ok(records)
}

/// Read `path` line by line and return each line with surrounding whitespace
/// trimmed. No delimiter handling; this is the raw view of the same file.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("Failed to read line from {:?}", path.as_ref()))?;
        lines.push(line.trim().to_string());
    }

    debug!(lines = lines.len(), "read raw lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_csv() -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"a,b\nc,d\n")?;
        Ok(tmp)
    }

    #[test]
    fn structured_read_yields_rows_in_order() -> Result<()> {
        let tmp = sample_csv()?;
        let records = read_records(tmp.path())?;
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
        Ok(())
    }

    #[test]
    fn line_read_trims_whitespace() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"a,b  \n  c,d\r\n")?;
        let lines = read_lines(tmp.path())?;
        assert_eq!(lines, vec!["a,b", "c,d"]);
        Ok(())
    }

    #[test]
    fn first_row_is_an_ordinary_record() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"Name,Age\nMahesh,30\n")?;
        let records = read_records(tmp.path())?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["Name", "Age"]);
        Ok(())
    }

    #[test]
    fn uneven_field_counts_are_accepted() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"a,b,c\nd\n")?;
        let records = read_records(tmp.path())?;
        assert_eq!(records, vec![vec!["a", "b", "c"], vec!["d"]]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let missing = Path::new("definitely_not_here.csv");
        assert!(read_records(missing).is_err());
        assert!(read_lines(missing).is_err());
    }
}
