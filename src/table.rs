// 📋 Generic table - header-addressed rows of text cells
//
// The season statistics sources disagree on their column sets, so they are
// handled generically instead of with fixed structs. Every transform borrows
// the input and returns a new Table; source tables are never mutated.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    /// Read a table from a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Read a table from any CSV source (tests use in-memory byte slices).
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr
            .headers()
            .context("failed to read CSV headers")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.context("failed to read CSV record")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of an expected column. A source table missing one of the
    /// columns the pipeline relies on is malformed, so this is fatal.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        match self.headers.iter().position(|header| header == name) {
            Some(index) => Ok(index),
            None => bail!("missing expected column '{name}'"),
        }
    }

    /// Values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<String>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            bail!(
                "row has {} cells, table has {} columns",
                row.len(),
                self.headers.len()
            );
        }
        self.rows.push(row);
        Ok(())
    }

    /// Rename columns per an `(old, new)` mapping; unmapped columns pass
    /// through unchanged.
    pub fn rename_columns(&self, mapping: &[(&str, &str)]) -> Table {
        let headers = self
            .headers
            .iter()
            .map(|header| {
                mapping
                    .iter()
                    .find(|(old, _)| *old == header.as_str())
                    .map(|(_, new)| new.to_string())
                    .unwrap_or_else(|| header.clone())
            })
            .collect();

        Table {
            headers,
            rows: self.rows.clone(),
        }
    }

    /// Drop every column whose name contains '*' (the mapping's marker for
    /// columns the common schema excludes).
    pub fn drop_starred_columns(&self) -> Table {
        let keep: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !header.contains('*'))
            .map(|(index, _)| index)
            .collect();
        self.keep_columns(&keep)
    }

    /// Drop one column by name; the column must exist.
    pub fn drop_column(&self, name: &str) -> Result<Table> {
        let index = self.column_index(name)?;
        let keep: Vec<usize> = (0..self.headers.len()).filter(|i| *i != index).collect();
        Ok(self.keep_columns(&keep))
    }

    /// Drop a column if present; tables that never had it pass through.
    pub fn drop_column_if_present(&self, name: &str) -> Table {
        match self.headers.iter().position(|header| header == name) {
            Some(index) => {
                let keep: Vec<usize> = (0..self.headers.len()).filter(|i| *i != index).collect();
                self.keep_columns(&keep)
            }
            None => self.clone(),
        }
    }

    /// Remove every row whose key-column value occurs more than once. Both
    /// copies of a duplicated key go, so ambiguous names never reach the
    /// resolver.
    pub fn drop_ambiguous_rows(&self, key: &str) -> Result<Table> {
        let index = self.column_index(key)?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row[index].as_str()).or_insert(0) += 1;
        }

        let rows = self
            .rows
            .iter()
            .filter(|row| counts[row[index].as_str()] == 1)
            .cloned()
            .collect();

        Ok(Table {
            headers: self.headers.clone(),
            rows,
        })
    }

    fn keep_columns(&self, keep: &[usize]) -> Table {
        let headers = keep.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Table { headers, rows }
    }

    /// Write the table as CSV, headers first.
    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write(&mut wtr)?;
        wtr.flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn write<W: io::Write>(&self, wtr: &mut csv::Writer<W>) -> Result<()> {
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let csv = "\
NAME,TEAM,PPG
Stephen Curry,Gol,29.4
Jayson Tatum,Bos,26.9
Stephen Curry,Gol,1.0
";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_reader_parses_headers_and_rows() {
        let table = sample();
        assert_eq!(table.headers(), &["NAME", "TEAM", "PPG"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1][0], "Jayson Tatum");
    }

    #[test]
    fn test_missing_expected_column_is_fatal() {
        let table = sample();
        assert!(table.column_index("SALARY").is_err());
        assert!(table.column("SALARY").is_err());
    }

    #[test]
    fn test_rename_and_star_drop() {
        let csv = "FULL NAME,MIN%*,PPG\nKevin Durant,33.1,29.1\n";
        let table = Table::from_reader(csv.as_bytes()).unwrap();

        let renamed = table
            .rename_columns(&[("FULL NAME", "NAME"), ("MIN%*", "*")])
            .drop_starred_columns();

        assert_eq!(renamed.headers(), &["NAME", "PPG"]);
        assert_eq!(renamed.rows()[0], vec!["Kevin Durant", "29.1"]);
    }

    #[test]
    fn test_drop_column_keeps_row_alignment() {
        let table = sample();
        let dropped = table.drop_column("TEAM").unwrap();

        assert_eq!(dropped.headers(), &["NAME", "PPG"]);
        assert_eq!(dropped.rows()[0], vec!["Stephen Curry", "29.4"]);
    }

    #[test]
    fn test_drop_column_if_present_passes_through() {
        let table = sample();
        let same = table.drop_column_if_present("P+R+A");
        assert_eq!(same, table);
    }

    #[test]
    fn test_ambiguous_rows_are_fully_removed() {
        let table = sample();
        let deduped = table.drop_ambiguous_rows("NAME").unwrap();

        // Both Curry rows go; only the unambiguous name survives
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped.rows()[0][0], "Jayson Tatum");
    }

    #[test]
    fn test_push_row_enforces_arity() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        assert!(table.push_row(vec!["1".to_string()]).is_err());
        assert!(table
            .push_row(vec!["1".to_string(), "2".to_string()])
            .is_ok());
    }

    #[test]
    fn test_csv_round_trip() {
        let table = sample();

        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            table.write(&mut wtr).unwrap();
            wtr.flush().unwrap();
        }

        let back = Table::from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, table);
    }
}
