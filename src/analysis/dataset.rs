//! Uploaded tabular dataset
//!
//! A [`Dataset`] is a user-supplied CSV table held as strings. Columns are
//! classified numeric or text the way the original tooling did: a column is
//! numeric when every non-empty cell parses as a float and at least one cell
//! is non-empty. Empty cells in numeric columns are treated as missing and
//! skipped by the statistics.

use std::io::BufReader;
use std::path::Path;

use crate::analysis::AnalysisError;

/// A parsed tabular dataset with named columns
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Read a dataset from a CSV file with a header row
    pub fn from_path(path: &Path) -> Result<Self, AnalysisError> {
        let file = std::fs::File::open(path).map_err(|e| AnalysisError::Read(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a dataset from any reader producing CSV with a header row
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, AnalysisError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| AnalysisError::Read(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| AnalysisError::Read(e.to_string()))?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Short rows are padded so every row has one cell per column
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, name: &str) -> Result<usize, AnalysisError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string()))
    }

    /// Whether the named column is numeric
    pub fn is_numeric(&self, name: &str) -> bool {
        let Ok(idx) = self.column_index(name) else {
            return false;
        };
        let mut any = false;
        for row in &self.rows {
            let cell = &row[idx];
            if cell.is_empty() {
                continue;
            }
            if cell.parse::<f64>().is_err() {
                return false;
            }
            any = true;
        }
        any
    }

    /// Names of all numeric columns, in header order
    pub fn numeric_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| self.is_numeric(h))
            .cloned()
            .collect()
    }

    /// Names of all non-numeric columns, in header order
    pub fn text_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| !self.is_numeric(h))
            .cloned()
            .collect()
    }

    /// Parsed values of a numeric column, empty cells skipped
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| row[idx].as_str())
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| {
                    AnalysisError::Read(format!("non-numeric value '{}' in column {}", cell, name))
                })
            })
            .collect()
    }

    /// Row-wise paired values of two numeric columns.
    ///
    /// A row contributes only when both cells are non-empty, so rows with a
    /// missing value in either column are dropped as a pair. Keeps the two
    /// series aligned the way pairwise-complete correlation expects.
    pub fn paired_values(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(Vec<f64>, Vec<f64>), AnalysisError> {
        let first_idx = self.column_index(first)?;
        let second_idx = self.column_index(second)?;

        let parse = |cell: &str, name: &str| {
            cell.parse::<f64>().map_err(|_| {
                AnalysisError::Read(format!("non-numeric value '{}' in column {}", cell, name))
            })
        };

        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for row in &self.rows {
            let (a, b) = (&row[first_idx], &row[second_idx]);
            if a.is_empty() || b.is_empty() {
                continue;
            }
            xs.push(parse(a, first)?);
            ys.push(parse(b, second)?);
        }
        Ok((xs, ys))
    }

    /// Distinct values of a column, in first-appearance order
    pub fn unique_values(&self, name: &str) -> Result<Vec<String>, AnalysisError> {
        let idx = self.column_index(name)?;
        let mut seen = Vec::new();
        for row in &self.rows {
            let cell = &row[idx];
            if !seen.contains(cell) {
                seen.push(cell.clone());
            }
        }
        Ok(seen)
    }

    /// Split a numeric column into two groups by a categorical column.
    ///
    /// Fails unless the grouping column has exactly two distinct values.
    /// Returns `(label, values)` per group in first-appearance order.
    pub fn split_groups(
        &self,
        value_column: &str,
        group_column: &str,
    ) -> Result<[(String, Vec<f64>); 2], AnalysisError> {
        let value_idx = self.column_index(value_column)?;
        let group_idx = self.column_index(group_column)?;

        let groups = self.unique_values(group_column)?;
        if groups.len() != 2 {
            return Err(AnalysisError::GroupCount(groups.len()));
        }

        let mut split = [
            (groups[0].clone(), Vec::new()),
            (groups[1].clone(), Vec::new()),
        ];

        for row in &self.rows {
            let cell = &row[value_idx];
            if cell.is_empty() {
                continue;
            }
            let value: f64 = cell.parse().map_err(|_| {
                AnalysisError::Read(format!(
                    "non-numeric value '{}' in column {}",
                    cell, value_column
                ))
            })?;
            let target = if row[group_idx] == split[0].0 { 0 } else { 1 };
            split[target].1.push(value);
        }

        Ok(split)
    }
}
