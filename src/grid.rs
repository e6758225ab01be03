//! Grid validation and the row/column index built from it.

use crate::config::SearchConfig;
use crate::error::{ConfigurationError, WordGridError};

/// A validated grid stored both row-major and column-major.
///
/// Built once; read-only afterwards. `columns[j][i] == rows[i][j]`.
#[derive(Debug, Clone)]
pub struct GridIndex {
    pub(crate) rows: Vec<Vec<char>>,
    pub(crate) columns: Vec<Vec<char>>,
    pub(crate) config: SearchConfig,
}

impl GridIndex {
    /// Build an index with the default limits.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Self, WordGridError> {
        Self::with_config(rows, SearchConfig::default())
    }

    /// Validate the grid shape against `config` and transpose it.
    pub fn with_config<S: AsRef<str>>(
        rows: &[S],
        config: SearchConfig,
    ) -> Result<Self, WordGridError> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        validate(&rows, config.max_size)?;

        let width = rows[0].len();
        let mut columns: Vec<Vec<char>> = vec![Vec::with_capacity(rows.len()); width];
        for row in &rows {
            for (column, &c) in columns.iter_mut().zip(row) {
                column.push(c);
            }
        }

        Ok(Self {
            rows,
            columns,
            config,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Row `i` as a string, if in range.
    pub fn row(&self, i: usize) -> Option<String> {
        self.rows.get(i).map(|r| r.iter().collect())
    }

    /// Column `j` read top to bottom, if in range.
    pub fn column(&self, j: usize) -> Option<String> {
        self.columns.get(j).map(|c| c.iter().collect())
    }

    pub fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }

    pub fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.iter().collect()).collect()
    }
}

fn validate(rows: &[Vec<char>], max: usize) -> Result<(), ConfigurationError> {
    let first = rows.first().ok_or(ConfigurationError::EmptyGrid)?;
    if rows.len() > max {
        return Err(ConfigurationError::TooManyRows {
            rows: rows.len(),
            max,
        });
    }
    if first.len() > max {
        return Err(ConfigurationError::TooManyColumns {
            columns: first.len(),
            max,
        });
    }
    if first.is_empty() {
        return Err(ConfigurationError::EmptyRow);
    }
    let expected = first.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(ConfigurationError::RaggedRow {
            row,
            expected,
            found: r.len(),
        });
    }
    Ok(())
}
