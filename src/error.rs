use thiserror::Error;

/// Grid shape violations detected while building a [`crate::GridIndex`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("grid row 0 is empty")]
    EmptyRow,

    #[error("grid has {rows} rows, maximum is {max}")]
    TooManyRows { rows: usize, max: usize },

    #[error("grid has {columns} columns, maximum is {max}")]
    TooManyColumns { columns: usize, max: usize },

    /// A row whose length differs from row 0.
    #[error("grid row {row} has {found} characters, expected {expected} like row 0")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum WordGridError {
    /// Invalid grid shape. Fatal to index construction.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search limits that cannot produce a result.
    #[error("config error: {0}")]
    Config(String),

    /// Word list or config file that is not the expected JSON.
    #[error("JSON error: {0}")]
    WordList(#[from] serde_json::Error),
}
