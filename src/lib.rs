//! Word search over a fixed-size letter grid.
//!
//! A [`GridIndex`] is built once from equal-length rows and then queried
//! with candidate words. Each distinct word is counted along every row
//! (left to right) and every column (top to bottom), and the most frequent
//! matches are returned.
//!
//! ```
//! use wordgrid::GridIndex;
//!
//! let index = GridIndex::build(&["cat", "axa", "tat"]).unwrap();
//! assert_eq!(index.find(["cat", "dog"]), vec!["cat"]);
//! ```

pub mod config;
pub mod count;
pub mod error;
pub mod grid;
pub mod input;
pub mod io_utils;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use count::count_occurrences;
pub use error::{ConfigurationError, WordGridError};
pub use grid::GridIndex;
pub use input::{parse_grid, parse_words, read_grid, read_words};
pub use search::ResultEntry;
pub use stats::SearchStats;

/// Maximum number of rows and of columns in a grid.
pub const MAX_SIZE: usize = 64;
/// Maximum number of words returned by a search.
pub const NUMBER_OF_RESULTS: usize = 10;
