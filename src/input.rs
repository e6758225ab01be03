//! Loaders for the two search inputs: grid rows from a text file and the
//! candidate words from a JSON array.

use std::path::Path;

use crate::error::WordGridError;

/// Split grid text into rows. Line endings are trimmed and blank lines
/// dropped; row lengths are left for [`crate::GridIndex`] to validate.
pub fn parse_grid(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordGridError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_grid(&text))
}

/// Parse a JSON array of strings.
pub fn parse_words(text: &str) -> Result<Vec<String>, WordGridError> {
    Ok(serde_json::from_str(text)?)
}

pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordGridError> {
    let text = std::fs::read_to_string(path)?;
    parse_words(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn grid_lines_are_trimmed() {
        assert_eq!(parse_grid("abc\r\ndef\n\n"), vec!["abc", "def"]);
    }

    #[test]
    fn words_must_be_a_string_array() {
        assert_eq!(parse_words(r#"["a", "bc"]"#).unwrap(), vec!["a", "bc"]);
        assert!(matches!(
            parse_words(r#"{"a": 1}"#),
            Err(WordGridError::WordList(_))
        ));
        assert!(parse_words("[1, 2]").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let mut grid = NamedTempFile::new().unwrap();
        writeln!(grid, "ab\ncd").unwrap();
        assert_eq!(read_grid(grid.path()).unwrap(), vec!["ab", "cd"]);

        let mut words = NamedTempFile::new().unwrap();
        write!(words, r#"["ab", "c"]"#).unwrap();
        assert_eq!(read_words(words.path()).unwrap(), vec!["ab", "c"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_grid(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WordGridError::Io(_)));
    }
}
