//! Readers for tokenized id files and vocabularies.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{DatasetError, Result};

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parse one line of whitespace-separated token ids.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_id_line(line: &str, path: &Path, line_no: usize) -> Result<Vec<u32>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| DatasetError::InvalidToken {
                path: path.to_path_buf(),
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Read at most `max_lines` lines of token ids from `path`.
///
/// Every line is one example, blank lines included.
pub fn read_id_file<P: AsRef<Path>>(path: P, max_lines: usize) -> Result<Vec<Vec<u32>>> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut sequences = Vec::new();
    for (idx, line) in reader.lines().take(max_lines).enumerate() {
        let line = line.map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        sequences.push(parse_id_line(&line, path, idx + 1)?);
    }

    debug!(path = %path.display(), examples = sequences.len(), "read id file");
    Ok(sequences)
}

/// Number of lines in a newline-delimited vocabulary file.
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut count = 0;
    for line in reader.lines() {
        line.map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_id_file() {
        let file = write_tmp("4 5 6\n  7 8\n\n9\n");
        let seqs = read_id_file(file.path(), 100).unwrap();
        assert_eq!(seqs, vec![vec![4, 5, 6], vec![7, 8], vec![], vec![9]]);
    }

    #[test]
    fn test_read_id_file_truncates() {
        let file = write_tmp("1\n2\n3\n4\n5\n");
        let seqs = read_id_file(file.path(), 3).unwrap();
        assert_eq!(seqs, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_read_id_file_invalid_token() {
        let file = write_tmp("1 2\n3 x 4\n");
        let err = read_id_file(file.path(), 10).unwrap_err();
        match err {
            DatasetError::InvalidToken { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_token_rejected() {
        let file = write_tmp("-1\n");
        assert!(matches!(
            read_id_file(file.path(), 10),
            Err(DatasetError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_id_file(dir.path().join("nope.ids"), 10).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_count_lines() {
        let file = write_tmp("_PAD\n_GO\n_EOS\n_UNK\nflight\n");
        assert_eq!(count_lines(file.path()).unwrap(), 5);

        let no_trailing_newline = write_tmp("a\nb");
        assert_eq!(count_lines(no_trailing_newline.path()).unwrap(), 2);
    }
}
