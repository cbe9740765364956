//! Cracked-result extraction from the engine's output file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One output line, keyed by field name.
pub type ResultRecord = HashMap<String, String>;

/// Default column separator of the output file.
pub const DEFAULT_SEPARATOR: char = ':';

/// Read cracked records from `path`.
///
/// Each non-empty line is split on every occurrence of `separator`. When
/// `fields` is empty or its length differs from the first line's column
/// count, positional names `f0..fN-1` are used instead. Any I/O failure, or
/// a file without records, yields a single empty record.
pub fn read_results(path: &Path, fields: &[&str], separator: char) -> Vec<ResultRecord> {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::warn!("Failed to read output file {}: {}", path.display(), err);
            return vec![ResultRecord::new()];
        }
    };
    tracing::debug!("Reading output file {}", path.display());
    parse_results(&content, fields, separator)
}

/// Parse output-file text. See [`read_results`].
pub fn parse_results(content: &str, fields: &[&str], separator: char) -> Vec<ResultRecord> {
    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(separator).collect())
        .collect();

    let Some(first) = rows.first() else {
        return vec![ResultRecord::new()];
    };

    let names: Vec<String> = if fields.is_empty() || fields.len() != first.len() {
        (0..first.len()).map(|i| format!("f{}", i)).collect()
    } else {
        fields.iter().map(|f| f.to_string()).collect()
    };

    rows.iter()
        .map(|row| {
            names
                .iter()
                .cloned()
                .zip(row.iter().map(|col| col.to_string()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_fields_when_counts_match() {
        let records = parse_results("abc:pw\n", &["hash", "plain"], ':');
        assert_eq!(records[0]["hash"], "abc");
        assert_eq!(records[0]["plain"], "pw");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let records = parse_results("a:b\n\n\r\nc:d\n", &[], ':');
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["f0"], "c");
    }

    #[test]
    fn empty_content_yields_one_empty_record() {
        assert_eq!(parse_results("", &["a"], ':'), vec![ResultRecord::new()]);
    }
}
