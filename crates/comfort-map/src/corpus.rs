//! Email corpus loading: CSV parsing, body extraction, author grouping.
//!
//! Expects the Kaggle Enron export layout: a headered CSV whose `message`
//! column holds the raw RFC-822 text (headers, blank line, body).

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Context;
use camino::Utf8Path;
use regex::Regex;
use tracing::{debug, warn};

/// Bodies at or under this many characters are dropped as noise.
const MIN_BODY_CHARS: usize = 100;

/// CSV column holding the raw email text.
const MESSAGE_COLUMN: &str = "message";

static FROM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"From:\s*([^\n]+)").expect("valid regex"));

/// Trailing signature blocks: everything from a run of 3+ dashes or equals
/// signs to the end of the body.
static SIGNATURE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(-{3,}|={3,}).*").expect("valid regex"));

/// One usable email: who sent it and what they wrote.
#[derive(Debug, Clone)]
pub struct EmailRecord {
    /// Sender from the `From:` header, or "Unknown".
    pub sender: String,
    /// Cleaned body text.
    pub body: String,
}

/// Load usable email records from a CSV file.
///
/// Rows that fail to parse are logged and skipped, as are rows whose
/// cleaned body is too short to carry authorial signal. `max_emails` caps
/// the number of CSV rows read, not the number of records kept.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_csv(path: &Utf8Path, max_emails: Option<usize>) -> anyhow::Result<Vec<EmailRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_std_path())
        .with_context(|| format!("failed to open {path}"))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers from {path}"))?;
    let message_index = headers
        .iter()
        .position(|h| h == MESSAGE_COLUMN)
        .with_context(|| format!("{path} has no `{MESSAGE_COLUMN}` column"))?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for row in reader.records() {
        if max_emails.is_some_and(|max| rows_read >= max) {
            break;
        }
        rows_read += 1;

        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(row = rows_read, error = %err, "skipping malformed CSV row");
                rows_skipped += 1;
                continue;
            }
        };

        let Some(raw) = row.get(message_index) else {
            warn!(row = rows_read, "skipping row with missing message field");
            rows_skipped += 1;
            continue;
        };

        let body = extract_body(raw);
        if body.chars().count() <= MIN_BODY_CHARS {
            rows_skipped += 1;
            continue;
        }

        records.push(EmailRecord {
            sender: extract_sender(raw),
            body,
        });
    }

    debug!(
        rows_read,
        rows_skipped,
        records = records.len(),
        "corpus loaded"
    );
    Ok(records)
}

/// Group records by sender, keeping authors with at least `min_messages`.
///
/// Authors come back ordered by descending message count, ties broken by
/// first appearance in the input, so repeated runs list them identically.
pub fn group_by_author(
    records: Vec<EmailRecord>,
    min_messages: usize,
) -> Vec<(String, Vec<String>)> {
    let mut grouped: HashMap<String, (usize, Vec<String>)> = HashMap::new();

    for (index, record) in records.into_iter().enumerate() {
        let entry = grouped
            .entry(record.sender)
            .or_insert_with(|| (index, Vec::new()));
        entry.1.push(record.body);
    }

    let mut authors: Vec<(String, usize, Vec<String>)> = grouped
        .into_iter()
        .filter(|(_, (_, bodies))| bodies.len() >= min_messages)
        .map(|(sender, (first, bodies))| (sender, first, bodies))
        .collect();
    authors.sort_by(|a, b| b.2.len().cmp(&a.2.len()).then_with(|| a.1.cmp(&b.1)));

    authors
        .into_iter()
        .map(|(sender, _, bodies)| (sender, bodies))
        .collect()
}

/// Extract the cleaned body from a raw email: everything after the first
/// blank line, with trailing signature blocks stripped.
pub fn extract_body(raw: &str) -> String {
    let mut lines = raw.split('\n');
    let mut body_lines: Vec<&str> = Vec::new();
    let mut in_body = false;

    for line in lines.by_ref() {
        if in_body {
            body_lines.push(line);
        } else if line.trim().is_empty() {
            in_body = true;
        }
    }

    let body = body_lines.join("\n");
    SIGNATURE_BLOCK.replace(&body, "").trim().to_string()
}

/// Extract the sender from the `From:` header, falling back to "Unknown".
pub fn extract_sender(raw: &str) -> String {
    FROM_HEADER
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "Unknown".to_string(), |m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_email(sender: &str, body: &str) -> String {
        format!(
            "Message-ID: <123>\nFrom: {sender}\nTo: someone@enron.com\nSubject: test\n\n{body}"
        )
    }

    #[test]
    fn body_starts_after_first_blank_line() {
        let raw = raw_email("kay.mann@enron.com", "The contract is ready.\nSecond line.");
        assert_eq!(extract_body(&raw), "The contract is ready.\nSecond line.");
    }

    #[test]
    fn no_blank_line_means_no_body() {
        assert_eq!(extract_body("From: x@y.com\nSubject: test"), "");
    }

    #[test]
    fn signature_blocks_stripped() {
        let raw = raw_email(
            "a@enron.com",
            "Please review the draft.\n-----Original Message-----\nFrom: b@enron.com\nold text",
        );
        assert_eq!(extract_body(&raw), "Please review the draft.");

        let raw = raw_email("a@enron.com", "Short note.\n======\nforwarded junk");
        assert_eq!(extract_body(&raw), "Short note.");
    }

    #[test]
    fn sender_from_header() {
        let raw = raw_email("kay.mann@enron.com", "body");
        assert_eq!(extract_sender(&raw), "kay.mann@enron.com");
    }

    #[test]
    fn sender_unknown_without_header() {
        assert_eq!(extract_sender("Subject: no from line\n\nbody"), "Unknown");
    }

    #[test]
    fn grouping_applies_threshold() {
        let records = vec![
            EmailRecord {
                sender: "a".into(),
                body: "one".into(),
            },
            EmailRecord {
                sender: "b".into(),
                body: "two".into(),
            },
            EmailRecord {
                sender: "a".into(),
                body: "three".into(),
            },
        ];
        let authors = group_by_author(records, 2);
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].0, "a");
        assert_eq!(authors[0].1, vec!["one".to_string(), "three".to_string()]);
    }

    #[test]
    fn authors_ordered_by_descending_count() {
        let mut records = Vec::new();
        for _ in 0..2 {
            records.push(EmailRecord {
                sender: "few".into(),
                body: "x".into(),
            });
        }
        for _ in 0..5 {
            records.push(EmailRecord {
                sender: "many".into(),
                body: "y".into(),
            });
        }
        let authors = group_by_author(records, 1);
        assert_eq!(authors[0].0, "many");
        assert_eq!(authors[1].0, "few");
    }

    #[test]
    fn load_csv_skips_short_bodies() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("emails.csv");

        let long_body = "This body is long enough to pass the minimum length filter. ".repeat(3);
        let mut writer = csv::Writer::from_path(&path).unwrap();
        writer.write_record(["file", "message"]).unwrap();
        writer
            .write_record(["1", &raw_email("a@enron.com", &long_body)])
            .unwrap();
        writer
            .write_record(["2", &raw_email("b@enron.com", "too short")])
            .unwrap();
        writer.flush().unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let records = load_csv(&path, None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, "a@enron.com");
    }

    #[test]
    fn load_csv_honors_row_cap() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("emails.csv");

        let long_body = "This body is long enough to pass the minimum length filter. ".repeat(3);
        let mut writer = csv::Writer::from_path(&path).unwrap();
        writer.write_record(["file", "message"]).unwrap();
        for i in 0..5 {
            writer
                .write_record([
                    format!("{i}"),
                    raw_email(&format!("sender{i}@enron.com"), &long_body),
                ])
                .unwrap();
        }
        writer.flush().unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let records = load_csv(&path, Some(2)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_csv_missing_message_column_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("emails.csv");
        std::fs::write(&path, "file,body\n1,hello\n").unwrap();

        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        assert!(load_csv(&path, None).is_err());
    }
}
