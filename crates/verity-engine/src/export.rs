//! Audit ledger export.
//!
//! Two lossless renderings of a ledger, both in ledger order (newest first):
//! the pretty-printed JSON array of entries and a five-column CSV.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verity_core::entities::AuditLog;
use verity_core::timestamp;

pub const CSV_HEADER: &str = "Timestamp,Action,Performed By,Category,Details\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

/// A rendered ledger ready to be handed to the caller as a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditExport {
    pub file_name: String,
    pub media_type: &'static str,
    pub content: String,
}

/// Render `log` in `format`, naming the file after `manuscript_id` and `now`.
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render(
    log: &AuditLog,
    manuscript_id: &str,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<AuditExport, serde_json::Error> {
    let content = match format {
        ExportFormat::Json => to_json(log)?,
        ExportFormat::Csv => to_csv(log),
    };
    Ok(AuditExport {
        file_name: format!(
            "audit-log-{manuscript_id}-{}.{}",
            now.timestamp_millis(),
            format.extension()
        ),
        media_type: format.media_type(),
        content,
    })
}

/// The ledger as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(log: &AuditLog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(log)
}

/// The ledger as CSV: header line, then one row per entry joined by `\n`
/// with no trailing newline. Every field is quoted.
#[must_use]
pub fn to_csv(log: &AuditLog) -> String {
    let rows: Vec<String> = log
        .iter()
        .map(|e| {
            let mut row = String::new();
            let _ = write!(
                row,
                "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
                timestamp::format(&e.timestamp),
                escape(&e.action),
                escape(&e.performed_by),
                e.category,
                escape(&e.details)
            );
            row
        })
        .collect();
    format!("{CSV_HEADER}{}", rows.join("\n"))
}

fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::AuditDraft;
    use crate::test_support::helpers::at;
    use pretty_assertions::assert_eq;
    use verity_core::entities::AuditEntry;
    use verity_core::enums::AuditCategory;

    fn log_of(entries: Vec<AuditEntry>) -> AuditLog {
        let mut log = AuditLog::new();
        for entry in entries.into_iter().rev() {
            log.append(entry);
        }
        log
    }

    fn entry(details: &str, h: u32) -> AuditEntry {
        AuditDraft::new(
            AuditCategory::Verification,
            "Verification recorded: exact",
            "Dr. Okafor",
            details,
        )
        .stamp(at(h, 0))
    }

    #[test]
    fn csv_doubles_quotes_and_wraps_fields() {
        let log = log_of(vec![entry(r#"Reviewer wrote "see Table 2""#, 10)]);
        assert_eq!(
            to_csv(&log),
            "Timestamp,Action,Performed By,Category,Details\n\
             \"2026-02-08T10:00:00.000Z\",\"Verification recorded: exact\",\"Dr. Okafor\",\"verification\",\"Reviewer wrote \"\"see Table 2\"\"\""
        );
    }

    #[test]
    fn csv_rows_follow_ledger_order_without_trailing_newline() {
        let log = log_of(vec![entry("newest", 11), entry("oldest", 10)]);
        let csv = to_csv(&log);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("\"newest\""));
        assert!(lines[2].ends_with("\"oldest\""));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn csv_of_empty_ledger_is_header_only() {
        assert_eq!(to_csv(&AuditLog::new()), CSV_HEADER);
    }

    #[test]
    fn json_is_pretty_array_that_reads_back() {
        let log = log_of(vec![entry("a \"quoted\" detail", 10)]);
        let json = to_json(&log).unwrap();
        assert!(json.starts_with("[\n  {\n"));
        let back: AuditLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn render_names_the_file() {
        let log = log_of(vec![entry("x", 10)]);
        let now = at(12, 0);
        let export = render(&log, "JRR-2026-0042", ExportFormat::Csv, now).unwrap();
        assert_eq!(
            export.file_name,
            format!("audit-log-JRR-2026-0042-{}.csv", now.timestamp_millis())
        );
        assert_eq!(export.media_type, "text/csv");

        let export = render(&log, "JRR-2026-0042", ExportFormat::Json, now).unwrap();
        assert!(export.file_name.ends_with(".json"));
        assert_eq!(export.media_type, "application/json");
    }
}
