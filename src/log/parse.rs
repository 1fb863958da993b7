use crate::log::record::ThreadRecord;
use regex::Regex;
use tracing::{debug, warn};

/// Substring the harness writes once every worker has been joined.
pub const COMPLETION_MARKER: &str = "Test completed";

/// Everything the analysis needs from the log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogScan {
    /// Completion records in log order, duplicates kept.
    pub records: Vec<ThreadRecord>,
    pub test_completed: bool,
}

/// Extracts `Thread <id> executed <ops> operations` records from log lines.
#[derive(Debug, Clone)]
pub struct CompletionParser {
    re: Regex,
}

impl CompletionParser {
    pub fn new() -> anyhow::Result<Self> {
        // Matched anywhere in the line, the harness prefixes a timestamp and level.
        // Capture:
        // 1) thread id
        // 2) operations executed by that thread
        let re = Regex::new(r"Thread ([0-9]+) executed ([0-9]+) operations")?;
        Ok(Self { re })
    }

    /// Parse a single line. Non-matching lines yield `None`.
    ///
    /// An operations value too large for `u64` keeps the record with
    /// `operations: None`; only an unrepresentable thread ID drops the line.
    pub fn parse_line(&self, line: &str) -> Option<ThreadRecord> {
        let caps = self.re.captures(line)?;

        // Digits only, so the sole failure is overflow.
        let thread_id = match caps.get(1)?.as_str().parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                warn!(line, "completion line has an out-of-range thread id, skipped");
                return None;
            }
        };
        let operations = caps.get(2)?.as_str().parse::<u64>().ok();
        if operations.is_none() {
            debug!(thread_id, "operations count out of range, thread still counted");
        }

        Some(ThreadRecord {
            thread_id,
            operations,
        })
    }

    /// Single pass over all lines: completion records and the marker.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> LogScan {
        let mut out = LogScan::default();
        for line in lines {
            let line = line.as_ref();
            if let Some(record) = self.parse_line(line) {
                out.records.push(record);
            }
            if line.contains(COMPLETION_MARKER) {
                out.test_completed = true;
            }
        }

        debug!(
            lines = lines.len(),
            records = out.records.len(),
            test_completed = out.test_completed,
            "scanned log"
        );
        out
    }
}
