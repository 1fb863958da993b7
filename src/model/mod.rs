//! Completeness analysis: compare observed thread IDs against the expected population.

use crate::expect::ExpectedThreads;
use crate::log::{LogScan, ReadError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Diagnostic for a failed read; the rest of the report then describes empty input.
    pub read_error: Option<String>,

    pub expected_threads: u64,

    /// Distinct thread IDs seen in completion lines.
    pub total_threads: usize,

    /// True when exactly the expected population exited.
    pub all_present: bool,

    /// Expected IDs without a completion line (ascending).
    pub missing: Vec<u64>,

    /// Observed IDs outside the expected range (ascending).
    pub unexpected: Vec<u64>,

    /// Number of completion lines per thread ID. This counts lines, not the
    /// operations each line reports.
    pub completions: BTreeMap<u64, u64>,

    /// Operation counts as written in the log, per thread ID, in log order.
    /// Values too large for `u64` are left out.
    pub reported_operations: BTreeMap<u64, Vec<u64>>,

    pub test_completed: bool,
}

/// Build the audit report. Never fails: empty input yields a report with every
/// expected ID missing.
pub fn build_audit_report(
    expected: ExpectedThreads,
    scan: &LogScan,
    read_error: Option<&ReadError>,
) -> AuditReport {
    let mut completions: BTreeMap<u64, u64> = BTreeMap::new();
    let mut reported_operations: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for record in &scan.records {
        *completions.entry(record.thread_id).or_default() += 1;
        let ops = reported_operations.entry(record.thread_id).or_default();
        ops.extend(record.operations);
    }

    let observed: BTreeSet<u64> = completions.keys().copied().collect();

    let missing: Vec<u64> = expected
        .ids()
        .filter(|id| !observed.contains(id))
        .collect();
    let unexpected: Vec<u64> = observed
        .iter()
        .copied()
        .filter(|id| !expected.contains(*id))
        .collect();

    let total_threads = observed.len();
    let all_present = total_threads as u64 == expected.count() && missing.is_empty();

    debug!(
        total_threads,
        missing = missing.len(),
        unexpected = unexpected.len(),
        all_present,
        "audit complete"
    );

    AuditReport {
        read_error: read_error.map(ToString::to_string),
        expected_threads: expected.count(),
        total_threads,
        all_present,
        missing,
        unexpected,
        completions,
        reported_operations,
        test_completed: scan.test_completed,
    }
}
