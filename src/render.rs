//! Deterministic text rendering of search results
//!
//! The application layer shows results two ways: a plain list of matching
//! identifiers, and a nested per-identifier view of occurrence counts and
//! ranges. Both renderings are byte-for-byte deterministic for equal
//! inputs, so they are safe to snapshot in tests and diff across runs.

use crate::types::MatchReport;

/// Render matching identifiers, one per line, in input order
///
/// An empty list renders as the empty string. No trailing newline.
pub fn render_id_list<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a nested per-record occurrence report
///
/// One block per record: a header line with the identifier and count,
/// then one indented `[start, end)` line per range, in scan order.
///
/// ```text
/// a: 2 occurrence(s)
///   [0, 4)
///   [4, 8)
/// ```
pub fn render_report(report: &MatchReport) -> String {
    let mut out = String::new();
    for (id, occurrences) in report.iter() {
        out.push_str(&format!("{}: {} occurrence(s)\n", id, occurrences.count));
        for &(start, end) in &occurrences.ranges {
            out.push_str(&format!("  [{}, {})\n", start, end));
        }
    }
    out
}
