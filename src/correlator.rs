//! Correlates discovered artifacts with the process snapshot.
//!
//! Matching is heuristic: an artifact counts as running when its file name
//! appears anywhere in a process's listing line. A command line that merely
//! mentions the name (a log tailer, an editor) is a false positive, and two
//! artifacts sharing a file name in different directories get identical
//! verdicts. Outcomes with several matching processes are surfaced as
//! [`Correlation::Ambiguous`] instead of silently collapsed; the first match
//! in listing order stays the actionable pid.

use crate::artifact::{ArtifactRecord, Correlation};
use crate::prelude::*;
use crate::snapshot::ProcessSnapshot;

/// Annotate each record in place against one frozen snapshot. The snapshot
/// must be captured before the first record is examined and is never
/// refreshed mid-pass, so a single pass is internally consistent.
pub fn correlate(records: &mut [ArtifactRecord], snapshot: &ProcessSnapshot) {
    for record in records {
        let mut pids = snapshot.matching_pids(&record.name);
        record.correlation = match pids.len() {
            0 => Correlation::NoMatch,
            1 => Correlation::Unique(pids.remove(0)),
            _ => {
                debug!(
                    "{} matched several processes ({}), acting on the first",
                    record.name,
                    pids.join(", ")
                );
                Correlation::Ambiguous(pids)
            }
        };
    }
}
