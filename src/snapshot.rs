//! One-shot capture of the OS process table.

use std::process::Command;

use crate::prelude::*;

/// One process from the listing: its pid and the raw line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: String,
    pub line: String,
}

/// The process table as it looked at one point in time. Captured once per
/// scan and never refreshed mid-pass, so every artifact of a pass is
/// correlated against the same frozen state.
#[derive(Debug, Clone)]
pub struct ProcessSnapshot {
    entries: Vec<ProcessEntry>,
}

impl ProcessSnapshot {
    /// Capture the process table by running `ps -e -o pid,command`.
    pub fn capture() -> Result<Self> {
        let output = Command::new("ps")
            .args(["-e", "-o", "pid,command"])
            .output()
            .context("Failed to run `ps`")?;
        if !output.status.success() {
            bail!(
                "`ps` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let listing =
            String::from_utf8(output.stdout).context("Failed to parse `ps` output as UTF-8")?;
        let snapshot = Self::from_listing(&listing);
        debug!("Captured {} process table lines", snapshot.entries().len());
        Ok(snapshot)
    }

    /// Build a snapshot from raw listing text, one process per line. Every
    /// line is kept in listing order, the `ps` header included.
    pub fn from_listing(listing: &str) -> Self {
        let entries = listing
            .lines()
            .map(|line| ProcessEntry {
                pid: first_token(line).to_string(),
                line: line.to_string(),
            })
            .collect();
        ProcessSnapshot { entries }
    }

    pub fn entries(&self) -> &[ProcessEntry] {
        &self.entries
    }

    /// Pids of every line whose text contains `name`, in listing order.
    pub fn matching_pids(&self, name: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.line.contains(name))
            .map(|entry| entry.pid.clone())
            .collect()
    }
}

/// First whitespace-delimited token of a listing line: skip the run of
/// leading spaces, then capture up to the next space. A line with no space
/// after the token yields the whole remainder, which is accepted as-is.
pub fn first_token(line: &str) -> &str {
    let rest = line.trim_start_matches(' ');
    match rest.split_once(' ') {
        Some((token, _)) => token,
        None => rest,
    }
}
