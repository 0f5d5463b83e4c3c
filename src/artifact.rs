use std::path::PathBuf;

/// Placeholder displayed in place of a pid for artifacts with no correlated
/// process.
pub const PID_SENTINEL: &str = "-";

/// Outcome of matching one artifact against the process snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correlation {
    /// No process command line contains the artifact's file name.
    NoMatch,
    /// Exactly one process matched.
    Unique(String),
    /// Several processes matched. Pids are kept in listing order; the first
    /// one is the pid a lifecycle operation acts on.
    Ambiguous(Vec<String>),
}

/// One discovered archive, annotated with its correlation outcome.
///
/// Records are created fresh on every scan and mutated exactly once, by the
/// correlator. No identity persists across scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    /// File name of the archive, used as the matching key and display label.
    pub name: String,
    /// Full traversed path to the archive.
    pub path: PathBuf,
    pub correlation: Correlation,
}

impl ArtifactRecord {
    pub fn new(name: String, path: PathBuf) -> Self {
        ArtifactRecord {
            name,
            path,
            correlation: Correlation::NoMatch,
        }
    }

    pub fn running(&self) -> bool {
        !matches!(self.correlation, Correlation::NoMatch)
    }

    /// The pid a lifecycle operation acts on, if any.
    pub fn pid(&self) -> Option<&str> {
        match &self.correlation {
            Correlation::NoMatch => None,
            Correlation::Unique(pid) => Some(pid),
            Correlation::Ambiguous(pids) => pids.first().map(String::as_str),
        }
    }

    pub fn state_label(&self) -> &'static str {
        match &self.correlation {
            Correlation::NoMatch => "Off",
            Correlation::Unique(_) => "On",
            Correlation::Ambiguous(_) => "On (ambiguous)",
        }
    }

    /// Pid as displayed: the sentinel if and only if the artifact is not
    /// running.
    pub fn pid_label(&self) -> &str {
        self.pid().unwrap_or(PID_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(correlation: Correlation) -> ArtifactRecord {
        ArtifactRecord {
            name: "foo.jar".into(),
            path: PathBuf::from("/opt/foo.jar"),
            correlation,
        }
    }

    #[test]
    fn fresh_record_is_stopped_with_sentinel_pid() {
        let record = ArtifactRecord::new("foo.jar".into(), PathBuf::from("/opt/foo.jar"));
        assert!(!record.running());
        assert_eq!(record.pid(), None);
        assert_eq!(record.pid_label(), PID_SENTINEL);
        assert_eq!(record.state_label(), "Off");
    }

    #[test]
    fn unique_match_exposes_its_pid() {
        let record = record(Correlation::Unique("5678".into()));
        assert!(record.running());
        assert_eq!(record.pid(), Some("5678"));
        assert_eq!(record.pid_label(), "5678");
        assert_eq!(record.state_label(), "On");
    }

    #[test]
    fn ambiguous_match_acts_on_the_first_pid() {
        let record = record(Correlation::Ambiguous(vec!["11".into(), "22".into()]));
        assert!(record.running());
        assert_eq!(record.pid(), Some("11"));
        assert_eq!(record.state_label(), "On (ambiguous)");
    }

    #[test]
    fn pid_is_sentinel_iff_not_running() {
        for correlation in [
            Correlation::NoMatch,
            Correlation::Unique("1".into()),
            Correlation::Ambiguous(vec!["1".into(), "2".into()]),
        ] {
            let record = record(correlation);
            assert_eq!(record.pid_label() == PID_SENTINEL, !record.running());
        }
    }
}
