//! Filesystem discovery of deployable archives.

use std::path::Path;

use walkdir::WalkDir;

use crate::artifact::ArtifactRecord;
use crate::prelude::*;

/// Recursively walk `root` and emit one record per file whose name contains
/// `suffix`. The match is literal containment, not anchored to the end of
/// the name, so `foo.jarx` matches the suffix `.jar`.
///
/// Entries are visited in the order the filesystem returns them; no sorting
/// is imposed. Any entry that cannot be statted or listed aborts the scan,
/// there are no partial results.
pub fn scan(root: &Path, suffix: &str) -> Result<Vec<ArtifactRecord>> {
    let mut records = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.contains(suffix) {
            records.push(ArtifactRecord::new(name.into_owned(), entry.into_path()));
        }
    }
    debug!(
        "Found {} artifact(s) containing {:?} under {}",
        records.len(),
        suffix,
        root.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    fn tree() -> TempDir {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("a.jar"));
        touch(&root.path().join("readme.txt"));
        fs::create_dir_all(root.path().join("sub/deep")).unwrap();
        touch(&root.path().join("sub/b.jar"));
        touch(&root.path().join("sub/deep/c.jarx"));
        // A directory whose name matches the suffix must not be emitted,
        // but its children must still be visited.
        fs::create_dir(root.path().join("lib.jar")).unwrap();
        touch(&root.path().join("lib.jar/inner.jar"));
        root
    }

    #[test]
    fn finds_every_matching_file_in_nested_directories() {
        let root = tree();
        let records = scan(root.path(), ".jar").unwrap();

        let mut names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        // c.jarx matches too: the suffix is a substring, not anchored.
        assert_eq!(names, ["a.jar", "b.jar", "c.jarx", "inner.jar"]);
    }

    #[test]
    fn records_carry_the_full_traversed_path() {
        let root = tree();
        let records = scan(root.path(), ".jar").unwrap();

        let a = records.iter().find(|r| r.name == "a.jar").unwrap();
        assert_eq!(a.path, root.path().join("a.jar"));
        let b = records.iter().find(|r| r.name == "b.jar").unwrap();
        assert_eq!(b.path, root.path().join("sub").join("b.jar"));
    }

    #[test]
    fn fresh_records_start_stopped() {
        let root = tree();
        let records = scan(root.path(), ".jar").unwrap();
        assert!(records.iter().all(|r| !r.running()));
    }

    #[test]
    fn scanning_an_unchanged_tree_twice_yields_equal_records() {
        let root = tree();
        let first = scan(root.path(), ".jar").unwrap();
        let second = scan(root.path(), ".jar").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_aborts_the_scan() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");
        assert!(scan(&missing, ".jar").is_err());
    }
}
