//! File system helpers for target discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Check if a directory exists at the given path.
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Recursively collect entries under `root` whose name carries the given
/// extension, in filesystem traversal order.
///
/// Matches on the name alone, so a directory named like a target file is
/// collected too and surfaces later as a read failure, the same way a
/// recursive glob would return it.
pub fn collect_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.java"), "a").unwrap();
        fs::write(dir.path().join("nested/b.java"), "b").unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();

        let mut found = collect_files_with_extension(dir.path(), "java");
        found.sort();

        assert_eq!(
            found,
            vec![dir.path().join("a.java"), dir.path().join("nested/b.java")]
        );
    }

    #[test]
    fn test_collect_includes_matching_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("odd.java")).unwrap();

        let found = collect_files_with_extension(dir.path(), "java");
        assert_eq!(found, vec![dir.path().join("odd.java")]);
    }

    #[test]
    fn test_directory_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(directory_exists(dir.path()));
        assert!(!directory_exists(&dir.path().join("missing")));
    }
}
