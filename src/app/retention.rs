//! Keep/delete classification for entries under the target directory.
//!
//! A file is kept when its base name is on the keep list. Any entry is kept
//! when its resolved path is a keep directory or lies beneath one.

use crate::app::models::{EntryKind, RetentionSpec};
use std::fs;
use std::path::{Path, PathBuf};

pub struct RetentionPolicy<'a> {
    spec: &'a RetentionSpec,
    resolved_dirs: Vec<PathBuf>,
}

impl<'a> RetentionPolicy<'a> {
    /// Resolves every keep directory against `target`. Entries that cannot be
    /// resolved (usually because they do not exist) are dropped.
    pub fn new(spec: &'a RetentionSpec, target: &Path) -> Self {
        let resolved_dirs = spec
            .keep_dir_paths
            .iter()
            .filter_map(|dir| {
                let joined = if dir.is_absolute() {
                    dir.clone()
                } else {
                    target.join(dir)
                };
                match fs::canonicalize(&joined) {
                    Ok(resolved) => Some(resolved),
                    Err(err) => {
                        log::debug!("Skipping keep dir {}: {}", joined.display(), err);
                        None
                    }
                }
            })
            .collect();

        Self {
            spec,
            resolved_dirs,
        }
    }

    /// Name rule first, then directory containment. Names only ever match files.
    ///
    /// Containment holds when the fully resolved path (symlinks followed) lies
    /// under a keep dir, or when the entry itself sits under one.
    pub fn keeps(&self, path: &Path, kind: EntryKind) -> bool {
        if kind == EntryKind::File && self.matches_name(path) {
            return true;
        }

        if self.resolved_dirs.is_empty() {
            return false;
        }

        let under_keep_dir = |resolved: &PathBuf| {
            self.resolved_dirs
                .iter()
                .any(|keep_dir| resolved.starts_with(keep_dir))
        };

        fs::canonicalize(path).ok().is_some_and(|r| under_keep_dir(&r))
            || entry_location(path).is_some_and(|r| under_keep_dir(&r))
    }

    fn matches_name(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.spec.keep_file_names.iter().any(|keep| keep == name)
    }
}

/// Where the entry itself lives: the parent is resolved and the final
/// component re-attached, so a symlink is not followed.
fn entry_location(path: &Path) -> Option<PathBuf> {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            fs::canonicalize(parent).ok().map(|p| p.join(name))
        }
        _ => fs::canonicalize(path).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn spec(files: &[&str], dirs: &[&str]) -> RetentionSpec {
        RetentionSpec {
            keep_file_names: files.iter().map(|s| s.to_string()).collect(),
            keep_dir_paths: dirs.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn name_rule_matches_at_any_depth() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("A.txt"), "").unwrap();
        fs::write(root.join("a/b/c/A.txt"), "").unwrap();

        let spec = spec(&["A.txt"], &[]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("A.txt"), EntryKind::File));
        assert!(policy.keeps(&root.join("a/b/c/A.txt"), EntryKind::File));
    }

    #[test]
    fn name_rule_ignores_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("build")).unwrap();

        let spec = spec(&["build"], &[]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("build"), EntryKind::File));
        assert!(!policy.keeps(&root.join("build"), EntryKind::Directory));
    }

    #[test]
    fn keep_dir_protects_itself_and_descendants() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/api/v1")).unwrap();
        fs::write(root.join("docs/api/v1/index.md"), "").unwrap();
        fs::write(root.join("main.py"), "").unwrap();

        let spec = spec(&[], &["docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("docs"), EntryKind::Directory));
        assert!(policy.keeps(&root.join("docs/api/v1"), EntryKind::Directory));
        assert!(policy.keeps(&root.join("docs/api/v1/index.md"), EntryKind::File));
        assert!(!policy.keeps(&root.join("main.py"), EntryKind::File));
    }

    #[test]
    fn containment_is_component_wise() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::create_dir(root.join("docs-old")).unwrap();
        fs::write(root.join("docs-old/x.md"), "").unwrap();

        let spec = spec(&[], &["docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(!policy.keeps(&root.join("docs-old"), EntryKind::Directory));
        assert!(!policy.keeps(&root.join("docs-old/x.md"), EntryKind::File));
    }

    #[test]
    fn absolute_keep_dirs_and_trailing_slashes_resolve() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::write(root.join("src/nested/lib.rs"), "").unwrap();
        let absolute = root.join("src").to_string_lossy().into_owned();

        let spec = spec(&[], &[absolute.as_str(), "src/"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("src/nested/lib.rs"), EntryKind::File));
    }

    #[test]
    fn unresolvable_keep_dir_is_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("docs/readme.md"), "").unwrap();

        let spec = spec(&[], &["does/not/exist", "docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("docs/readme.md"), EntryKind::File));
    }

    #[test]
    fn unmatched_paths_are_delete_eligible() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/C.txt"), "").unwrap();

        let spec = spec(&["A.txt"], &["docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(!policy.keeps(&root.join("sub/C.txt"), EntryKind::File));
        assert!(!policy.keeps(&root.join("sub"), EntryKind::Directory));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_into_keep_dir_is_kept() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("docs/readme.md"), "").unwrap();
        std::os::unix::fs::symlink(root.join("docs/readme.md"), root.join("alias.md")).unwrap();
        std::os::unix::fs::symlink(root.join("docs"), root.join("docslink")).unwrap();
        std::os::unix::fs::symlink(root.join("elsewhere.md"), root.join("dangling.md")).unwrap();

        let spec = spec(&[], &["docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("alias.md"), EntryKind::File));
        assert!(policy.keeps(&root.join("docslink"), EntryKind::File));
        assert!(!policy.keeps(&root.join("dangling.md"), EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_inside_keep_dir_stays_kept() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::create_dir(root.join("other")).unwrap();
        fs::write(root.join("other/target.txt"), "").unwrap();
        std::os::unix::fs::symlink(root.join("other/target.txt"), root.join("docs/link.txt"))
            .unwrap();

        let spec = spec(&[], &["docs"]);
        let policy = RetentionPolicy::new(&spec, root);

        assert!(policy.keeps(&root.join("docs/link.txt"), EntryKind::File));
        assert!(!policy.keeps(&root.join("other/target.txt"), EntryKind::File));
    }
}
