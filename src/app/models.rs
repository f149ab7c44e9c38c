use std::path::PathBuf;

/// The merged allow-list for one run. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionSpec {
    /// Bare file names matched against the base name of every file in the tree.
    pub keep_file_names: Vec<String>,
    /// Directories (absolute or relative to the target) whose subtree is kept.
    pub keep_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// A single path discovered during the walk.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub depth: usize,
    pub kind: EntryKind,
}

/// What one run deleted, would have deleted, or failed to delete.
#[derive(Debug, Default)]
pub struct RunReport {
    pub dry_run: bool,
    pub deleted_files: Vec<PathBuf>,
    pub deleted_dirs: Vec<PathBuf>,
    pub candidate_files: Vec<PathBuf>,
    pub candidate_dirs: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record_candidate(&mut self, kind: EntryKind, path: PathBuf) {
        match kind {
            EntryKind::File => self.candidate_files.push(path),
            EntryKind::Directory => self.candidate_dirs.push(path),
        }
    }

    pub fn record_deleted(&mut self, kind: EntryKind, path: PathBuf) {
        match kind {
            EntryKind::File => self.deleted_files.push(path),
            EntryKind::Directory => self.deleted_dirs.push(path),
        }
    }

    /// True when the run neither deleted nor would have deleted anything.
    pub fn is_empty(&self) -> bool {
        self.deleted_files.is_empty()
            && self.deleted_dirs.is_empty()
            && self.candidate_files.is_empty()
            && self.candidate_dirs.is_empty()
    }
}

/// How a run ended when it did not fail outright.
#[derive(Debug)]
pub enum Outcome {
    Completed(RunReport),
    Cancelled,
}
