use crate::app::models::EntryKind;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

/// Sink for everything a run has to tell the operator.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// An entry a dry run would delete.
    fn candidate(&mut self, kind: EntryKind, path: &Path);
    /// An entry that was deleted.
    fn removed(&mut self, kind: EntryKind, path: &Path);
}

/// Prints item lines to stdout relative to the target; errors go through the logger.
pub struct ConsoleReporter {
    root: PathBuf,
}

impl ConsoleReporter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn display(&self, path: &Path) -> String {
        diff_paths(path, &self.root)
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }

    fn candidate(&mut self, kind: EntryKind, path: &Path) {
        println!("[DRY RUN] Would delete {}: {}", kind.label(), self.display(path));
    }

    fn removed(&mut self, kind: EntryKind, path: &Path) {
        println!("Deleted {}: {}", kind.label(), self.display(path));
    }
}
