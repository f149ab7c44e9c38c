//! The two-pass destructive walk.
//!
//! Files go first. Directories follow, deepest first, and are only removed
//! once nothing is left inside them.

use crate::app::models::{EntryKind, FileEntry, RetentionSpec, RunReport};
use crate::app::reporter::Reporter;
use crate::app::retention::RetentionPolicy;
use crate::app::scanner::Scanner;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("target directory {0} does not exist")]
    TargetNotFound(PathBuf),
    #[error("target {0} is not a directory")]
    TargetNotADirectory(PathBuf),
}

pub fn check_target(target: &Path) -> Result<(), CleanupError> {
    match fs::metadata(target) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CleanupError::TargetNotADirectory(target.to_path_buf())),
        Err(_) => Err(CleanupError::TargetNotFound(target.to_path_buf())),
    }
}

pub struct Deleter<'a> {
    target: &'a Path,
    spec: &'a RetentionSpec,
    dry_run: bool,
}

impl<'a> Deleter<'a> {
    pub fn new(target: &'a Path, spec: &'a RetentionSpec, dry_run: bool) -> Self {
        Self {
            target,
            spec,
            dry_run,
        }
    }

    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunReport, CleanupError> {
        // Callers may skip `check_target`, and the target can vanish after confirmation
        check_target(self.target)?;

        let policy = RetentionPolicy::new(self.spec, self.target);
        let scanner = Scanner::new(self.target.to_path_buf());
        let mut report = RunReport::new(self.dry_run);
        // Paths removed in this run, or that a dry run would have removed
        let mut gone = HashSet::new();

        for entry in scanner.scan() {
            if entry.kind != EntryKind::File || policy.keeps(&entry.path, EntryKind::File) {
                continue;
            }
            self.dispose(&entry, &mut gone, &mut report, reporter);
        }

        // Rescan: the file pass changed the tree
        for entry in scanner.scan() {
            if entry.kind != EntryKind::Directory
                || policy.keeps(&entry.path, EntryKind::Directory)
            {
                continue;
            }
            match is_effectively_empty(&entry.path, &gone) {
                Ok(true) => self.dispose(&entry, &mut gone, &mut report, reporter),
                Ok(false) => {}
                Err(err) => {
                    reporter.error(&format!(
                        "Failed to inspect {}: {}",
                        entry.path.display(),
                        err
                    ));
                    report.failures.push((entry.path.clone(), err.to_string()));
                }
            }
        }

        Ok(report)
    }

    fn dispose(
        &self,
        entry: &FileEntry,
        gone: &mut HashSet<PathBuf>,
        report: &mut RunReport,
        reporter: &mut dyn Reporter,
    ) {
        if self.dry_run {
            reporter.candidate(entry.kind, &entry.path);
            report.record_candidate(entry.kind, entry.path.clone());
            gone.insert(entry.path.clone());
            return;
        }

        let result = match entry.kind {
            EntryKind::File => fs::remove_file(&entry.path),
            EntryKind::Directory => fs::remove_dir(&entry.path),
        };

        match result {
            Ok(()) => {
                reporter.removed(entry.kind, &entry.path);
                report.record_deleted(entry.kind, entry.path.clone());
                gone.insert(entry.path.clone());
            }
            Err(err) => {
                reporter.error(&format!(
                    "Failed to delete {} {}: {}",
                    entry.kind.label(),
                    entry.path.display(),
                    err
                ));
                report.failures.push((entry.path.clone(), err.to_string()));
            }
        }
    }
}

/// A directory is empty when every child still listed is already accounted for.
fn is_effectively_empty(dir: &Path, gone: &HashSet<PathBuf>) -> io::Result<bool> {
    for child in fs::read_dir(dir)? {
        if !gone.contains(&child?.path()) {
            return Ok(false);
        }
    }
    Ok(true)
}
