use crate::app::models::{EntryKind, FileEntry};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Lists every entry below the root, deepest first.
    ///
    /// Nothing is filtered out: hidden files, ignored files and `.git` are all
    /// visited. Symlinks are reported as files and never followed.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                    if let Some(processed) = Self::process_entry(entry.path(), entry.depth(), is_dir)
                    {
                        entries.push(processed);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        // Children before parents, so directory emptiness can be judged in order
        entries.sort_by(|a, b| b.depth.cmp(&a.depth).then_with(|| a.path.cmp(&b.path)));
        entries
    }

    fn process_entry(path: &Path, depth: usize, is_dir: bool) -> Option<FileEntry> {
        // The root itself is never a candidate
        if depth == 0 {
            return None;
        }

        Some(FileEntry {
            path: path.to_path_buf(),
            depth,
            kind: if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        })
    }
}
