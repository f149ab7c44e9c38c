use crate::app::cli::Cli;
use crate::app::models::RetentionSpec;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keep lists as written in a config file. Missing keys are empty lists.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeepListFile {
    pub keep_files: Vec<String>,
    pub keep_dirs: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} not found")]
    NotFound(PathBuf),
    #[error("config file {path} is not valid: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("failed to read config file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a keep-list document. `.toml` files are parsed as TOML, anything else as JSON.
pub fn load_keep_lists(path: &Path) -> Result<KeepListFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Load {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ConfigError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

fn merge_vecs(first: Vec<String>, mut second: Vec<String>) -> Vec<String> {
    let mut combined = first;
    combined.append(&mut second);
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Builds the run's allow-list: CLI values first, config file values appended.
///
/// A config file that is missing or broken is reported and treated as empty,
/// so the CLI lists still apply.
pub fn resolve_spec(cli: &Cli) -> RetentionSpec {
    let from_file = match cli.config.as_deref() {
        Some(path) => match load_keep_lists(path) {
            Ok(lists) => {
                log::info!("Loaded keep lists from {}", path.display());
                lists
            }
            Err(err) => {
                log::warn!("{}; continuing without it", err);
                KeepListFile::default()
            }
        },
        None => KeepListFile::default(),
    };

    let keep_file_names = merge_vecs(cli.keep_files.clone(), from_file.keep_files);
    for name in &keep_file_names {
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            log::warn!(
                "keep file '{}' contains a path separator and will never match a file name",
                name
            );
        }
    }

    let keep_dir_paths = merge_vecs(cli.keep_dirs.clone(), from_file.keep_dirs)
        .into_iter()
        .map(PathBuf::from)
        .collect();

    RetentionSpec {
        keep_file_names,
        keep_dir_paths,
    }
}
