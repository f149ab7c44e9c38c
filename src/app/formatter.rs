use crate::app::models::{RetentionSpec, RunReport};
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_header(target: &Path, spec: &RetentionSpec, dry_run: bool) -> String {
        let dirs: Vec<String> = spec
            .keep_dir_paths
            .iter()
            .map(|d| d.display().to_string())
            .collect();

        let mut out = String::new();
        out.push_str(&format!("Target directory: {}\n", target.display()));
        out.push_str(&format!("Keep files: {}\n", format_list(&spec.keep_file_names)));
        out.push_str(&format!("Keep dirs: {}\n", format_list(&dirs)));
        out.push_str(&format!("Dry run: {}\n", dry_run));
        out.push_str(&"-".repeat(50));
        out
    }

    pub fn generate_summary(report: &RunReport) -> String {
        let mut out = String::new();

        if report.is_empty() && report.failures.is_empty() {
            out.push_str("Nothing to delete.\n");
        }

        if report.dry_run {
            out.push_str("Dry run complete, nothing was deleted:\n");
            out.push_str(&format!(
                "  Would delete files: {}\n",
                report.candidate_files.len()
            ));
            out.push_str(&format!(
                "  Would delete directories: {}",
                report.candidate_dirs.len()
            ));
        } else {
            out.push_str("Deletion complete:\n");
            out.push_str(&format!("  Files: {}\n", report.deleted_files.len()));
            out.push_str(&format!("  Directories: {}", report.deleted_dirs.len()));
        }

        if !report.failures.is_empty() {
            out.push_str(&format!("\n  Failed: {}", report.failures.len()));
            for (path, reason) in &report.failures {
                out.push_str(&format!("\n    - {}: {}", path.display(), reason));
            }
        }

        out
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
