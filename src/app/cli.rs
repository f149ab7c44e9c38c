use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # Keep README.md and LICENSE, delete everything else
  keepclean /path/to/dir --keep-files README.md LICENSE

  # Keep everything under docs/
  keepclean /path/to/dir --keep-dirs docs/

  # Combine both
  keepclean /path/to/dir --keep-files .gitignore --keep-dirs src/ tests/

  # Preview without deleting anything
  keepclean /path/to/dir --keep-files README.md --dry-run

  # Read keep lists from a config file
  keepclean /path/to/dir --config keep.json

Config file (JSON, or TOML when the file ends in .toml):
  {
    \"keep_files\": [\"README.md\", \".gitignore\"],
    \"keep_dirs\": [\"src\", \"docs\", \"tests/unit\"]
  }

keep_dirs accepts absolute paths and paths relative to the target directory.";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Delete everything in a directory except the files and directories you keep",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Directory to clean
    pub target_dir: PathBuf,

    /// File names to keep wherever they appear in the tree
    #[arg(long, num_args = 0..)]
    pub keep_files: Vec<String>,

    /// Directories whose whole subtree is kept (absolute or relative to the target)
    #[arg(long, num_args = 0..)]
    pub keep_dirs: Vec<String>,

    /// JSON or TOML file with additional keep_files / keep_dirs entries
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only list what would be deleted
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
