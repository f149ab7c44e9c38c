pub mod cli;
pub mod config;
pub mod deleter;
pub mod formatter;
pub mod models;
pub mod prompt;
pub mod reporter;
pub mod retention;
pub mod scanner;

use anyhow::Result;
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_spec;
use self::deleter::{check_target, Deleter};
use self::formatter::OutputGenerator;
use self::models::Outcome;
use self::prompt::{Confirm, StdinConfirm};
use self::reporter::{ConsoleReporter, Reporter};

/// Parses arguments and runs against the real console.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let mut reporter = ConsoleReporter::new(args.target_dir.clone());
    execute(args, &mut StdinConfirm, &mut reporter)?;
    Ok(())
}

/// Resolve keep lists, confirm, then delete.
pub fn execute(
    args: Cli,
    confirm: &mut dyn Confirm,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    let spec = resolve_spec(&args);
    let target = args.target_dir.as_path();

    reporter.info(&OutputGenerator::generate_header(target, &spec, args.dry_run));

    // Fail on a bad target before asking anything
    check_target(target)?;

    if !args.dry_run && !args.yes && !confirm.confirm("Really delete? (y/N):")? {
        reporter.info("Cancelled.");
        return Ok(Outcome::Cancelled);
    }

    let report = Deleter::new(target, &spec, args.dry_run).run(reporter)?;

    reporter.info("");
    reporter.info(&OutputGenerator::generate_summary(&report));

    Ok(Outcome::Completed(report))
}
