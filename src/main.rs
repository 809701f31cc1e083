mod cli;
mod error;
mod fields;
mod json_output;
mod metadata;
mod prompt;
mod renamer;
mod scanner;
mod session;
mod stem;
mod text;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use colored::*;
use log::{info, warn};
use metadata::MetaData;
use prompt::{Decision, Prompter, TerminalPrompter};
use renamer::{DryRunRenamer, FsRenamer, Renamer};
use scanner::Scanner;
use session::Session;
use std::collections::HashSet;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
    info!("Starting book renamer with args: {:?}", args);

    let mut prompter = TerminalPrompter::stdio();
    let mut renamer: Box<dyn Renamer> = if args.dry_run {
        Box::new(DryRunRenamer)
    } else {
        Box::new(FsRenamer)
    };

    if args.library {
        run_library(&args, &mut prompter, renamer.as_mut())?;
    } else {
        run_inbox(&args, &mut prompter, renamer.as_mut())?;
    }

    if !args.json {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Operation completed successfully!".bright_green().bold()
        );
    }
    Ok(())
}

/// One file at a time, each taken to completion before the next scan.
fn run_inbox(args: &Args, prompter: &mut dyn Prompter, renamer: &mut dyn Renamer) -> Result<()> {
    let scanner = Scanner::new(&args.path, 1, args.get_extensions())?;
    let mut skips: HashSet<PathBuf> = HashSet::new();

    while let Some(path) = scanner.next_inbox_file(&skips)? {
        match prompter.decide(&path)? {
            Decision::Process => {
                let target = Session::start(&path).run(prompter, renamer)?;
                info!("Processed {:?} -> {:?}", path, target);
            }
            Decision::Skip => info!("Skipping {:?}", path),
            Decision::Quit => break,
        }
        skips.insert(path);
    }
    Ok(())
}

fn run_library(args: &Args, prompter: &mut dyn Prompter, renamer: &mut dyn Renamer) -> Result<()> {
    let scanner = Scanner::new(&args.path, args.max_depth, args.get_extensions())?;
    let files = scanner.library_files();
    info!("Found {} files that are not normalized", files.len());

    let mut renames = Vec::new();
    let mut unparsed = Vec::new();
    for path in files {
        match MetaData::normalize(&path) {
            Ok(target) => renames.push((path, target)),
            Err(err) => {
                warn!("{}", err);
                unparsed.push(path);
            }
        }
    }

    if args.json {
        let plan = json_output::RenamePlan::from_results(renames, unparsed, scanner.root());
        println!("{}", plan.to_json()?);
        return Ok(());
    }

    for (from, to) in &renames {
        if args.dry_run || prompter.confirm(from, to)? {
            renamer.rename(from, to)?;
        } else {
            info!("Skipping {:?}", from);
        }
    }

    if !unparsed.is_empty() {
        println!(
            "\n{} {} files could not be parsed:",
            "⚠️".yellow(),
            unparsed.len().to_string().yellow().bold()
        );
        for path in &unparsed {
            println!("  {} {}", "-".bright_yellow(), path.display().to_string().bright_black());
        }
    }
    Ok(())
}
