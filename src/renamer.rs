use anyhow::{anyhow, Result};
use colored::*;
use log::info;
use std::fs;
use std::path::Path;

/// Moves a file to its canonical path. The only place the crate touches names on disk.
pub trait Renamer {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;
}

pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        if from == to {
            info!("Already canonical: {}", from.display());
            return Ok(());
        }
        if to.exists() {
            return Err(anyhow!("Refusing to overwrite existing file: {:?}", to));
        }
        fs::rename(from, to)?;
        info!("Renamed:\n    {}\n--> {}", from.display(), to.display());
        Ok(())
    }
}

pub struct DryRunRenamer;

impl Renamer for DryRunRenamer {
    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        println!(
            "{} {} {} {}",
            "RENAME:".green().bold(),
            file_name(from).bright_white(),
            "→".bright_blue().bold(),
            file_name(to).bright_cyan()
        );
        info!("Dry run, not renaming {:?} -> {:?}", from, to);
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
