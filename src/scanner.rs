use crate::metadata::MetaData;
use anyhow::{anyhow, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loose check used for the inbox: anything starting `<year> — ` has been handled already.
static LOOKS_CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+ — .+").unwrap());

const PARTIAL_SUFFIXES: &[&str] = &[".part", ".download", ".crdownload"];

pub struct Scanner {
    root_path: PathBuf,
    max_depth: usize,
    extensions: Vec<String>,
}

impl Scanner {
    pub fn new(path: &Path, max_depth: usize, extensions: Vec<String>) -> Result<Self> {
        let root_path = path.canonicalize()?;
        if !root_path.is_dir() {
            return Err(anyhow!("Path is not a directory: {:?}", path));
        }
        Ok(Scanner {
            root_path,
            max_depth,
            extensions,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Re-lists the top level on every call, so files renamed or removed since
    /// the last call are never returned.
    pub fn next_inbox_file(&self, skips: &HashSet<PathBuf>) -> Result<Option<PathBuf>> {
        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.root_path)? {
            let path = entry?.path();
            if !path.is_file() || skips.contains(&path) {
                continue;
            }
            if self.needs_processing(&path) && !is_in_progress(&path) {
                candidates.push(path);
            }
        }
        candidates.sort();
        debug!("Inbox has {} candidate files", candidates.len());
        Ok(candidates.into_iter().next())
    }

    /// Every accepted file under the root whose name is not canonical.
    pub fn library_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root_path)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| !is_hidden(path) && self.has_accepted_extension(path))
            .filter(|path| !MetaData::is_normalized(path))
            .collect();
        files.sort();
        debug!("Library scan found {} files to normalize", files.len());
        files
    }

    fn needs_processing(&self, path: &Path) -> bool {
        if is_hidden(path) || !self.has_accepted_extension(path) {
            return false;
        }
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        !LOOKS_CANONICAL.is_match(&name)
    }

    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// A download still being written, or a file with a sibling `<name>.part`.
fn is_in_progress(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    if PARTIAL_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return true;
    }
    path.with_file_name(format!("{}.part", name)).exists()
}
