use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct RenameOperation {
    pub from: String,
    pub to: String,
    pub reason: String,
}

/// What a library review would do, for `--dry-run --json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenamePlan {
    pub renames: Vec<RenameOperation>,
    pub unparsed: Vec<String>,
}

impl RenamePlan {
    pub fn from_results(
        renames: Vec<(PathBuf, PathBuf)>,
        unparsed: Vec<PathBuf>,
        target_dir: &Path,
    ) -> Self {
        // Sorted for deterministic output
        let mut renames: Vec<RenameOperation> = renames
            .into_iter()
            .map(|(from, to)| RenameOperation {
                from: relative(&from, target_dir),
                to: relative(&to, target_dir),
                reason: "normalized".to_string(),
            })
            .collect();
        renames.sort_by(|a, b| a.from.cmp(&b.from));

        let mut unparsed: Vec<String> = unparsed.iter().map(|p| relative(p, target_dir)).collect();
        unparsed.sort();

        Self { renames, unparsed }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
