use crate::fields::Authors;
use crate::metadata::MetaData;
use crate::prompt::{Prompter, Review};
use crate::renamer::Renamer;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingYear,
    CollectingTitle,
    CollectingAuthors,
    Reviewing,
    Done,
}

/// Completes the metadata for one file, then hands it to the renamer.
pub struct Session {
    path: PathBuf,
    meta: MetaData,
    stage: Stage,
    reviewed: bool,
}

impl Session {
    /// Start in review when the name already parses to a complete record,
    /// otherwise collect every field with whatever could be pre-filled.
    pub fn start(path: &Path) -> Self {
        let meta = match MetaData::from_path(path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!("{}; asking for every field", err);
                MetaData::blank(path)
            }
        };
        let stage = if meta.is_complete() {
            Stage::Reviewing
        } else {
            Stage::CollectingYear
        };
        Self {
            path: path.to_path_buf(),
            meta,
            stage,
            reviewed: false,
        }
    }

    #[allow(dead_code)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[allow(dead_code)]
    pub fn metadata(&self) -> &MetaData {
        &self.meta
    }

    /// Run one state transition.
    pub fn step(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        self.stage = match self.stage {
            Stage::CollectingYear => {
                let year = prompter.year(self.meta.stem_metadata().year())?;
                self.meta = self.meta.with_year(year);
                self.after_collecting(Stage::CollectingTitle)
            }
            Stage::CollectingTitle => {
                let defaults = self.meta.stem_metadata().title_and_subtitles().to_vec();
                let entries = prompter.title_and_subtitles(&defaults)?;
                self.meta = self.meta.with_title_and_subtitles(entries);
                self.after_collecting(Stage::CollectingAuthors)
            }
            Stage::CollectingAuthors => {
                let defaults = self.meta.stem_metadata().authors().to_entries();
                let entries = prompter.authors(&defaults)?;
                self.meta = self.meta.with_authors(Authors::from_entries(entries));
                Stage::Reviewing
            }
            Stage::Reviewing => {
                self.reviewed = true;
                match prompter.review(&self.meta)? {
                    Review::Confirm => self.first_missing_field().unwrap_or(Stage::Done),
                    Review::Year => Stage::CollectingYear,
                    Review::TitleAndSubtitles => Stage::CollectingTitle,
                    Review::Authors => Stage::CollectingAuthors,
                }
            }
            Stage::Done => Stage::Done,
        };
        Ok(())
    }

    /// Drive the session to completion and rename. Returns the canonical path.
    pub fn run(mut self, prompter: &mut dyn Prompter, renamer: &mut dyn Renamer) -> Result<PathBuf> {
        while self.stage != Stage::Done {
            self.step(prompter)?;
        }
        let target = self.meta.to_path()?;
        renamer.rename(&self.path, &target)?;
        Ok(target)
    }

    fn after_collecting(&self, next: Stage) -> Stage {
        if self.reviewed {
            Stage::Reviewing
        } else {
            next
        }
    }

    fn first_missing_field(&self) -> Option<Stage> {
        let stem = self.meta.stem_metadata();
        if stem.year().is_none() {
            Some(Stage::CollectingYear)
        } else if stem.title().is_none() {
            Some(Stage::CollectingTitle)
        } else {
            None
        }
    }
}
