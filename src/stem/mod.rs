//! Structured form of a book file stem, `<year> — <title>[ – <subtitle>]* [(<authors>)]`.

mod formatter;
mod parser;

use crate::error::Result;
use crate::fields::Authors;
use crate::text::clean;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StemMetaData {
    year: Option<u32>,
    title_and_subtitles: Vec<String>,
    authors: Authors,
}

impl StemMetaData {
    /// Every title, subtitle and author string is cleaned on the way in.
    pub fn new<I, S>(year: Option<u32>, title_and_subtitles: I, authors: Authors) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let authors = match authors {
            Authors::Named(names) => Authors::named(names),
            et_al => et_al,
        };
        Self {
            year,
            title_and_subtitles: title_and_subtitles
                .into_iter()
                .map(|t| clean(t.as_ref()))
                .collect(),
            authors,
        }
    }

    /// Parse a raw stem, trying each known naming convention in priority order.
    pub fn from_text(stem: &str) -> Result<Self> {
        parser::parse(stem)
    }

    /// Render the canonical stem. Fails unless year and title are present.
    pub fn to_text(&self) -> Result<String> {
        formatter::format(self)
    }

    /// True only when parsing then rendering gives back exactly `stem`.
    pub fn is_normalized(stem: &str) -> bool {
        Self::normalize(stem).is_ok_and(|text| text == stem)
    }

    pub fn normalize(stem: &str) -> Result<String> {
        Self::from_text(stem)?.to_text()
    }

    pub fn year(&self) -> Option<u32> {
        self.year
    }

    pub fn title_and_subtitles(&self) -> &[String] {
        &self.title_and_subtitles
    }

    pub fn title(&self) -> Option<&str> {
        self.title_and_subtitles.first().map(String::as_str)
    }

    pub fn subtitles(&self) -> &[String] {
        self.title_and_subtitles.get(1..).unwrap_or_default()
    }

    pub fn authors(&self) -> &Authors {
        &self.authors
    }

    pub fn is_complete(&self) -> bool {
        self.year.is_some() && !self.title_and_subtitles.is_empty()
    }

    pub fn with_year(&self, year: u32) -> Self {
        Self {
            year: Some(year),
            ..self.clone()
        }
    }

    pub fn with_title_and_subtitles<I, S>(&self, title_and_subtitles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(self.year, title_and_subtitles, self.authors.clone())
    }

    pub fn with_authors(&self, authors: Authors) -> Self {
        Self::new(self.year, &self.title_and_subtitles, authors)
    }

    /// Label/value rows for the review screen.
    pub fn table_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![(
            "year".to_string(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
        )];
        for (i, text) in self.title_and_subtitles.iter().enumerate() {
            let label = if i == 0 {
                "title".to_string()
            } else {
                format!("subtitle {}", i)
            };
            rows.push((label, text.clone()));
        }
        match &self.authors {
            Authors::Named(names) => {
                for (i, name) in names.iter().enumerate() {
                    rows.push((format!("author {}", i + 1), name.clone()));
                }
            }
            Authors::EtAl(et_al) => rows.push(("author et al".to_string(), et_al.author().to_string())),
        }
        rows
    }
}
