use crate::error::{NameError, Result};
use crate::text::{clean, trim_delimiters};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ET_AL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\w\s\-]+) et al$").unwrap());
static SUBTITLE_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[–—]").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// A lead author standing in for "this author and others".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorEtAl {
    author: String,
}

impl AuthorEtAl {
    pub fn new(author: &str) -> Self {
        Self {
            author: clean(author),
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        ET_AL
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| Self::new(m.as_str()))
            .ok_or_else(|| NameError::AuthorEtAlParse {
                text: text.to_string(),
            })
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for AuthorEtAl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} et al", self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Authors {
    /// Explicit names in order of appearance. Empty for anonymous works.
    Named(Vec<String>),
    EtAl(AuthorEtAl),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::Named(Vec::new())
    }
}

impl Authors {
    /// Names are cleaned; any that clean down to nothing are dropped.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Authors::Named(
            names
                .into_iter()
                .map(|n| clean(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    /// Build from entries typed at the prompt. A single `<name> et al` entry is
    /// taken as the et-al form.
    pub fn from_entries(entries: Vec<String>) -> Self {
        if let [only] = entries.as_slice() {
            if let Ok(et_al) = AuthorEtAl::parse(only.trim()) {
                return Authors::EtAl(et_al);
            }
        }
        Authors::named(entries)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Authors::Named(names) if names.is_empty())
    }

    /// Entries to offer back as prompt defaults.
    pub fn to_entries(&self) -> Vec<String> {
        match self {
            Authors::Named(names) => names.clone(),
            Authors::EtAl(et_al) => vec![et_al.to_string()],
        }
    }
}

/// Split `Title – Sub1 — Sub2` into the title and its subtitles.
pub fn split_title_and_subtitles(text: &str) -> Result<(String, Vec<String>)> {
    let trimmed = trim_delimiters(text);
    if trimmed.is_empty() {
        return Err(NameError::EmptyField {
            text: text.to_string(),
        });
    }
    let mut pieces = SUBTITLE_DELIMITER.split(trimmed).map(clean);
    let title = pieces.next().unwrap_or_default();
    if title.is_empty() {
        return Err(NameError::EmptyField {
            text: text.to_string(),
        });
    }
    Ok((title, pieces.collect()))
}

pub fn split_authors(text: &str) -> Authors {
    let trimmed = trim_delimiters(text);
    if trimmed.is_empty() {
        return Authors::default();
    }
    match AuthorEtAl::parse(trimmed) {
        Ok(et_al) => Authors::EtAl(et_al),
        Err(_) => Authors::named(trimmed.split(',')),
    }
}

pub fn parse_year(text: &str) -> Result<u32> {
    let text = text.trim();
    if !YEAR.is_match(text) {
        return Err(NameError::InvalidYear {
            text: text.to_string(),
        });
    }
    text.parse().map_err(|_| NameError::InvalidYear {
        text: text.to_string(),
    })
}

/// A title, subtitle or author entry must be usable inside a file name.
pub fn validate_field(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.contains('/') || text.contains('\0') {
        return Err(NameError::InvalidField {
            text: text.to_string(),
        });
    }
    Ok(text)
}
