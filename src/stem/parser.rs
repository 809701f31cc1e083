use super::StemMetaData;
use crate::error::{NameError, Result};
use crate::fields::{split_authors, split_title_and_subtitles};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Both sides at most this many characters: read as `<title>-<author>`.
const SHORT_SIDE_LIMIT: usize = 20;

struct Rule {
    name: &'static str,
    regex: Regex,
    build: fn(&Captures<'_>) -> Result<StemMetaData>,
}

// Earlier rules win even when a later, looser one would also match.
static CASCADE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "year-prefix",
            // The author charset stops site tags like "(z-lib.org)" being read as authors.
            regex: Regex::new(r"^([0-9]+)[\s\-—–]+(.+?)[\s\-—–]?(?:\(([\s\w\-,'èï]+)\))?$").unwrap(),
            build: year_prefix,
        },
        Rule {
            name: "trailing-year",
            regex: Regex::new(r"^([\w\s\-.,]+)\s+-\s+(.+?)\s+\(([0-9]+)\)$").unwrap(),
            build: trailing_year,
        },
        Rule {
            name: "hyphen-split",
            regex: Regex::new(r"^(.+?)-(.+)$").unwrap(),
            build: hyphen_split,
        },
        Rule {
            name: "loose-hyphen-split",
            regex: Regex::new(r"^(.+?)\s*-\s*(.+)$").unwrap(),
            build: loose_hyphen_split,
        },
    ]
});

pub(super) fn parse(stem: &str) -> Result<StemMetaData> {
    for rule in CASCADE.iter() {
        let Some(caps) = rule.regex.captures(stem) else {
            continue;
        };
        match (rule.build)(&caps) {
            Ok(meta) => {
                debug!("Parsed {:?} with rule {}", stem, rule.name);
                return Ok(meta);
            }
            Err(err) => debug!("Rule {} rejected {:?}: {}", rule.name, stem, err),
        }
    }
    Err(NameError::StemParse {
        stem: stem.to_string(),
    })
}

fn year_prefix(caps: &Captures<'_>) -> Result<StemMetaData> {
    build(
        Some(group(caps, 1)),
        group(caps, 2),
        caps.get(3).map_or("", |m| m.as_str()),
    )
}

fn trailing_year(caps: &Captures<'_>) -> Result<StemMetaData> {
    build(Some(group(caps, 3)), group(caps, 2), group(caps, 1))
}

fn hyphen_split(caps: &Captures<'_>) -> Result<StemMetaData> {
    let (first, second) = (group(caps, 1), group(caps, 2));
    let (first_len, second_len) = (first.chars().count(), second.chars().count());
    if first_len.max(second_len) <= SHORT_SIDE_LIMIT {
        build(None, first, second)
    } else if first_len <= second_len {
        build(None, second, first)
    } else {
        build(None, first, second)
    }
}

fn loose_hyphen_split(caps: &Captures<'_>) -> Result<StemMetaData> {
    let (first, second) = (group(caps, 1), group(caps, 2));
    if first.chars().count() <= second.chars().count() {
        build(None, second, first)
    } else {
        build(None, first, second)
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn build(year: Option<&str>, title_and_subtitles: &str, authors: &str) -> Result<StemMetaData> {
    let year = match year {
        Some(text) => Some(text.parse::<u32>().map_err(|_| NameError::InvalidYear {
            text: text.to_string(),
        })?),
        None => None,
    };
    let (title, subtitles) = split_title_and_subtitles(title_and_subtitles)?;
    Ok(StemMetaData::new(
        year,
        std::iter::once(title).chain(subtitles),
        split_authors(authors),
    ))
}
