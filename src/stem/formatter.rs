use super::StemMetaData;
use crate::error::{NameError, Result};
use crate::fields::Authors;

pub(super) fn format(meta: &StemMetaData) -> Result<String> {
    let year = meta
        .year()
        .ok_or(NameError::IncompleteMetadata { what: "year" })?;
    let title = meta
        .title()
        .ok_or(NameError::IncompleteMetadata { what: "title" })?;

    let mut text = format!("{} — {}", year, title);
    for subtitle in meta.subtitles() {
        text.push_str(" – ");
        text.push_str(subtitle);
    }

    // Several named authors collapse to the lead author; the rest are not kept.
    match meta.authors() {
        Authors::Named(names) => match names.as_slice() {
            [] => {}
            [author] => text.push_str(&format!(" ({})", author)),
            [lead, ..] => text.push_str(&format!(" ({} et al)", lead)),
        },
        Authors::EtAl(et_al) => text.push_str(&format!(" ({})", et_al)),
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{split_authors, AuthorEtAl};

    fn meta(subtitles: &[&str], authors: Authors) -> StemMetaData {
        let mut parts = vec!["Title"];
        parts.extend_from_slice(subtitles);
        StemMetaData::new(Some(2000), parts, authors)
    }

    #[test]
    fn test_format_variants() {
        let one = || Authors::named(["Author"]);
        let two = || Authors::named(["Author1", "Author2"]);
        let cases = vec![
            (meta(&[], Authors::default()), "2000 — Title"),
            (meta(&["Sub"], Authors::default()), "2000 — Title – Sub"),
            (meta(&["Sub1", "Sub2"], Authors::default()), "2000 — Title – Sub1 – Sub2"),
            (meta(&[], one()), "2000 — Title (Author)"),
            (meta(&["Sub"], one()), "2000 — Title – Sub (Author)"),
            (meta(&["Sub1", "Sub2"], one()), "2000 — Title – Sub1 – Sub2 (Author)"),
            (meta(&[], two()), "2000 — Title (Author1 et al)"),
            (meta(&["Sub"], two()), "2000 — Title – Sub (Author1 et al)"),
            (meta(&["Sub1", "Sub2"], two()), "2000 — Title – Sub1 – Sub2 (Author1 et al)"),
        ];
        for (input, expected) in cases {
            assert_eq!(format(&input).unwrap(), expected);
        }
    }

    #[test]
    fn test_format_et_al_marker() {
        let input = meta(&[], Authors::EtAl(AuthorEtAl::new("Author")));
        assert_eq!(format(&input).unwrap(), "2000 — Title (Author et al)");
    }

    #[test]
    fn test_split_authors_then_format_collapses() {
        let input = meta(&[], split_authors("Author1, Author2"));
        let text = format(&input).unwrap();
        assert!(text.ends_with("(Author1 et al)"));
        assert!(!text.contains("Author2"));
    }

    #[test]
    fn test_format_requires_year_and_title() {
        let no_year = StemMetaData::new(None, ["Title"], Authors::default());
        assert_eq!(
            format(&no_year),
            Err(NameError::IncompleteMetadata { what: "year" })
        );

        let no_title = StemMetaData::new(Some(2000), Vec::<String>::new(), Authors::default());
        assert_eq!(
            format(&no_title),
            Err(NameError::IncompleteMetadata { what: "title" })
        );
    }
}
