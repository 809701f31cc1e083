use crate::error::{NameError, Result};
use crate::fields::Authors;
use crate::stem::StemMetaData;
use std::path::{Path, PathBuf};

/// Stem metadata plus the directory and suffix of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetaData {
    directory: PathBuf,
    stem: StemMetaData,
    suffix: Option<String>,
}

impl MetaData {
    pub fn new(directory: &Path, stem: StemMetaData, suffix: Option<String>) -> Self {
        Self {
            directory: directory.to_path_buf(),
            stem,
            suffix,
        }
    }

    /// Start from a path whose stem could not be parsed: only directory and suffix are known.
    pub fn blank(path: &Path) -> Self {
        Self::new(parent_of(path), StemMetaData::default(), suffix_of(path))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let stem = stem_of(path)
            .and_then(StemMetaData::from_text)
            .map_err(|err| NameError::PathParse {
                path: path.to_path_buf(),
                source: Box::new(err),
            })?;
        Ok(Self::new(parent_of(path), stem, suffix_of(path)))
    }

    /// Any parse or completeness failure counts as "not normalized".
    pub fn is_normalized(path: &Path) -> bool {
        match stem_of(path) {
            Ok(stem) => suffix_of(path).is_some() && StemMetaData::is_normalized(stem),
            Err(_) => false,
        }
    }

    pub fn normalize(path: &Path) -> Result<PathBuf> {
        Self::from_path(path)?.to_path()
    }

    #[allow(dead_code)]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[allow(dead_code)]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn stem_metadata(&self) -> &StemMetaData {
        &self.stem
    }

    pub fn is_complete(&self) -> bool {
        self.suffix.is_some() && self.stem.is_complete()
    }

    /// File name: canonical stem with the suffix appended verbatim.
    pub fn name(&self) -> Result<String> {
        let suffix = self
            .suffix
            .as_deref()
            .ok_or(NameError::IncompleteMetadata { what: "suffix" })?;
        Ok(format!("{}{}", self.stem.to_text()?, suffix))
    }

    pub fn to_path(&self) -> Result<PathBuf> {
        Ok(self.directory.join(self.name()?))
    }

    pub fn with_year(&self, year: u32) -> Self {
        self.with_stem(self.stem.with_year(year))
    }

    pub fn with_title_and_subtitles<I, S>(&self, title_and_subtitles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_stem(self.stem.with_title_and_subtitles(title_and_subtitles))
    }

    pub fn with_authors(&self, authors: Authors) -> Self {
        self.with_stem(self.stem.with_authors(authors))
    }

    fn with_stem(&self, stem: StemMetaData) -> Self {
        Self {
            stem,
            ..self.clone()
        }
    }

    pub fn table_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![("directory".to_string(), self.directory.display().to_string())];
        rows.extend(self.stem.table_rows());
        rows.push(("suffix".to_string(), self.suffix.clone().unwrap_or_default()));
        rows
    }
}

fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Names that are not valid UTF-8 cannot be parsed, and are never rewritten.
fn stem_of(path: &Path) -> Result<&str> {
    let stem = path.file_stem().unwrap_or_default();
    stem.to_str().ok_or_else(|| NameError::StemParse {
        stem: stem.to_string_lossy().into_owned(),
    })
}

fn suffix_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::AuthorEtAl;

    #[test]
    fn test_from_path() {
        let path = Path::new("books/2000 — Title – Sub (Author).pdf");
        let meta = MetaData::from_path(path).unwrap();
        assert_eq!(meta.directory(), Path::new("books"));
        assert_eq!(meta.suffix(), Some(".pdf"));
        assert_eq!(meta.stem_metadata().title_and_subtitles(), ["Title", "Sub"]);
        assert_eq!(meta.name().unwrap(), "2000 — Title – Sub (Author).pdf");
        assert_eq!(meta.to_path().unwrap(), path);
    }

    #[test]
    fn test_from_path_wraps_stem_error() {
        let err = MetaData::from_path(Path::new("dir/nothing.pdf")).unwrap_err();
        match err {
            NameError::PathParse { path, source } => {
                assert_eq!(path, PathBuf::from("dir/nothing.pdf"));
                assert!(matches!(*source, NameError::StemParse { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_is_normalized_path() {
        assert!(MetaData::is_normalized(Path::new("dir/2000 — Title.pdf")));
        assert!(MetaData::is_normalized(Path::new("dir/2000 — Title (Author et al).epub")));
        assert!(!MetaData::is_normalized(Path::new("dir/Author - Title (2000).pdf")));
        assert!(!MetaData::is_normalized(Path::new("dir/nothing.pdf")));
        // Parses, but no year to render.
        assert!(!MetaData::is_normalized(Path::new("dir/Title-Author.pdf")));
        // No suffix.
        assert!(!MetaData::is_normalized(Path::new("dir/2000 — Title")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("dir").join(OsStr::from_bytes(b"Author - Title \xff (2000).pdf"));
        match MetaData::from_path(&path) {
            Err(NameError::PathParse { source, .. }) => {
                assert!(matches!(*source, NameError::StemParse { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!MetaData::is_normalized(&path));
        assert!(MetaData::normalize(&path).is_err());

        let odd_suffix = Path::new("dir").join(OsStr::from_bytes(b"2000 \xe2\x80\x94 Title.\xffpdf"));
        assert!(!MetaData::is_normalized(&odd_suffix));
        assert!(MetaData::blank(&odd_suffix).suffix().is_none());
    }

    #[test]
    fn test_normalize_path_keeps_directory_and_suffix() {
        let normalized = MetaData::normalize(Path::new("a/b/Author - Title (2000).epub")).unwrap();
        assert_eq!(normalized, PathBuf::from("a/b/2000 — Title (Author).epub"));
    }

    #[test]
    fn test_name_keeps_dots_in_stem() {
        let meta = MetaData::from_path(Path::new("dir/2015 — Node.js – Patterns.pdf")).unwrap();
        assert_eq!(meta.stem_metadata().title(), Some("Node.js"));
        assert_eq!(meta.name().unwrap(), "2015 — Node.js – Patterns.pdf");
    }

    #[test]
    fn test_incomplete_metadata() {
        let blank = MetaData::blank(Path::new("dir/whatever.pdf"));
        assert!(!blank.is_complete());
        assert_eq!(
            blank.name(),
            Err(NameError::IncompleteMetadata { what: "year" })
        );

        let no_suffix = MetaData::new(
            Path::new("dir"),
            StemMetaData::new(Some(2000), ["Title"], Authors::default()),
            None,
        );
        assert_eq!(
            no_suffix.to_path(),
            Err(NameError::IncompleteMetadata { what: "suffix" })
        );
    }

    #[test]
    fn test_field_edits() {
        let blank = MetaData::blank(Path::new("dir/whatever.pdf"));
        let filled = blank
            .with_year(1999)
            .with_title_and_subtitles(["Title", "Sub"])
            .with_authors(Authors::EtAl(AuthorEtAl::new("Author")));
        assert!(filled.is_complete());
        assert!(!blank.is_complete());
        assert_eq!(
            filled.to_path().unwrap(),
            PathBuf::from("dir/1999 — Title – Sub (Author et al).pdf")
        );
    }

    #[test]
    fn test_table_rows_frame_stem_rows() {
        let meta = MetaData::from_path(Path::new("dir/2000 — Title.pdf")).unwrap();
        let rows = meta.table_rows();
        assert_eq!(rows.first().map(|(l, _)| l.as_str()), Some("directory"));
        assert_eq!(
            rows.last(),
            Some(&("suffix".to_string(), ".pdf".to_string()))
        );
    }
}
