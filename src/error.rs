use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("no naming pattern matches stem {stem:?}")]
    StemParse { stem: String },

    #[error("field is empty after trimming: {text:?}")]
    EmptyField { text: String },

    #[error("metadata is incomplete: missing {what}")]
    IncompleteMetadata { what: &'static str },

    #[error("not of the form '<author> et al': {text:?}")]
    AuthorEtAlParse { text: String },

    #[error("invalid year: {text:?}")]
    InvalidYear { text: String },

    #[error("not a valid file name fragment: {text:?}")]
    InvalidField { text: String },

    #[error("cannot parse metadata from path {path:?}")]
    PathParse {
        path: PathBuf,
        #[source]
        source: Box<NameError>,
    },
}

pub type Result<T> = std::result::Result<T, NameError>;
