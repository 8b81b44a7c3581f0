pub mod backend;
pub mod download;
pub mod paths;
pub mod pipeline;
pub mod taxonomy;

pub use crate::pipeline::LineageSource;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown taxid: {0}")]
    UnknownTaxid(String),
}

pub type Result<T> = std::result::Result<T, LineageError>;
