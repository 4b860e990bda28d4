use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("required header column missing: {0}")]
    MissingColumn(String),
    #[error("read rules file {path}: {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse rules file {path}: {source}")]
    RulesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("rules file {path}: question numbers start at 1")]
    RulesOutOfRange { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ModelError>;
