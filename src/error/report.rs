use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("[Report] Failed to create output directory {path}: {source}")]
    CreateDirError {
        path:   String,
        source: std::io::Error,
    },

    #[error("[Report] Failed to write {path}: {source}")]
    WriteError {
        path:   String,
        source: std::io::Error,
    },

    #[error("[Report] Failed to serialize report: {0}")]
    SerializeError(#[from] serde_json::Error),
}
