use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    #[error("page {page} not found at {path}")]
    PageMissing { page: u32, path: PathBuf },

    #[error("no png or jpg found near path {path}")]
    ImageMissing { path: PathBuf },

    #[error("invalid page range '{0}': expected N or START-END with 1 <= START <= END")]
    InvalidPageRange(String),

    #[error("{program} not found. Make sure it is installed and on PATH")]
    ToolNotFound { program: String },

    #[error("{program} failed with exit code {code}: {stderr}")]
    ToolFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("failed to run {program}: {reason}")]
    ToolSpawn { program: String, reason: String },

    #[error("entity tagger output could not be read: {0}")]
    TaggerOutput(String),

    #[error("failed to load site config from {path}: {reason}")]
    SiteConfigLoad { path: PathBuf, reason: String },

    #[error("invalid site config: {0}")]
    SiteConfigInvalid(String),

    #[error("failed to read catalog {path}: {reason}")]
    Catalog { path: PathBuf, reason: String },

    #[error("invalid card id '{0}': ids become directory names and must be a single path component")]
    InvalidCardId(String),

    #[error("failed to read template {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
