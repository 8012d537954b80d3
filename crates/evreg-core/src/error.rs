#[derive(Debug, thiserror::Error)]
pub enum EvregError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to extract text from '{file}': {source}")]
    FileFailed {
        file: String,
        #[source]
        source: Box<EvregError>,
    },

    #[error("ingestion cancelled before '{next_file}'")]
    Cancelled { next_file: String },

    #[error("invalid report file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvregError {
    /// Attach the offending file name to a collaborator failure.
    pub fn for_file(self, file: impl Into<String>) -> Self {
        EvregError::FileFailed {
            file: file.into(),
            source: Box::new(self),
        }
    }
}
