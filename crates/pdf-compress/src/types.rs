use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("No PDF data supplied")]
    EmptyInput,
    #[error("Input is not a PDF document")]
    NotPdf,
    #[error("Compression tool {tool} could not be started: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Compression tool exited with {status}: {output}")]
    Tool { status: String, output: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl CompressError {
    /// True when the caller sent something that is not a usable PDF
    pub fn is_client_error(&self) -> bool {
        matches!(self, CompressError::EmptyInput | CompressError::NotPdf)
    }
}

pub type Result<T> = std::result::Result<T, CompressError>;
