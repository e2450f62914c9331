use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dtx operations
#[derive(Error, Diagnostic, Debug)]
pub enum DtxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dtx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dtx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dtx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Token '{token_id}' references group '{group_id}' which does not exist")]
    #[diagnostic(code(dtx::missing_group))]
    MissingGroup {
        token_id: String,
        group_id: String,
        #[help]
        help: Option<String>,
    },

    #[error("Gradient '{token_id}' has {stops} stop(s); only 2 or 3 are supported")]
    #[diagnostic(code(dtx::gradient))]
    UnsupportedGradient { token_id: String, stops: usize },

    #[error("Malformed colour on token '{token_id}': {message}")]
    #[diagnostic(code(dtx::colour))]
    MalformedColour { token_id: String, message: String },

    #[error("Export error: {message}")]
    #[diagnostic(code(dtx::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl DtxError {
    /// Missing-group error for a token, with the standard help text.
    pub fn missing_group(token_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        DtxError::MissingGroup {
            token_id: token_id.into(),
            group_id: group_id.into(),
            help: Some("Check that the token document includes every referenced group".to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DtxError>;
