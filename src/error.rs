use miette::Diagnostic;
use thiserror::Error;

/// Main error type for emblem operations
#[derive(Error, Diagnostic, Debug)]
pub enum EmblemError {
    #[error("IO error: {0}")]
    #[diagnostic(code(emblem::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(emblem::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error with {path}: {message}")]
    #[diagnostic(code(emblem::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Colour error: {message}")]
    #[diagnostic(code(emblem::colour))]
    Colour {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Settings error: {message}")]
    #[diagnostic(code(emblem::settings))]
    Settings {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Pipeline error: {message}")]
    #[diagnostic(code(emblem::pipeline))]
    Pipeline {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, EmblemError>;
