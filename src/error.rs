use miette::Diagnostic;
use thiserror::Error;

/// Main error type for redline operations
#[derive(Error, Diagnostic, Debug)]
pub enum RedlineError {
    #[error("IO error: {0}")]
    #[diagnostic(code(redline::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(redline::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid color value: {value}")]
    #[diagnostic(code(redline::color))]
    Color {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed style record: {message}")]
    #[diagnostic(code(redline::style))]
    Style { message: String },

    #[error("Document error: {message}")]
    #[diagnostic(code(redline::document))]
    Document {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(redline::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RedlineError>;
