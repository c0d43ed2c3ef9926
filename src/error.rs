use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for termscheme operations
#[derive(Error, Diagnostic, Debug)]
pub enum SchemeError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(termscheme::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(termscheme::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette is missing required slot {slot}")]
    #[diagnostic(
        code(termscheme::missing_slot),
        help("A palette needs TERMINAL_BACKGROUND, TERMINAL_FOREGROUND and TERMINAL_COLOR0..TERMINAL_COLOR15")
    )]
    MissingSlot { slot: String },

    #[error("Invalid colour for {key}: {value}")]
    #[diagnostic(code(termscheme::invalid_colour))]
    InvalidColorFormat {
        key: String,
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Template not found: {path}: {message}")]
    #[diagnostic(code(termscheme::template_not_found))]
    TemplateNotFound { path: PathBuf, message: String },

    #[error("Template syntax error at byte {offset}: {message}")]
    #[diagnostic(code(termscheme::template_syntax))]
    TemplateSyntax { offset: usize, message: String },

    #[error("Unknown application: {app}")]
    #[diagnostic(code(termscheme::unknown_app))]
    UnknownApplication {
        app: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown variant {variant:?} for application {app}")]
    #[diagnostic(code(termscheme::unknown_variant))]
    UnknownVariant {
        app: String,
        variant: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed catalog document {path}: {message}")]
    #[diagnostic(code(termscheme::catalog))]
    MalformedCatalogDocument { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, SchemeError>;

/// Help text listing the names a lookup could have matched.
pub(crate) fn available_help(kind: &str, names: &[&str]) -> Option<String> {
    if names.is_empty() {
        None
    } else {
        Some(format!("Available {}: {}", kind, names.join(", ")))
    }
}
