//! Unified error types for doc-compare.
//!
//! Extraction and reporting keep their own error enums; this module wraps
//! them together with comparison and configuration failures and lets callers
//! stack context strings as errors travel outward.

use crate::extract::ExtractError;
use crate::model::DocumentKind;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for doc-compare operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocCompareError {
    /// Errors while reading a document
    #[error("Failed to extract document: {context}")]
    Extract {
        context: String,
        #[source]
        source: ExtractError,
    },

    /// Errors while setting up a comparison
    #[error("Comparison failed: {context}")]
    Compare {
        context: String,
        #[source]
        source: CompareErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Reasons two documents cannot be compared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareErrorKind {
    #[error("cannot compare a sectioned document with a flat one")]
    ShapeMismatch,

    #[error("document kinds differ: {original} vs {revised}")]
    KindMismatch {
        original: DocumentKind,
        revised: DocumentKind,
    },
}

/// Convenient Result type for doc-compare operations
pub type Result<T> = std::result::Result<T, DocCompareError>;

impl DocCompareError {
    /// Create an extraction error with context
    pub fn extract(context: impl Into<String>, source: ExtractError) -> Self {
        Self::Extract {
            context: context.into(),
            source,
        }
    }

    /// Create a comparison error with context
    pub fn compare(context: impl Into<String>, source: CompareErrorKind) -> Self {
        Self::Compare {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = source.to_string();
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The comparison failure kind, if this is a comparison error.
    #[must_use]
    pub const fn compare_kind(&self) -> Option<&CompareErrorKind> {
        match self {
            Self::Compare { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DocCompareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ExtractError> for DocCompareError {
    fn from(err: ExtractError) -> Self {
        Self::extract(String::new(), err)
    }
}

impl From<ReportError> for DocCompareError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<CompareErrorKind> for DocCompareError {
    fn from(kind: CompareErrorKind) -> Self {
        Self::compare(String::new(), kind)
    }
}

/// Extension trait for adding context to errors.
///
/// # Example
///
/// ```no_run
/// use doc_compare::error::{ErrorContext, Result};
/// use doc_compare::extract::{extract_document, ExtractOptions};
/// use doc_compare::model::ExtractedDocument;
/// use std::path::Path;
///
/// fn load(path: &Path) -> Result<ExtractedDocument> {
///     extract_document(path, &ExtractOptions::default())
///         .with_context(|| format!("loading {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DocCompareError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: DocCompareError, new_ctx: &str) -> DocCompareError {
    match err {
        DocCompareError::Extract { context, source } => DocCompareError::Extract {
            context: chain_context(new_ctx, &context),
            source,
        },
        DocCompareError::Compare { context, source } => DocCompareError::Compare {
            context: chain_context(new_ctx, &context),
            source,
        },
        DocCompareError::Report { context, source } => DocCompareError::Report {
            context: chain_context(new_ctx, &context),
            source,
        },
        DocCompareError::Io {
            path,
            message,
            source,
        } => DocCompareError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DocCompareError::Config(msg) => DocCompareError::Config(chain_context(new_ctx, &msg)),
        DocCompareError::Validation(msg) => {
            DocCompareError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing came before.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| DocCompareError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| DocCompareError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocCompareError::compare(
            "deck.pptx vs notes.docx",
            CompareErrorKind::KindMismatch {
                original: DocumentKind::Slides,
                revised: DocumentKind::WordProcessing,
            },
        );
        let display = err.to_string();
        assert!(display.contains("Comparison failed"), "{display}");
        assert!(display.contains("deck.pptx"), "{display}");

        let err = DocCompareError::extract(
            "reading deck",
            ExtractError::NotFound(PathBuf::from("missing.pptx")),
        );
        assert!(err.to_string().contains("reading deck"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DocCompareError::io("/path/to/deck.pptx", io_err);
        assert!(err.to_string().contains("/path/to/deck.pptx"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(CompareErrorKind::ShapeMismatch.into())
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(DocCompareError::Compare { context, source }) => {
                assert_eq!(context, "outer layer: middle layer");
                assert_eq!(source, CompareErrorKind::ShapeMismatch);
            }
            other => panic!("Expected Compare error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(DocCompareError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.context_none("missing value").unwrap(), 42);

        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(DocCompareError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_compare_kind_accessor() {
        let err: DocCompareError = CompareErrorKind::ShapeMismatch.into();
        assert_eq!(err.compare_kind(), Some(&CompareErrorKind::ShapeMismatch));
        assert_eq!(DocCompareError::config("bad").compare_kind(), None);
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
