//! Testpulse error handling.
//!
//! A single error enum covers the whole crate. Only two things can actually
//! fail here: strict marker-vocabulary lookup, and the live-results file
//! round-trip. Everything else is pure and infallible by construction.
//!
//! Errors carry miette diagnostic codes (`testpulse::<area>::<kind>`) so the
//! host can surface them with full context.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PulseError>;

/// All failure modes of the testpulse plugin.
#[derive(Debug, Error, Diagnostic)]
pub enum PulseError {
    /// Raised only by direct vocabulary lookup of an unknown name.
    ///
    /// The lenient scan in [`crate::marker::resolve_marker`] never produces
    /// this error; it treats "not a marker" as a normal case.
    #[error("unrecognized marker '{name}'")]
    #[diagnostic(
        code(testpulse::marker::unrecognized),
        help("recognized markers are: {known}")
    )]
    UnrecognizedMarker { name: String, known: String },

    /// The live results document could not be read or written.
    ///
    /// Propagated to the caller, never swallowed: a session must not proceed
    /// believing progress tracking is active when it is not.
    #[error("live results file operation failed at '{}'", path.display())]
    #[diagnostic(
        code(testpulse::live::io),
        help("check that the parent directory exists and is writable")
    )]
    ResultsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The live results document could not be serialized or deserialized.
    #[error("live results document is not valid JSON")]
    #[diagnostic(code(testpulse::live::format))]
    ResultsFormat {
        #[from]
        source: serde_json::Error,
    },
}

impl PulseError {
    /// Creates a `ResultsIo` error bound to the offending path.
    pub fn results_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResultsIo {
            path: path.into(),
            source,
        }
    }
}
