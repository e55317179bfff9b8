// src/pipeline/error.rs
// =============================================================================
// This module defines the error taxonomy for the download-and-extract
// pipeline.
//
// The pipeline has exactly three ways to fail, and callers need to tell
// them apart (a 404 gets a "maybe pass a token" tip, a corrupt archive
// does not), so we use a dedicated enum instead of anyhow::Error here.
//
// All three are terminal: no retries, no partial-success continuation.
//
// Rust concepts:
// - thiserror: Derive macro that implements std::error::Error for us
// - #[from]: Automatic conversion so the ? operator works on io/zip errors
// =============================================================================

use thiserror::Error;

// The three failure modes of the pipeline
//
// #[derive(Error)] generates the Display and Error implementations from
// the #[error(...)] attributes, so these print as readable messages
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The remote repository was not found (HTTP 404)
    ///
    /// GitHub also answers 404 for private repositories the caller cannot
    /// see, so the CLI suggests supplying a token when it prints this one
    #[error("repository not found or you don't have access")]
    NotFound,

    /// Any other network or HTTP failure (non-2xx status, DNS, timeout...)
    #[error("failed to download repository: {detail}")]
    Transfer {
        /// HTTP status code, if the request got far enough to have one
        status: Option<u16>,
        /// Human-readable description of what went wrong
        detail: String,
    },

    /// The archive is corrupt, or writing extracted files failed
    #[error("failed to extract template: {0}")]
    Archive(String),
}

impl PipelineError {
    // Builds a Transfer error from a reqwest transport failure
    // (connection refused, DNS failure, timeout - no HTTP status exists)
    pub fn transport(err: reqwest::Error) -> Self {
        PipelineError::Transfer {
            status: None,
            detail: err.to_string(),
        }
    }
}

// Local file I/O problems during extraction count as archive failures
impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Archive(err.to_string())
    }
}

// So do problems reading the ZIP structure itself
impl From<zip::result::ZipError> for PipelineError {
    fn from(err: zip::result::ZipError) -> Self {
        PipelineError::Archive(err.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why thiserror instead of anyhow?
//    - anyhow::Error erases the concrete error type (great for applications)
//    - thiserror keeps the type, so callers can match on variants
//    - Libraries and well-defined subsystems should expose typed errors
//
// 2. What does #[error("...")] do?
//    - It generates the Display implementation for that variant
//    - {detail} and {0} interpolate fields into the message
//
// 3. Why implement From?
//    - The ? operator calls From::from to convert error types
//    - With these impls, extraction code can just write `file.write(...)?`
//      and the io::Error becomes a PipelineError::Archive automatically
// -----------------------------------------------------------------------------
