// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for verification.
//!
//! [`Rejection`] covers every way a proof can be turned down and always ends
//! up inside a [`VerificationResult`]. [`VerifierError`] and [`KeyError`] are
//! infrastructure failures that callers report separately.

use std::path::PathBuf;

use crate::types::{Reason, VerificationResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("malformed {field}: {detail}")]
    MalformedInput { field: String, detail: String },

    #[error("scheme or curve mismatch: {0}")]
    SchemeOrCurveMismatch(String),

    #[error("expected {expected} public inputs, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("{field} is not a valid curve point: {detail}")]
    PointNotOnCurve { field: String, detail: &'static str },

    #[error("verification timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("pairing check failed, proof rejected")]
    PairingMismatch,
}

impl Rejection {
    pub fn malformed(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Rejection::MalformedInput {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn reason(&self) -> Reason {
        match self {
            Rejection::MalformedInput { .. } => Reason::MalformedInput,
            Rejection::SchemeOrCurveMismatch(_) => Reason::SchemeOrCurveMismatch,
            Rejection::LengthMismatch { .. } => Reason::LengthMismatch,
            Rejection::PointNotOnCurve { .. } => Reason::PointNotOnCurve,
            Rejection::Timeout(_) => Reason::Timeout,
            Rejection::PairingMismatch => Reason::PairingMismatch,
        }
    }
}

impl From<Rejection> for VerificationResult {
    fn from(r: Rejection) -> Self {
        VerificationResult::rejected(r.reason(), r.to_string())
    }
}

/// The verification worker itself failed
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("verification worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// The verification key could not be obtained
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
