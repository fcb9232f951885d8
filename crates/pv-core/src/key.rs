// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification key loading from trusted storage.

use std::path::Path;

use tracing::debug;

use crate::error::KeyError;
use crate::types::VerificationKeyJson;

/// Parse a verification key from JSON text
pub fn parse_verification_key(path: &Path, text: &str) -> Result<VerificationKeyJson, KeyError> {
    serde_json::from_str(text).map_err(|source| KeyError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a verification key file
pub fn load_verification_key(path: &Path) -> Result<VerificationKeyJson, KeyError> {
    let text = std::fs::read_to_string(path).map_err(|source| KeyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let vk = parse_verification_key(path, &text)?;
    debug!(path = %path.display(), public_inputs = vk.public_input_count(), "loaded verification key");
    Ok(vk)
}

/// Async variant of [`load_verification_key`] for use inside a runtime
pub async fn load_verification_key_async(path: &Path) -> Result<VerificationKeyJson, KeyError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| KeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let vk = parse_verification_key(path, &text)?;
    debug!(path = %path.display(), public_inputs = vk.public_input_count(), "loaded verification key");
    Ok(vk)
}
