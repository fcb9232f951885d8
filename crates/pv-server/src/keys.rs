use std::path::PathBuf;
use std::sync::Arc;

use pv_core::{load_verification_key_async, KeyError, VerificationKeyJson};
use tracing::warn;

/// Where the verification key comes from
#[derive(Clone, Debug)]
pub enum KeySource {
    /// Re-read the file on every request, so a replaced key takes effect
    /// without a restart
    File(PathBuf),
    /// Loaded once
    Cached(Arc<VerificationKeyJson>),
}

impl KeySource {
    /// Build from config; caching reads the file now and fails fast
    pub async fn new(path: PathBuf, cache: bool) -> Result<Self, KeyError> {
        if cache {
            let vk = load_verification_key_async(&path).await?;
            Ok(KeySource::Cached(Arc::new(vk)))
        } else {
            Ok(KeySource::File(path))
        }
    }

    pub async fn load(&self) -> Result<Arc<VerificationKeyJson>, KeyError> {
        match self {
            KeySource::Cached(vk) => Ok(vk.clone()),
            KeySource::File(path) => load_verification_key_async(path)
                .await
                .map(Arc::new)
                .inspect_err(|e| warn!("verification key unavailable: {e}")),
        }
    }
}
