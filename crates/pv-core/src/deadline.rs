// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification raced against a deadline.
//!
//! The pairing runs on tokio's blocking pool and the caller awaits it under
//! [`tokio::time::timeout`]. Pairing arithmetic cannot be interrupted, so an
//! expired computation keeps its blocking thread until it finishes and its
//! result is dropped; the caller gets [`Reason::Timeout`](crate::Reason)
//! immediately.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::engine::{Bn254Engine, PairingEngine};
use crate::error::{Rejection, VerifierError};
use crate::types::{ProofRequest, VerificationKeyJson, VerificationResult};
use crate::verifier::Verifier;

/// Timeout used by the proof validator when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Verify on bn128, giving up after `timeout`
pub async fn verify_with_deadline(
    vk: Arc<VerificationKeyJson>,
    request: Arc<ProofRequest>,
    timeout: Duration,
) -> Result<VerificationResult, VerifierError> {
    Verifier::<Bn254Engine>::new()
        .verify_with_deadline(vk, request, timeout)
        .await
}

impl<E: PairingEngine> Verifier<E> {
    pub async fn verify_with_deadline(
        &self,
        vk: Arc<VerificationKeyJson>,
        request: Arc<ProofRequest>,
        timeout: Duration,
    ) -> Result<VerificationResult, VerifierError> {
        let verifier = Verifier::<E>::new();
        let task = tokio::task::spawn_blocking(move || verifier.verify(&vk, &request));
        race(task, timeout).await
    }
}

/// Await a verification task, converting an elapsed deadline into a
/// `Timeout` result
pub(crate) async fn race<F>(task: F, timeout: Duration) -> Result<VerificationResult, VerifierError>
where
    F: std::future::Future<Output = Result<VerificationResult, tokio::task::JoinError>>,
{
    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => Ok(joined?),
        Err(_) => {
            warn!(?timeout, "verification deadline elapsed, abandoning computation");
            Ok(Rejection::Timeout(timeout).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::Reason;

    #[tokio::test]
    async fn completes_within_deadline() {
        let f = fixtures::square_fixture(42, 1);
        let r = verify_with_deadline(Arc::new(f.vk), Arc::new(f.request), DEFAULT_TIMEOUT)
            .await
            .unwrap();
        assert!(r.valid);
    }

    #[tokio::test]
    async fn rejection_passes_through() {
        let f = fixtures::square_fixture(42, 1);
        let mut req = f.request.clone();
        req.inputs = vec!["2".into()];
        let r = verify_with_deadline(Arc::new(f.vk), Arc::new(req), DEFAULT_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(r.reason, Some(Reason::PairingMismatch));
    }

    #[tokio::test]
    async fn slow_task_times_out() {
        let slow = tokio::task::spawn_blocking(|| {
            std::thread::sleep(Duration::from_millis(500));
            VerificationResult::accepted()
        });
        let r = race(slow, Duration::from_millis(10)).await.unwrap();
        assert!(!r.valid);
        assert_eq!(r.reason, Some(Reason::Timeout));
    }

    #[tokio::test]
    async fn timeout_message_names_deadline() {
        let pending = std::future::pending::<Result<VerificationResult, tokio::task::JoinError>>();
        let r = race(pending, Duration::from_millis(20)).await.unwrap();
        assert_eq!(r.reason, Some(Reason::Timeout));
        assert!(r.message.unwrap().contains("20ms"));
    }

    #[tokio::test]
    async fn panicked_worker_is_infrastructure_error() {
        let boom = tokio::task::spawn_blocking(|| -> VerificationResult { panic!("boom") });
        let err = race(boom, DEFAULT_TIMEOUT).await.unwrap_err();
        assert!(matches!(err, VerifierError::Worker(_)));
    }
}
