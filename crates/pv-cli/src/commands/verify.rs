use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use pv_core::{load_verification_key_async, ProofRequest, Reason, VerificationResult};

use crate::output;

/// Read the proof file; a shape the wire format does not allow is a
/// rejected proof, not a CLI failure
async fn read_request(path: &Path) -> Result<std::result::Result<ProofRequest, VerificationResult>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read proof file {}", path.display()))?;
    Ok(serde_json::from_str(&text).map_err(|e| {
        VerificationResult::rejected(Reason::MalformedInput, format!("invalid proof format: {e}"))
    }))
}

pub async fn check_files(vk_path: &Path, proof_path: &Path, timeout: Duration) -> Result<VerificationResult> {
    let vk = load_verification_key_async(vk_path).await.map_err(|e| {
        output::fail_with_hint(
            &e.to_string(),
            "pass the ZoKrates-style verification_key.json with --vk",
        )
    })?;
    let request = match read_request(proof_path).await? {
        Ok(request) => request,
        Err(rejected) => return Ok(rejected),
    };
    let result = pv_core::verify_with_deadline(Arc::new(vk), Arc::new(request), timeout).await?;
    Ok(result)
}

pub async fn run(vk_path: &Path, proof_path: &Path, timeout_secs: u64) -> Result<bool> {
    let pb = output::spinner("verifying proof...");
    let result = check_files(vk_path, proof_path, Duration::from_secs(timeout_secs)).await;
    pb.finish_and_clear();

    let result = result?;
    output::verdict(&result);
    Ok(result.valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_core::fixtures;

    fn write_files(dir: &Path, f: &fixtures::Fixture, req: &ProofRequest) -> (std::path::PathBuf, std::path::PathBuf) {
        let vk = dir.join("verification_key.json");
        let proof = dir.join("proof.json");
        std::fs::write(&vk, serde_json::to_string(&f.vk).unwrap()).unwrap();
        std::fs::write(&proof, serde_json::to_string(req).unwrap()).unwrap();
        (vk, proof)
    }

    #[tokio::test]
    async fn valid_files() {
        let tmp = tempfile::tempdir().unwrap();
        let f = fixtures::square_fixture(42, 1);
        let (vk, proof) = write_files(tmp.path(), &f, &f.request);
        let r = check_files(&vk, &proof, Duration::from_secs(30)).await.unwrap();
        assert!(r.valid);
    }

    #[tokio::test]
    async fn wrong_input_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let f = fixtures::square_fixture(42, 1);
        let mut req = f.request.clone();
        req.inputs = vec!["2".into()];
        let (vk, proof) = write_files(tmp.path(), &f, &req);
        let r = check_files(&vk, &proof, Duration::from_secs(30)).await.unwrap();
        assert_eq!(r.reason, Some(Reason::PairingMismatch));
    }

    #[tokio::test]
    async fn bad_shape_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let f = fixtures::square_fixture(42, 1);
        let (vk, proof) = write_files(tmp.path(), &f, &f.request);
        std::fs::write(&proof, r#"{ "scheme": "g16", "curve": "bn128", "proof": {}, "inputs": [] }"#).unwrap();
        let r = check_files(&vk, &proof, Duration::from_secs(30)).await.unwrap();
        assert_eq!(r.reason, Some(Reason::MalformedInput));
    }

    #[tokio::test]
    async fn missing_key_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let f = fixtures::square_fixture(42, 1);
        let (_, proof) = write_files(tmp.path(), &f, &f.request);
        let missing = tmp.path().join("missing.json");
        assert!(check_files(&missing, &proof, Duration::from_secs(30)).await.is_err());
    }
}
