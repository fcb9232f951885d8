use std::path::Path;

use anyhow::Result;
use pv_core::verifier::prepare_key;
use pv_core::{load_verification_key, Bn254Engine, Rejection, VerificationKeyJson};

use crate::output;

/// Summary of a key plus the outcome of validating every point in it
pub fn summarize(vk: &VerificationKeyJson) -> (serde_json::Value, Result<(), Rejection>) {
    let check = prepare_key::<Bn254Engine>(vk).map(|_| ());
    let summary = serde_json::json!({
        "curve": vk.curve,
        "scheme": vk.scheme.as_deref().unwrap_or("g16"),
        "public_inputs": vk.public_input_count(),
        "valid": check.is_ok(),
        "error": check.as_ref().err().map(|e| e.to_string()),
    });
    (summary, check)
}

pub fn run(vk_path: &Path) -> Result<()> {
    let vk = load_verification_key(vk_path)?;
    let (summary, check) = summarize(&vk);

    if output::is_json() {
        output::json_output(summary);
    } else {
        output::label("curve", &vk.curve);
        output::label("scheme", vk.scheme.as_deref().unwrap_or("g16"));
        output::label("public inputs", &vk.public_input_count().to_string());
        if check.is_ok() {
            output::success("all key points are valid");
        }
    }

    // the error itself is reported once, by the caller
    check.map_err(|e| output::fail_with_hint(&e.to_string(), "regenerate or re-export the verification key"))
}
