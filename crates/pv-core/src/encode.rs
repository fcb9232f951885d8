// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → wire encoding.
//!
//! Converts Groth16 proofs and verification keys (bn128) produced by
//! arkworks tooling into the JSON records the verifier consumes.
//!
//! # Format
//!
//! - **Coordinates and scalars**: `0x` + 64 big-endian hex digits.
//! - **G2 points**: `[[x.c0, x.c1], [y.c0, y.c1]]`.
//!
//! # Example
//!
//! ```rust,no_run
//! use pv_core::encode::{proof_request, vk_to_json};
//!
//! # fn example(
//! #     vk: &ark_groth16::VerifyingKey<ark_bn254::Bn254>,
//! #     proof: &ark_groth16::Proof<ark_bn254::Bn254>,
//! #     public_inputs: &[ark_bn254::Fr],
//! # ) {
//! let key = vk_to_json(vk);
//! let request = proof_request(proof, public_inputs);
//! // key.gamma_abc[0], request.proof.a, request.inputs ...
//! # }
//! ```

use ark_bn254::{Bn254, Fq, Fr, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};

use crate::types::{Curve, G1Json, G2Json, ProofJson, ProofRequest, Scheme, VerificationKeyJson};

fn field_to_hex<F: PrimeField>(f: &F) -> String {
    format!("0x{}", hex::encode(f.into_bigint().to_bytes_be()))
}

/// Fq to `0x`-prefixed big-endian hex (64 hex digits)
pub fn fq_to_hex(fq: &Fq) -> String {
    field_to_hex(fq)
}

/// Fr to `0x`-prefixed big-endian hex (64 hex digits)
pub fn fr_to_hex(fr: &Fr) -> String {
    field_to_hex(fr)
}

/// G1 affine point to `[x, y]`
///
/// The point at infinity has no affine coordinates; it is written as
/// `[0x0.., 0x0..]`, which the verifier rejects.
pub fn g1_to_json(p: &G1Affine) -> G1Json {
    [fq_to_hex(&p.x), fq_to_hex(&p.y)]
}

/// G2 affine point to `[[x.c0, x.c1], [y.c0, y.c1]]`
pub fn g2_to_json(p: &G2Affine) -> G2Json {
    [
        [fq_to_hex(&p.x.c0), fq_to_hex(&p.x.c1)],
        [fq_to_hex(&p.y.c0), fq_to_hex(&p.y.c1)],
    ]
}

/// Convert an arkworks VerifyingKey to its wire form
pub fn vk_to_json(vk: &ark_groth16::VerifyingKey<Bn254>) -> VerificationKeyJson {
    VerificationKeyJson {
        scheme: Some(Scheme::G16.as_str().to_string()),
        curve: Curve::Bn128.as_str().to_string(),
        alpha: g1_to_json(&vk.alpha_g1),
        beta: g2_to_json(&vk.beta_g2),
        gamma: g2_to_json(&vk.gamma_g2),
        delta: g2_to_json(&vk.delta_g2),
        gamma_abc: vk.gamma_abc_g1.iter().map(g1_to_json).collect(),
    }
}

/// Convert an arkworks Proof to its wire form
pub fn proof_to_json(proof: &ark_groth16::Proof<Bn254>) -> ProofJson {
    ProofJson {
        a: g1_to_json(&proof.a),
        b: g2_to_json(&proof.b),
        c: g1_to_json(&proof.c),
    }
}

/// Convert an arkworks Proof + public inputs to a complete request
pub fn proof_request(proof: &ark_groth16::Proof<Bn254>, public_inputs: &[Fr]) -> ProofRequest {
    ProofRequest {
        scheme: Scheme::G16.as_str().to_string(),
        curve: Curve::Bn128.as_str().to_string(),
        proof: proof_to_json(proof),
        inputs: public_inputs.iter().map(fr_to_hex).collect(),
    }
}
