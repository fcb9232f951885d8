// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier over a [`PairingEngine`]
//!
//! Algorithm:
//! 1. Compute vk_x = gamma_abc[0] + Σ inputs[i-1] · gamma_abc[i]
//! 2. Check: e(A,B) * e(-alpha,beta) * e(-vk_x,gamma) * e(-C,delta) == 1
//!
//! All checks that need no arithmetic (scheme, curve, arity) run before any
//! string is parsed, and every point is validated before the pairing.

use std::marker::PhantomData;

use tracing::{debug, info};

use crate::engine::{Bn254Engine, PairingEngine};
use crate::error::Rejection;
use crate::parse::parse_uint;
use crate::types::{
    Curve, G1Json, G2Json, ProofJson, ProofRequest, Scheme, VerificationKeyJson,
    VerificationResult,
};

/// Verification key with every element parsed and validated
#[derive(Clone, Debug)]
pub struct PreparedKey<E: PairingEngine> {
    pub curve: Curve,
    pub alpha: E::G1,
    pub beta: E::G2,
    pub gamma: E::G2,
    pub delta: E::G2,
    pub gamma_abc: Vec<E::G1>,
}

/// Proof with every element parsed and validated
#[derive(Clone, Copy, Debug)]
pub struct PreparedProof<E: PairingEngine> {
    pub a: E::G1,
    pub b: E::G2,
    pub c: E::G1,
}

/// Stateless Groth16 verifier for one curve engine
#[derive(Clone, Copy, Debug, Default)]
pub struct Verifier<E: PairingEngine> {
    _engine: PhantomData<E>,
}

/// Verify a proof request against a key on bn128
pub fn verify(vk: &VerificationKeyJson, request: &ProofRequest) -> VerificationResult {
    Verifier::<Bn254Engine>::new().verify(vk, request)
}

/// Verify with the proof's scheme, curve, elements and inputs given separately
pub fn verify_parts(
    vk: &VerificationKeyJson,
    scheme: &str,
    curve: &str,
    proof: &ProofJson,
    inputs: &[String],
) -> VerificationResult {
    Verifier::<Bn254Engine>::new().verify_parts(vk, scheme, curve, proof, inputs)
}

impl<E: PairingEngine> Verifier<E> {
    pub fn new() -> Self {
        Self {
            _engine: PhantomData,
        }
    }

    pub fn verify(&self, vk: &VerificationKeyJson, request: &ProofRequest) -> VerificationResult {
        self.verify_parts(
            vk,
            &request.scheme,
            &request.curve,
            &request.proof,
            &request.inputs,
        )
    }

    pub fn verify_parts(
        &self,
        vk: &VerificationKeyJson,
        scheme: &str,
        curve: &str,
        proof: &ProofJson,
        inputs: &[String],
    ) -> VerificationResult {
        match self.check(vk, scheme, curve, proof, inputs) {
            Ok(()) => {
                info!(inputs = inputs.len(), "proof accepted");
                VerificationResult::accepted()
            }
            Err(rejection) => {
                info!(reason = %rejection.reason(), "proof rejected: {rejection}");
                rejection.into()
            }
        }
    }

    fn check(
        &self,
        vk: &VerificationKeyJson,
        scheme: &str,
        curve: &str,
        proof: &ProofJson,
        inputs: &[String],
    ) -> Result<(), Rejection> {
        check_header::<E>(vk, scheme, curve)?;
        check_arity(vk, inputs)?;
        debug!("header and arity ok");

        let key = prepare_key::<E>(vk)?;
        let proof = prepare_proof::<E>(proof)?;
        let inputs = parse_inputs::<E>(inputs)?;
        debug!("inputs parsed, running pairing check");

        if self.pairing_check(&key, &proof, &inputs)? {
            Ok(())
        } else {
            Err(Rejection::PairingMismatch)
        }
    }

    /// The Groth16 equation on already-validated values.
    ///
    /// Fails without touching the curve unless
    /// `inputs.len() + 1 == key.gamma_abc.len()`.
    pub fn pairing_check(
        &self,
        key: &PreparedKey<E>,
        proof: &PreparedProof<E>,
        inputs: &[E::Scalar],
    ) -> Result<bool, Rejection> {
        let Some((constant, terms)) = key.gamma_abc.split_first() else {
            return Err(Rejection::malformed("vk.gamma_abc", "must not be empty"));
        };
        if inputs.len() != terms.len() {
            return Err(Rejection::LengthMismatch {
                expected: terms.len(),
                got: inputs.len(),
            });
        }

        // Step 1: vk_x = gamma_abc[0] + Σ inputs[i] * gamma_abc[i+1]
        let vk_x = inputs
            .iter()
            .zip(terms)
            .fold(*constant, |acc, (s, p)| E::add_g1(&acc, &E::scalar_mul_g1(p, s)));

        // Step 2: e(A,B) * e(-alpha,beta) * e(-vk_x,gamma) * e(-C,delta) == 1
        Ok(E::multi_pairing_is_one(&[
            (proof.a, proof.b),
            (E::neg_g1(&key.alpha), key.beta),
            (E::neg_g1(&vk_x), key.gamma),
            (E::neg_g1(&proof.c), key.delta),
        ]))
    }
}

fn check_header<E: PairingEngine>(
    vk: &VerificationKeyJson,
    scheme: &str,
    curve: &str,
) -> Result<(), Rejection> {
    scheme
        .parse::<Scheme>()
        .map_err(|e| Rejection::SchemeOrCurveMismatch(format!("proof: {e}")))?;
    if let Some(vk_scheme) = &vk.scheme {
        vk_scheme
            .parse::<Scheme>()
            .map_err(|e| Rejection::SchemeOrCurveMismatch(format!("verification key: {e}")))?;
    }

    let proof_curve: Curve = curve
        .parse()
        .map_err(|e| Rejection::SchemeOrCurveMismatch(format!("proof: {e}")))?;
    let vk_curve: Curve = vk
        .curve
        .parse()
        .map_err(|e| Rejection::SchemeOrCurveMismatch(format!("verification key: {e}")))?;

    if proof_curve != vk_curve {
        return Err(Rejection::SchemeOrCurveMismatch(format!(
            "proof is on {proof_curve}, verification key is on {vk_curve}"
        )));
    }
    if vk_curve != E::CURVE {
        return Err(Rejection::SchemeOrCurveMismatch(format!(
            "verifier supports {}, got {vk_curve}",
            E::CURVE
        )));
    }
    Ok(())
}

fn check_arity(vk: &VerificationKeyJson, inputs: &[String]) -> Result<(), Rejection> {
    if vk.gamma_abc.is_empty() {
        return Err(Rejection::malformed("vk.gamma_abc", "must not be empty"));
    }
    let expected = vk.gamma_abc.len() - 1;
    if inputs.len() != expected {
        return Err(Rejection::LengthMismatch {
            expected,
            got: inputs.len(),
        });
    }
    Ok(())
}

fn parse_base<E: PairingEngine>(field: &str, s: &str) -> Result<E::Base, Rejection> {
    let v = parse_uint(s).map_err(|e| Rejection::malformed(field, e.to_string()))?;
    E::base_from_uint(&v)
        .ok_or_else(|| Rejection::malformed(field, "coordinate is not below the field modulus"))
}

fn parse_g1<E: PairingEngine>(field: &str, p: &G1Json) -> Result<E::G1, Rejection> {
    let x = parse_base::<E>(&format!("{field}[0]"), &p[0])?;
    let y = parse_base::<E>(&format!("{field}[1]"), &p[1])?;
    let point = E::g1_from_coords(x, y);
    if !E::on_curve_g1(&point) {
        return Err(Rejection::PointNotOnCurve {
            field: field.to_string(),
            detail: "not a G1 subgroup point",
        });
    }
    Ok(point)
}

fn parse_g2<E: PairingEngine>(field: &str, p: &G2Json) -> Result<E::G2, Rejection> {
    let coord = |i: usize, j: usize| parse_base::<E>(&format!("{field}[{i}][{j}]"), &p[i][j]);
    let x = [coord(0, 0)?, coord(0, 1)?];
    let y = [coord(1, 0)?, coord(1, 1)?];
    let point = E::g2_from_coords(x, y);
    if !E::on_curve_g2(&point) {
        return Err(Rejection::PointNotOnCurve {
            field: field.to_string(),
            detail: "not a G2 subgroup point",
        });
    }
    Ok(point)
}

/// Parse and validate every element of a verification key
pub fn prepare_key<E: PairingEngine>(vk: &VerificationKeyJson) -> Result<PreparedKey<E>, Rejection> {
    let curve: Curve = vk
        .curve
        .parse()
        .map_err(|e| Rejection::SchemeOrCurveMismatch(format!("verification key: {e}")))?;
    if vk.gamma_abc.is_empty() {
        return Err(Rejection::malformed("vk.gamma_abc", "must not be empty"));
    }
    let gamma_abc = vk
        .gamma_abc
        .iter()
        .enumerate()
        .map(|(i, p)| parse_g1::<E>(&format!("vk.gamma_abc[{i}]"), p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PreparedKey {
        curve,
        alpha: parse_g1::<E>("vk.alpha", &vk.alpha)?,
        beta: parse_g2::<E>("vk.beta", &vk.beta)?,
        gamma: parse_g2::<E>("vk.gamma", &vk.gamma)?,
        delta: parse_g2::<E>("vk.delta", &vk.delta)?,
        gamma_abc,
    })
}

/// Parse and validate the three proof elements
pub fn prepare_proof<E: PairingEngine>(proof: &ProofJson) -> Result<PreparedProof<E>, Rejection> {
    Ok(PreparedProof {
        a: parse_g1::<E>("proof.a", &proof.a)?,
        b: parse_g2::<E>("proof.b", &proof.b)?,
        c: parse_g1::<E>("proof.c", &proof.c)?,
    })
}

/// Parse public inputs, each strictly below the scalar-field modulus
pub fn parse_inputs<E: PairingEngine>(inputs: &[String]) -> Result<Vec<E::Scalar>, Rejection> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let field = format!("inputs[{i}]");
            let v = parse_uint(s).map_err(|e| Rejection::malformed(&field, e.to_string()))?;
            E::scalar_from_uint(&v).ok_or_else(|| {
                Rejection::malformed(&field, "value is not below the scalar field modulus")
            })
        })
        .collect()
}
