// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Deterministic Groth16 test vectors for small circuits.
//!
//! Keys and proofs are produced by `ark-groth16` from a seeded RNG and
//! handed out in wire form, so callers exercise the whole parsing path.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

use crate::encode::{proof_request, vk_to_json};
use crate::types::{ProofRequest, VerificationKeyJson};

/// "I know `x` such that `x * x == y`", with `y` public
#[derive(Clone)]
pub struct SquareCircuit {
    pub x: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for SquareCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let y = FpVar::new_input(cs.clone(), || {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;
        let x = FpVar::new_witness(cs, || self.x.ok_or(SynthesisError::AssignmentMissing))?;
        (&x * &x).enforce_equal(&y)?;
        Ok(())
    }
}

/// "I know `w == a * b`", with `a` and `b` public
#[derive(Clone)]
pub struct ProductCircuit {
    pub a: Option<Fr>,
    pub b: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for ProductCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let a = FpVar::new_input(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = FpVar::new_input(cs.clone(), || self.b.ok_or(SynthesisError::AssignmentMissing))?;
        let w = FpVar::new_witness(cs, || {
            let a = self.a.ok_or(SynthesisError::AssignmentMissing)?;
            let b = self.b.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(a * b)
        })?;
        (&a * &b).enforce_equal(&w)?;
        Ok(())
    }
}

/// Key, proof and public inputs in both wire and arkworks form
pub struct Fixture {
    pub vk: VerificationKeyJson,
    pub request: ProofRequest,
    pub ark_vk: VerifyingKey<Bn254>,
    pub ark_proof: Proof<Bn254>,
}

fn build<C: ConstraintSynthesizer<Fr> + Clone>(
    seed: u64,
    setup_circuit: C,
    circuit: C,
    public_inputs: &[Fr],
) -> Fixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let (pk, vk) =
        Groth16::<Bn254>::circuit_specific_setup(setup_circuit, &mut rng).expect("setup failed");
    let proof = Groth16::<Bn254>::prove(&pk, circuit, &mut rng).expect("proving failed");
    Fixture {
        vk: vk_to_json(&vk),
        request: proof_request(&proof, public_inputs),
        ark_vk: vk,
        ark_proof: proof,
    }
}

/// Single public input `x * x`
pub fn square_fixture(seed: u64, x: u64) -> Fixture {
    let x = Fr::from(x);
    build(
        seed,
        SquareCircuit { x: None },
        SquareCircuit { x: Some(x) },
        &[x * x],
    )
}

/// Two public inputs `a`, `b`
pub fn product_fixture(seed: u64, a: u64, b: u64) -> Fixture {
    let (a, b) = (Fr::from(a), Fr::from(b));
    build(
        seed,
        ProductCircuit { a: None, b: None },
        ProductCircuit {
            a: Some(a),
            b: Some(b),
        },
        &[a, b],
    )
}

/// Reference answer from `ark-groth16`'s own verifier
pub fn arkworks_verify(f: &Fixture, inputs: &[Fr]) -> bool {
    Groth16::<Bn254>::verify(&f.ark_vk, inputs, &f.ark_proof).unwrap_or(false)
}
