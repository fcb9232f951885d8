// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve arithmetic behind a narrow interface.
//!
//! The verifier only needs field construction, point validation, G1
//! addition and scalar multiplication, and a single multi-pairing check.
//! [`Bn254Engine`] provides them with arkworks.

use std::fmt::Debug;

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField};
use num_bigint::BigUint;

use crate::types::Curve;

pub trait PairingEngine: Send + Sync + 'static {
    const CURVE: Curve;

    /// Scalar field element (public inputs)
    type Scalar: Copy + Debug + Send + Sync + 'static;
    /// Base field element (point coordinates)
    type Base: Copy + Debug + Send + Sync + 'static;
    type G1: Copy + Debug + Send + Sync + 'static;
    type G2: Copy + Debug + Send + Sync + 'static;

    /// `None` if `v` is not below the scalar-field modulus
    fn scalar_from_uint(v: &BigUint) -> Option<Self::Scalar>;

    /// `None` if `v` is not below the base-field modulus
    fn base_from_uint(v: &BigUint) -> Option<Self::Base>;

    /// Builds a point without validating it; see [`Self::on_curve_g1`]
    fn g1_from_coords(x: Self::Base, y: Self::Base) -> Self::G1;

    /// Coordinates are `(c0, c1)` pairs of the quadratic extension
    fn g2_from_coords(x: [Self::Base; 2], y: [Self::Base; 2]) -> Self::G2;

    /// Curve equation and prime-order subgroup membership
    fn on_curve_g1(p: &Self::G1) -> bool;

    /// Curve equation and prime-order subgroup membership
    fn on_curve_g2(p: &Self::G2) -> bool;

    fn add_g1(a: &Self::G1, b: &Self::G1) -> Self::G1;

    fn scalar_mul_g1(p: &Self::G1, s: &Self::Scalar) -> Self::G1;

    fn neg_g1(p: &Self::G1) -> Self::G1;

    /// `Π e(g1_i, g2_i) == 1` in the target group
    fn multi_pairing_is_one(pairs: &[(Self::G1, Self::G2)]) -> bool;
}

/// bn128 (alt_bn128 / BN254) via `ark-bn254`
#[derive(Clone, Copy, Debug, Default)]
pub struct Bn254Engine;

fn field_from_uint<F: PrimeField>(v: &BigUint) -> Option<F> {
    let repr = <F::BigInt as TryFrom<BigUint>>::try_from(v.clone()).ok()?;
    F::from_bigint(repr)
}

impl PairingEngine for Bn254Engine {
    const CURVE: Curve = Curve::Bn128;

    type Scalar = Fr;
    type Base = Fq;
    type G1 = G1Affine;
    type G2 = G2Affine;

    fn scalar_from_uint(v: &BigUint) -> Option<Fr> {
        field_from_uint(v)
    }

    fn base_from_uint(v: &BigUint) -> Option<Fq> {
        field_from_uint(v)
    }

    fn g1_from_coords(x: Fq, y: Fq) -> G1Affine {
        G1Affine::new_unchecked(x, y)
    }

    fn g2_from_coords(x: [Fq; 2], y: [Fq; 2]) -> G2Affine {
        G2Affine::new_unchecked(Fq2::new(x[0], x[1]), Fq2::new(y[0], y[1]))
    }

    fn on_curve_g1(p: &G1Affine) -> bool {
        // cofactor is 1 on bn128 G1, the subgroup check is a no-op there
        p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()
    }

    fn on_curve_g2(p: &G2Affine) -> bool {
        p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()
    }

    fn add_g1(a: &G1Affine, b: &G1Affine) -> G1Affine {
        (a.into_group() + b.into_group()).into_affine()
    }

    fn scalar_mul_g1(p: &G1Affine, s: &Fr) -> G1Affine {
        (p.into_group() * s).into_affine()
    }

    fn neg_g1(p: &G1Affine) -> G1Affine {
        -*p
    }

    fn multi_pairing_is_one(pairs: &[(G1Affine, G2Affine)]) -> bool {
        let g1s = pairs.iter().map(|(g1, _)| *g1);
        let g2s = pairs.iter().map(|(_, g2)| *g2);
        Bn254::multi_pairing(g1s, g2s).0.is_one()
    }
}
