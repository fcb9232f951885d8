// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # pv-core
//!
//! Groth16 proof verification over **bn128** for the proof validator.
//!
//! Takes a verification key, a proof and its public inputs as the string
//! records the validator receives over the wire, and decides whether the
//! Groth16 pairing equation holds. Every outcome, including malformed input
//! and an elapsed deadline, comes back as a [`VerificationResult`]; only
//! infrastructure failures surface as errors.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`types`] | Wire records, [`Curve`], [`Scheme`], [`VerificationResult`] |
//! | [`parse`] | Hex/decimal string → integer |
//! | [`engine`] | [`PairingEngine`] interface and the arkworks bn128 engine |
//! | [`verifier`] | The Groth16 check |
//! | [`deadline`] | Verification raced against a timeout |
//! | [`key`] | Verification key loading |
//! | [`encode`] | Arkworks → wire encoding |
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pv_core::{load_verification_key, verify, ProofRequest};
//!
//! # fn example(request: ProofRequest) -> Result<(), pv_core::KeyError> {
//! let vk = load_verification_key(Path::new("verification_key.json"))?;
//! let result = verify(&vk, &request);
//! if !result.valid {
//!     eprintln!("rejected: {}", result.message.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod deadline;
pub mod encode;
pub mod engine;
pub mod error;
pub mod key;
pub mod parse;
pub mod types;
pub mod verifier;

#[cfg(any(test, feature = "testutils"))]
pub mod fixtures;

pub use deadline::{verify_with_deadline, DEFAULT_TIMEOUT};
pub use engine::{Bn254Engine, PairingEngine};
pub use error::{KeyError, Rejection, VerifierError};
pub use key::{load_verification_key, load_verification_key_async};
pub use types::*;
pub use verifier::{verify, verify_parts, Verifier};
