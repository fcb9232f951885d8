// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Wire records for Groth16 verification (bn128, ZoKrates-style JSON)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// G1 point as `[x, y]` coordinate strings
pub type G1Json = [String; 2];

/// G2 point as `[[x.c0, x.c1], [y.c0, y.c1]]` coordinate strings
pub type G2Json = [[String; 2]; 2];

/// Pairing-friendly curve a key or proof is defined over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    Bn128,
}

impl Curve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Bn128 => "bn128",
        }
    }
}

impl FromStr for Curve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bn128" | "bn254" => Ok(Curve::Bn128),
            _ => Err(format!("unsupported curve '{s}'")),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proving scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    G16,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::G16 => "g16",
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g16" | "groth16" => Ok(Scheme::G16),
            _ => Err(format!("unsupported scheme '{s}'")),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groth16 verification key as stored on disk
///
/// `gamma_abc[0]` is the constant term, `gamma_abc[1..]` match the public
/// inputs in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKeyJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub curve: String,
    pub alpha: G1Json,
    pub beta: G2Json,
    pub gamma: G2Json,
    pub delta: G2Json,
    pub gamma_abc: Vec<G1Json>,
}

impl VerificationKeyJson {
    /// Number of public inputs this key expects
    pub fn public_input_count(&self) -> usize {
        self.gamma_abc.len().saturating_sub(1)
    }
}

/// Groth16 proof elements
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub a: G1Json,
    pub b: G2Json,
    pub c: G1Json,
}

/// A proof together with its scheme, curve and public inputs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRequest {
    pub scheme: String,
    pub curve: String,
    pub proof: ProofJson,
    pub inputs: Vec<String>,
}

/// Why a proof was not accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    MalformedInput,
    SchemeOrCurveMismatch,
    LengthMismatch,
    PointNotOnCurve,
    Timeout,
    PairingMismatch,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::MalformedInput => "malformed_input",
            Reason::SchemeOrCurveMismatch => "scheme_or_curve_mismatch",
            Reason::LengthMismatch => "length_mismatch",
            Reason::PointNotOnCurve => "point_not_on_curve",
            Reason::Timeout => "timeout",
            Reason::PairingMismatch => "pairing_mismatch",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a verification call
///
/// `reason` and `message` are set iff `valid` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerificationResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: None,
            message: None,
        }
    }

    pub fn rejected(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_aliases() {
        assert_eq!("bn128".parse::<Curve>().unwrap(), Curve::Bn128);
        assert_eq!("BN254".parse::<Curve>().unwrap(), Curve::Bn128);
        assert!("bls12_381".parse::<Curve>().is_err());
    }

    #[test]
    fn scheme_aliases() {
        assert_eq!("g16".parse::<Scheme>().unwrap(), Scheme::G16);
        assert_eq!("Groth16".parse::<Scheme>().unwrap(), Scheme::G16);
        assert!("plonk".parse::<Scheme>().is_err());
    }

    #[test]
    fn accepted_result_omits_reason_and_message() {
        let json = serde_json::to_value(VerificationResult::accepted()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn rejected_result_serializes_reason() {
        let r = VerificationResult::rejected(Reason::PairingMismatch, "pairing check failed");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "pairing_mismatch");
        assert_eq!(json["message"], "pairing check failed");
    }

    #[test]
    fn proof_request_rejects_wrong_arity() {
        let body = r#"{
            "scheme": "g16",
            "curve": "bn128",
            "proof": { "a": ["0x1"], "b": [["0x1","0x2"],["0x3","0x4"]], "c": ["0x1","0x2"] },
            "inputs": ["0x1"]
        }"#;
        assert!(serde_json::from_str::<ProofRequest>(body).is_err());
    }

    #[test]
    fn vk_public_input_count() {
        let g1: G1Json = ["1".into(), "2".into()];
        let g2: G2Json = [["1".into(), "2".into()], ["3".into(), "4".into()]];
        let vk = VerificationKeyJson {
            scheme: None,
            curve: "bn128".into(),
            alpha: g1.clone(),
            beta: g2.clone(),
            gamma: g2.clone(),
            delta: g2,
            gamma_abc: vec![g1.clone(), g1.clone(), g1],
        };
        assert_eq!(vk.public_input_count(), 2);
    }
}
