//! HTTP front end of the proof validator.
//!
//! `POST /verify` checks a Groth16/bn128 proof against the verification key
//! held in trusted storage and answers `{ valid, reason?, message? }`.

pub mod api;
pub mod config;
pub mod keys;

pub use config::Config;
