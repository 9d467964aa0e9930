//! Diffie-Hellman key derivation over MODP groups.
//!
//! DISCLAIMER: arithmetic here is not constant time and large moduli are trusted
//! without a primality proof. It is meant for exercising and checking the
//! mathematics, not for protecting real traffic.

pub mod error;
pub mod files;
pub mod group;
pub mod keys;
pub mod parse;
pub mod primality;
pub mod primitive_root;
pub mod vectors;
pub mod workflow;

pub use error::{Error, ErrorKind, ParameterError, Result};
pub use group::{GroupParameters, WellKnownGroup};
pub use keys::{derive_public_key, derive_shared_secret, PublicKey, SecretKey, SharedSecret};
pub use primality::{is_prime, SMALL_MODULUS_LIMIT};
pub use primitive_root::is_primitive_root;
pub use vectors::{verify, TestVectorSet, VectorCheck, VerificationReport};
pub use workflow::{execute, Mode, Outcome, Request};
