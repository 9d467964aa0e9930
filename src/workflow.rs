//! The three operations exposed by the `dhkey` binary.
//!
//! [`execute`] performs every input check before any derivation runs, in the order a
//! user would want them reported: group first, then the secret, then the peer key or
//! test vectors. Test mode still validates `prime` and `root`, but replays the vectors
//! over the group they were recorded with.

use log::info;
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::group::GroupParameters;
use crate::keys::{PublicKey, SecretKey, SharedSecret};
use crate::vectors::{verify, TestVectorSet, VerificationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    /// Derive a public key from a secret.
    Generate,
    /// Derive the shared secret from a secret and the peer's public key.
    Merge,
    /// Replay a recorded exchange and check every value.
    Test,
}

/// Unvalidated inputs for one invocation.
#[derive(Debug, Clone)]
pub struct Request {
    pub mode: Mode,
    pub prime: BigUint,
    pub root: BigUint,
    pub secret: Option<BigUint>,
    pub peer_public: Option<BigUint>,
    pub vectors: Option<TestVectorSet>,
    /// Prime and root the vectors were recorded over. `None` replays them over
    /// `prime` and `root`.
    pub vector_group: Option<(BigUint, BigUint)>,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Generated {
        group: GroupParameters,
        secret: SecretKey,
        public: PublicKey,
    },
    Merged {
        secret: SecretKey,
        peer: PublicKey,
        shared: SharedSecret,
    },
    Tested(VerificationReport),
}

/// Validates `request` and runs the requested operation.
///
/// # Errors
/// * [`Error::InvalidParameter`] if the prime or root, or the vector group, is rejected
/// * [`Error::MissingInput`] if the mode needs a value that was not supplied
/// * [`Error::Range`] if the secret is outside `[1, prime - 1]`
pub fn execute(request: &Request) -> Result<Outcome> {
    let group = GroupParameters::new(request.prime.clone(), request.root.clone())?;

    match request.mode {
        Mode::Generate => {
            let secret = secret_for(request, &group)?;
            let public = group.public_key(&secret);
            info!("generated public key over a {}-bit group", group.prime().bits());
            Ok(Outcome::Generated {
                group,
                secret,
                public,
            })
        }
        Mode::Merge => {
            let secret = secret_for(request, &group)?;
            let peer = request
                .peer_public
                .clone()
                .map(PublicKey::from_value)
                .ok_or(Error::MissingInput(
                    "a public key is required to compute the shared private key",
                ))?;
            let shared = group.shared_secret(&secret, &peer);
            info!("computed shared secret over a {}-bit group", group.prime().bits());
            Ok(Outcome::Merged {
                secret,
                peer,
                shared,
            })
        }
        Mode::Test => {
            let vectors = request
                .vectors
                .as_ref()
                .ok_or(Error::MissingInput("no test vectors for this group"))?;
            let report = match &request.vector_group {
                Some((prime, root)) => {
                    let recorded = GroupParameters::new(prime.clone(), root.clone())?;
                    verify(vectors, &recorded)?
                }
                None => verify(vectors, &group)?,
            };
            info!(
                "test vectors: {} of 4 checks passed",
                4 - report.failures().count()
            );
            Ok(Outcome::Tested(report))
        }
    }
}

fn secret_for(request: &Request, group: &GroupParameters) -> Result<SecretKey> {
    let value = request
        .secret
        .clone()
        .ok_or(Error::MissingInput("a private key is required outside test mode"))?;
    SecretKey::new(value, group)
}
