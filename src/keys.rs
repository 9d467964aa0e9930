//! Diffie-Hellman public key and shared secret derivation.
//!
//! Exponentiation goes through `BigUint::modpow`, which reduces after every
//! squaring and multiplication, so cost grows with the bit length of the exponent.
//!
//! Nothing here runs in constant time and secrets are never generated, only
//! accepted from the caller. Do not use this for real key exchange.

use std::fmt;

use log::trace;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::group::{self, GroupParameters};

/// A party's private exponent, guaranteed to lie in `[1, prime - 1]` for its group.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(BigUint);

impl SecretKey {
    /// # Errors
    /// [`Error::Range`] if `value` is zero or not below the group prime.
    pub fn new(value: BigUint, group: &GroupParameters) -> Result<Self> {
        check_secret_range(&value, group.prime())?;
        Ok(SecretKey(value))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// `generator^secret mod prime`; safe to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(BigUint);

impl PublicKey {
    /// Wraps a public key received from a peer.
    pub fn from_value(value: BigUint) -> Self {
        PublicKey(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

/// `peer_public^secret mod prime`, identical on both sides of the exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(BigUint);

impl SharedSecret {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Fails with [`Error::Range`] unless `1 <= secret < prime`.
pub fn check_secret_range(secret: &BigUint, prime: &BigUint) -> Result<()> {
    if secret.is_zero() || secret >= prime {
        return Err(Error::range(secret, prime));
    }
    Ok(())
}

/// Computes `root^secret mod prime` after validating the group.
///
/// # Errors
/// [`Error::InvalidParameter`] if `prime` fails [`is_prime`](crate::is_prime) or `root`
/// is not a primitive root of `prime`. No exponentiation happens in that case.
///
/// # Examples
/// ```
/// use modp_dh::derive_public_key;
/// use num_bigint::BigUint;
///
/// let public = derive_public_key(
///     &BigUint::from(1009u32),
///     &BigUint::from(263u32),
///     &BigUint::from(5u32),
/// )
/// .unwrap();
/// assert_eq!(public, BigUint::from(684u32));
/// ```
pub fn derive_public_key(prime: &BigUint, root: &BigUint, secret: &BigUint) -> Result<BigUint> {
    group::validate(prime, root)?;
    trace!("deriving public key over a {}-bit prime", prime.bits());
    Ok(root.modpow(secret, prime))
}

/// Computes `peer_public_key^secret mod prime`.
///
/// The prime is not re-validated; it is expected to be the one already used for
/// [`derive_public_key`].
///
/// # Panics
/// If `prime` is zero.
pub fn derive_shared_secret(
    secret: &BigUint,
    peer_public_key: &BigUint,
    prime: &BigUint,
) -> BigUint {
    trace!("deriving shared secret over a {}-bit prime", prime.bits());
    peer_public_key.modpow(secret, prime)
}

impl GroupParameters {
    /// Public key for `secret`. The group was validated when it was built.
    pub fn public_key(&self, secret: &SecretKey) -> PublicKey {
        trace!("deriving public key over a {}-bit prime", self.prime().bits());
        PublicKey(self.generator().modpow(secret.value(), self.prime()))
    }

    /// Shared secret between our `secret` and the peer's public key.
    pub fn shared_secret(&self, secret: &SecretKey, peer: &PublicKey) -> SharedSecret {
        SharedSecret(derive_shared_secret(secret.value(), peer.value(), self.prime()))
    }
}
