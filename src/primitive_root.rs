//! Primitive-root check for group generators.
//!
//! Like [`is_prime`](crate::is_prime), the answer is exact only for moduli below
//! [`SMALL_MODULUS_LIMIT`](crate::primality::SMALL_MODULUS_LIMIT). Larger generators are
//! accepted as given.

use log::debug;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::primality::small_value;

/// Decides whether `r` generates the whole multiplicative group modulo the prime `p`.
///
/// Below [`SMALL_MODULUS_LIMIT`](crate::primality::SMALL_MODULUS_LIMIT) the powers
/// `r^0, r^1, ..., r^(p-2)` are enumerated and must be pairwise distinct. At or above
/// the limit the generator is trusted, mirroring [`is_prime`](crate::is_prime).
///
/// `p` must already be known to be prime; the answer is meaningless otherwise.
///
/// # Examples
/// ```
/// use modp_dh::is_primitive_root;
/// use num_bigint::BigUint;
///
/// let p = BigUint::from(1009u32);
/// assert!(is_primitive_root(&BigUint::from(263u32), &p));
/// assert!(!is_primitive_root(&BigUint::from(4u32), &p));
/// ```
///
/// # Complexity
/// * Time: O(p) below the limit, O(1) above it
/// * Space: O(p) below the limit
pub fn is_primitive_root(r: &BigUint, p: &BigUint) -> bool {
    let Some(modulus) = small_value(p) else {
        debug!(
            "modulus of {} bits is above the exact-check limit, trusting the generator",
            p.bits()
        );
        return true;
    };
    if modulus < 2 {
        return false;
    }
    // modulus < 10_000, so the remainder always fits.
    let r = (r % modulus).to_u64().unwrap_or_default();
    generates_all_residues(r, modulus)
}

fn generates_all_residues(r: u64, p: u64) -> bool {
    if r == 0 {
        return false;
    }
    let order = (p - 1) as usize;
    let mut seen = vec![false; p as usize];
    let mut power = 1 % p;
    for _ in 0..order {
        if seen[power as usize] {
            return false;
        }
        seen[power as usize] = true;
        power = power * r % p;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::{is_prime, SMALL_MODULUS_LIMIT};
    use std::collections::HashSet;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn oracle(r: u64, p: u64) -> bool {
        let powers: HashSet<u64> = (0..p - 1)
            .map(|i| big(r).modpow(&big(i), &big(p)).to_u64().unwrap())
            .collect();
        powers.len() as u64 == p - 1 && r % p != 0
    }

    #[test]
    fn test_documented_small_group() {
        let p = big(1009);
        assert!(is_prime(&p));
        assert!(is_primitive_root(&big(263), &p));
        assert!(is_primitive_root(&big(11), &p));
        assert!(!is_primitive_root(&big(4), &p));
        assert!(!is_primitive_root(&big(1), &p));
        assert!(!is_primitive_root(&big(1008), &p)); // -1 has order 2
    }

    #[test]
    fn test_agrees_with_set_enumeration() {
        for p in [3u64, 5, 7, 11, 13, 23, 97, 101] {
            for r in 0..p + 3 {
                assert_eq!(
                    is_primitive_root(&big(r), &big(p)),
                    oracle(r, p),
                    "r = {r}, p = {p}"
                );
            }
        }
    }

    #[test]
    fn test_known_generators() {
        assert!(is_primitive_root(&big(2), &big(11)));
        assert!(!is_primitive_root(&big(2), &big(7)));
        assert!(is_primitive_root(&big(3), &big(7)));
        assert!(is_primitive_root(&big(5), &big(23)));
        // Reduced modulo p before enumeration.
        assert!(is_primitive_root(&big(263 + 1009), &big(1009)));
    }

    #[test]
    fn test_degenerate_moduli() {
        assert!(!is_primitive_root(&big(3), &big(0)));
        assert!(!is_primitive_root(&big(3), &big(1)));
        assert!(is_primitive_root(&big(1), &big(2)));
        assert!(!is_primitive_root(&big(0), &big(2)));
    }

    #[test]
    fn test_large_moduli_are_trusted() {
        let p = big(SMALL_MODULUS_LIMIT);
        assert!(is_primitive_root(&big(4), &p));
        assert!(is_primitive_root(&big(0), &(big(1) << 2048usize)));
    }
}
