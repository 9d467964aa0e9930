use modp_dh::{
    derive_public_key, derive_shared_secret, is_prime, is_primitive_root, verify, Error,
    ErrorKind, GroupParameters, ParameterError, SecretKey, WellKnownGroup, SMALL_MODULUS_LIMIT,
};
use num_bigint::BigUint;
use proptest::prelude::*;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Small primes with one of their primitive roots.
const SMALL_GROUPS: [(u64, u64); 7] = [
    (11, 2),
    (23, 5),
    (101, 2),
    (1009, 263),
    (1009, 11),
    (7919, 7),
    (9973, 11),
];

fn small_group_and_secrets() -> impl Strategy<Value = (u64, u64, u64, u64)> {
    prop::sample::select(SMALL_GROUPS.to_vec())
        .prop_flat_map(|(p, g)| (Just(p), Just(g), 1..p, 1..p))
}

proptest! {
    #[test]
    fn shared_secrets_agree((p, g, a, b) in small_group_and_secrets()) {
        let (p, g, a, b) = (big(p), big(g), big(a), big(b));
        let pub_a = derive_public_key(&p, &g, &a).unwrap();
        let pub_b = derive_public_key(&p, &g, &b).unwrap();
        prop_assert_eq!(
            derive_shared_secret(&a, &pub_b, &p),
            derive_shared_secret(&b, &pub_a, &p)
        );
    }

    #[test]
    fn derivation_is_deterministic((p, g, a, _b) in small_group_and_secrets()) {
        let (p, g, a) = (big(p), big(g), big(a));
        prop_assert_eq!(
            derive_public_key(&p, &g, &a).unwrap(),
            derive_public_key(&p, &g, &a).unwrap()
        );
        prop_assert_eq!(derive_shared_secret(&a, &g, &p), derive_shared_secret(&a, &g, &p));
    }

    #[test]
    fn public_keys_stay_in_group((p, g, a, _b) in small_group_and_secrets()) {
        let public = derive_public_key(&big(p), &big(g), &big(a)).unwrap();
        prop_assert!(public >= big(1) && public < big(p));
    }

    #[test]
    fn large_candidates_always_pass(n in SMALL_MODULUS_LIMIT..u64::MAX) {
        prop_assert!(is_prime(&big(n)));
        prop_assert!(is_primitive_root(&big(2), &big(n)));
    }

    #[test]
    fn large_group_exchange(a in 1u64.., b in 1u64..) {
        let group = WellKnownGroup::Rfc5114Modp2048.parameters();
        let a = SecretKey::new(big(a), group).unwrap();
        let b = SecretKey::new(big(b), group).unwrap();
        let pub_a = group.public_key(&a);
        let pub_b = group.public_key(&b);
        prop_assert_eq!(group.shared_secret(&a, &pub_b), group.shared_secret(&b, &pub_a));
    }
}

#[test]
fn documented_small_group() {
    assert!(is_prime(&big(1009)));
    assert!(is_primitive_root(&big(263), &big(1009)));
    assert!(!is_primitive_root(&big(4), &big(1009)));
}

#[test]
fn odd_candidates_below_limit_match_trial_division() {
    for n in (1..SMALL_MODULUS_LIMIT).step_by(2) {
        let expected = n > 1 && (3..n).step_by(2).take_while(|d| d * d <= n).all(|d| n % d != 0);
        assert_eq!(is_prime(&big(n)), expected, "n = {n}");
    }
}

#[test]
fn composite_prime_rejected_before_exponentiation() {
    // A secret this large would take a long time to exponentiate over any modulus.
    let huge_secret = BigUint::from(1u32) << 1_000_000usize;
    let err = derive_public_key(&big(561), &big(2), &huge_secret).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(matches!(err, Error::InvalidParameter(ParameterError::NotPrime(_))));
}

#[test]
fn secret_bounds() {
    let group = GroupParameters::new(big(1009), big(263)).unwrap();
    assert_eq!(
        group.public_key(&SecretKey::new(big(1), &group).unwrap()).value(),
        &big(263)
    );
    assert!(SecretKey::new(big(1008), &group).is_ok());
    assert_eq!(SecretKey::new(big(0), &group).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(SecretKey::new(big(1009), &group).unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn canonical_vectors_pass_all_checks() {
    let group = WellKnownGroup::default();
    let report = verify(group.test_vectors().unwrap(), group.parameters()).unwrap();
    let labels: Vec<_> = report.checks().iter().map(|c| (c.label, c.passed())).collect();
    assert_eq!(
        labels,
        vec![
            ("A public key", true),
            ("A shared private key", true),
            ("B public key", true),
            ("B shared private key", true),
        ]
    );
}
