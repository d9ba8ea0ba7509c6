//! BLS12-381 base field element tests.

use mod384::{
    bls12_381::{FP, Fp, MODULUS},
    encoding,
};
use proptest::prelude::*;
use subtle::ConditionallySelectable;

prop_compose! {
    fn field_element()(limbs in any::<[u64; 6]>()) -> Fp {
        Fp::from_canonical_reduced(&limbs)
    }
}

proptest! {
    #[test]
    fn add_is_associative(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a + (b + c), (a + b) + c);
    }

    #[test]
    fn mul_is_associative(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a * (b * c), (a * b) * c);
    }

    #[test]
    fn mul_commutes(a in field_element(), b in field_element()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn distributive(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn negation(a in field_element()) {
        prop_assert_eq!(a + (-a), Fp::ZERO);
        prop_assert_eq!(a - a, Fp::ZERO);
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn double_and_square(a in field_element()) {
        prop_assert_eq!(a.double(), a + a);
        prop_assert_eq!(a.square(), a * a);
    }

    #[test]
    fn invert(a in field_element()) {
        let a = Fp::conditional_select(&a, &Fp::ONE, a.is_zero());
        prop_assert_eq!(a * a.invert().unwrap(), Fp::ONE);
    }

    #[test]
    fn canonical_round_trip(a in field_element()) {
        let canonical = a.to_canonical();
        prop_assert!(bool::from(FP.is_reduced(&canonical)));
        prop_assert_eq!(Fp::from_canonical(&canonical).unwrap(), a);
    }

    #[test]
    fn bytes_round_trip(a in field_element()) {
        let bytes = encoding::to_le_bytes(&a.to_canonical());
        prop_assert_eq!(encoding::from_le_bytes(&bytes), a.to_canonical());
    }
}

#[test]
fn from_canonical_rejects_unreduced() {
    assert!(bool::from(Fp::from_canonical(&MODULUS).is_none()));
    assert!(bool::from(Fp::from_canonical(&[u64::MAX; 6]).is_none()));
    assert!(bool::from(Fp::from_canonical(&[0; 6]).is_some()));
}

#[test]
fn montgomery_representation() {
    let x = Fp::from(5u64);
    assert_eq!(x.to_montgomery(), FP.to_montgomery(&[5, 0, 0, 0, 0, 0]));
    assert_eq!(Fp::from_montgomery(x.to_montgomery()), x);
}

#[cfg(feature = "rand_core")]
#[test]
fn random_elements_are_reduced() {
    use rand_core::{OsRng, TryRngCore};

    let mut rng = OsRng.unwrap_err();
    for _ in 0..32 {
        let x = Fp::random(&mut rng);
        assert!(bool::from(FP.is_reduced(&x.to_canonical())));
    }
}

#[cfg(feature = "zeroize")]
#[test]
fn zeroize() {
    use zeroize::Zeroize;

    let mut x = Fp::from(42u64);
    x.zeroize();
    assert_eq!(x, Fp::ZERO);
}
