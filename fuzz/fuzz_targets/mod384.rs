#![no_main]
use libfuzzer_sys::fuzz_target;
use mod384::{
    Limb384, Modulus384, add_mod_384, add_mod_384_assign,
    arithmetic::{add_mod, mul_mont, sub_mod},
    bls12_381::{FP, Fp, INV, MODULUS},
    encoding, mul_mod_384, mul_mod_384_assign, sub_mod_384, sub_mod_384_assign,
};

fn limbs(bytes: &[u8]) -> Limb384 {
    let mut buf = [0u8; encoding::BYTES];
    buf.copy_from_slice(&bytes[..encoding::BYTES]);
    encoding::from_le_bytes(&buf)
}

fn test_primitives(params: &Modulus384, a: &Limb384, b: &Limb384) {
    let p = params.modulus();
    let inv = params.inv();

    // Closure
    let sum = add_mod(a, b, &p);
    let diff = sub_mod(a, b, &p);
    let product = mul_mont(a, b, &p, inv);
    assert!(bool::from(params.is_reduced(&sum)));
    assert!(bool::from(params.is_reduced(&diff)));
    assert!(bool::from(params.is_reduced(&product)));

    // Round trip
    assert_eq!(sub_mod(&sum, b, &p), *a);
    assert_eq!(add_mod(&diff, b, &p), *a);

    // Commutativity
    assert_eq!(sum, add_mod(b, a, &p));
    assert_eq!(product, mul_mont(b, a, &p, inv));

    // In-place forms agree with fresh output
    let mut out = [0u64; 6];
    let mut x = *a;
    add_mod_384(&mut out, a, b, &p);
    add_mod_384_assign(&mut x, b, &p);
    assert_eq!(x, out);

    let mut x = *a;
    sub_mod_384(&mut out, a, b, &p);
    sub_mod_384_assign(&mut x, b, &p);
    assert_eq!(x, out);

    let mut x = *a;
    mul_mod_384(&mut out, a, b, &p, inv);
    mul_mod_384_assign(&mut x, b, &p, inv);
    assert_eq!(x, out);

    // Montgomery domain
    let a_mont = params.to_montgomery(a);
    assert_eq!(params.from_montgomery(&a_mont), *a);
}

fn test_field(fe1: Fp, fe2: Fp, fe3: Fp) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Identity
    assert_eq!(fe1 + Fp::ZERO, fe1);
    assert_eq!(fe1 * Fp::ONE, fe1);
    assert_eq!(fe1 - fe1, Fp::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);
    assert_eq!((fe1 + fe2) * fe3, fe1 * fe3 + fe2 * fe3);

    // Inverse, square, double
    assert_eq!(fe1 + (-fe1), Fp::ZERO);
    assert_eq!(fe1.square(), fe1 * fe1);
    assert_eq!(fe1.double(), fe1 + fe1);
    if !bool::from(fe1.is_zero()) {
        assert_eq!(fe1 * fe1.invert().unwrap(), Fp::ONE);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 * encoding::BYTES {
        return;
    }

    let a = limbs(&data[..]);
    let b = limbs(&data[encoding::BYTES..]);
    let c = limbs(&data[2 * encoding::BYTES..]);

    // Unreduced operands must not panic
    let _ = add_mod(&a, &b, &MODULUS);
    let _ = sub_mod(&a, &b, &MODULUS);
    let _ = mul_mont(&a, &b, &MODULUS, INV);

    let a = FP.to_montgomery(&a);
    let b = FP.to_montgomery(&b);
    test_primitives(&FP, &a, &b);

    // Any odd modulus above one
    let mut p = c;
    p[0] |= 1;
    p[5] |= 1 << 63;
    if let Ok(params) = Modulus384::new(&p) {
        let a = params.to_montgomery(&a);
        let b = params.to_montgomery(&b);
        test_primitives(&params, &a, &b);
    }

    test_field(
        Fp::from_montgomery(a),
        Fp::from_montgomery(b),
        Fp::from_canonical_reduced(&c),
    );
});
