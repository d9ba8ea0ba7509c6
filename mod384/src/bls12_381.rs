//! BLS12-381 base field parameters.
//!
//! p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use crate::{Fe384, FieldParams384, Limb384, Modulus384};

/// Base field modulus as little-endian limbs.
pub const MODULUS: Limb384 = [
    0xb9feffffffffaaab,
    0x1eabfffeb153ffff,
    0x6730d2a0f6b0f624,
    0x64774b84f38512bf,
    0x4b1ba7b6434bacd7,
    0x1a0111ea397fe69a,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
pub const INV: u64 = 0x89f3fffcfffcfffd;

/// Montgomery parameters for the base field.
pub const FP: Modulus384 = match Modulus384::from_parts(&MODULUS, INV) {
    Ok(modulus) => modulus,
    Err(_) => panic!("invalid BLS12-381 base field parameters"),
};

/// Marker type for the BLS12-381 base field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381Fp;

impl FieldParams384 for Bls12381Fp {
    const MODULUS: Modulus384 = FP;
    const NAME: &'static str = "BLS12-381 Fp";
}

/// Element of the BLS12-381 base field.
pub type Fp = Fe384<Bls12381Fp>;

#[cfg(test)]
mod tests {
    use super::{FP, Fp};

    #[test]
    fn r_constant() {
        // R = 2^384 mod p
        assert_eq!(
            FP.r(),
            [
                0x760900000002fffd,
                0xebf4000bc40c0002,
                0x5f48985753c758ba,
                0x77ce585370525745,
                0x5c071a97a256ec6d,
                0x15f65ec3fa80e493,
            ]
        );
    }

    #[test]
    fn r2_constant() {
        // R^2 = 2^768 mod p
        assert_eq!(
            FP.r2(),
            [
                0xf4df1f341c341746,
                0x0a76e6a609d104f1,
                0x8de5476c4c95b6d5,
                0x67eb88a9939d83c0,
                0x9a793e85b519952d,
                0x11988fe592cae3aa,
            ]
        );
    }

    #[test]
    fn one_is_r() {
        assert_eq!(Fp::ONE.to_montgomery(), FP.r());
    }
}
