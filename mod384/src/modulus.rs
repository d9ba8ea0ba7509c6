//! Precomputed Montgomery parameters for a 384-bit odd modulus.

use crate::{
    Error, LIMBS, Limb384, Result,
    arithmetic::{add_mod, lt_mask, mul_mont, sub_mod},
};
use subtle::Choice;

/// `1` as a [`Limb384`].
const ONE: Limb384 = [1, 0, 0, 0, 0, 0];

/// Odd 384-bit modulus `p` along with the constants Montgomery arithmetic
/// modulo `p` needs:
///
/// - `inv = -p^-1 mod 2^64`
/// - `r = R mod p`, the Montgomery form of `1`
/// - `r2 = R^2 mod p`, used to convert into Montgomery form
///
/// where `R = 2^384`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus384 {
    p: Limb384,
    inv: u64,
    r: Limb384,
    r2: Limb384,
}

impl Modulus384 {
    /// Compute the Montgomery parameters for the modulus `p`.
    ///
    /// # Errors
    ///
    /// - [`Error::EvenModulus`] if `p` is even
    /// - [`Error::ModulusTooSmall`] if `p` is `1`
    pub const fn new(p: &Limb384) -> Result<Self> {
        if p[0] & 1 == 0 {
            return Err(Error::EvenModulus);
        }

        if lt_mask(&ONE, p) == 0 {
            return Err(Error::ModulusTooSmall);
        }

        Ok(Self::with_inv(p, compute_inv(p[0])))
    }

    /// Build parameters for `p` from a caller-supplied Montgomery constant,
    /// checking that `p[0] * inv ≡ -1 mod 2^64`.
    ///
    /// # Errors
    ///
    /// Same as [`Modulus384::new`], plus [`Error::InvalidInverse`].
    pub const fn from_parts(p: &Limb384, inv: u64) -> Result<Self> {
        match Self::new(p) {
            Ok(modulus) if modulus.inv == inv => Ok(modulus),
            Ok(_) => Err(Error::InvalidInverse),
            Err(e) => Err(e),
        }
    }

    const fn with_inv(p: &Limb384, inv: u64) -> Self {
        // 2^384 mod p and 2^768 mod p by repeated doubling of 1
        let mut r = ONE;
        let mut i = 0;
        while i < 384 {
            r = add_mod(&r, &r, p);
            i += 1;
        }

        let mut r2 = r;
        i = 0;
        while i < 384 {
            r2 = add_mod(&r2, &r2, p);
            i += 1;
        }

        Self { p: *p, inv, r, r2 }
    }

    /// The modulus `p`.
    pub const fn modulus(&self) -> Limb384 {
        self.p
    }

    /// `-p^-1 mod 2^64`.
    pub const fn inv(&self) -> u64 {
        self.inv
    }

    /// `R mod p`, i.e. `1` in Montgomery form.
    pub const fn r(&self) -> Limb384 {
        self.r
    }

    /// `R^2 mod p`.
    pub const fn r2(&self) -> Limb384 {
        self.r2
    }

    /// Constant-time check that `a < p`.
    pub fn is_reduced(&self, a: &Limb384) -> Choice {
        crate::arithmetic::is_reduced(a, &self.p)
    }

    /// `(a + b) mod p`.
    pub const fn add(&self, a: &Limb384, b: &Limb384) -> Limb384 {
        add_mod(a, b, &self.p)
    }

    /// `(a - b) mod p`.
    pub const fn sub(&self, a: &Limb384, b: &Limb384) -> Limb384 {
        sub_mod(a, b, &self.p)
    }

    /// `-a mod p`.
    pub const fn neg(&self, a: &Limb384) -> Limb384 {
        sub_mod(&[0; LIMBS], a, &self.p)
    }

    /// Montgomery product `a * b * R^-1 mod p`.
    pub const fn mul(&self, a: &Limb384, b: &Limb384) -> Limb384 {
        mul_mont(a, b, &self.p, self.inv)
    }

    /// Montgomery square `a * a * R^-1 mod p`.
    pub const fn square(&self, a: &Limb384) -> Limb384 {
        mul_mont(a, a, &self.p, self.inv)
    }

    /// Convert `a` into Montgomery form: `a * R mod p`.
    ///
    /// Unlike the other operations this accepts any 384-bit `a`: multiplying
    /// by `R^2 mod p < p` keeps the intermediate below `2p`, so the output is
    /// fully reduced.
    pub const fn to_montgomery(&self, a: &Limb384) -> Limb384 {
        mul_mont(a, &self.r2, &self.p, self.inv)
    }

    /// Convert `a` out of Montgomery form: `a * R^-1 mod p`.
    pub const fn from_montgomery(&self, a: &Limb384) -> Limb384 {
        mul_mont(a, &ONE, &self.p, self.inv)
    }

    /// Montgomery-form exponentiation `a^exp`, with `exp` given as
    /// little-endian limbs in canonical (non-Montgomery) form.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub const fn pow_vartime(&self, a: &Limb384, exp: &Limb384) -> Limb384 {
        let mut res = self.r;
        let mut i = LIMBS;

        while i > 0 {
            i -= 1;
            let mut j = 64;
            while j > 0 {
                j -= 1;
                res = self.square(&res);
                if (exp[i] >> j) & 1 == 1 {
                    res = self.mul(&res, a);
                }
            }
        }

        res
    }
}

/// Compute `-p0^-1 mod 2^64` for odd `p0` by Newton iteration.
///
/// `x = 1` is correct modulo `2`, and each step `x <- x * (2 - p0 * x)`
/// doubles the number of correct low bits, so six steps reach 64 bits.
const fn compute_inv(p0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;

    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(p0.wrapping_mul(inv)));
        i += 1;
    }

    inv.wrapping_neg()
}
