//! Modular addition, subtraction and Montgomery multiplication over 384-bit
//! integers represented as six little-endian 64-bit limbs.
//!
//! All operations are branchless with respect to their inputs: reductions
//! select between candidates with masks derived from the final carry/borrow.
//!
//! Operands are expected to be reduced modulo `p`. Unreduced operands yield an
//! unspecified (but memory-safe) result; nothing here ever panics.

use crate::{
    LIMBS, Limb384,
    util::{adc, mac, sbb},
};
use subtle::Choice;

/// Computes `(a + b) mod p`.
///
/// The raw sum may be 385 bits wide, so the final carry takes part in deciding
/// whether `p` has to be subtracted.
#[inline]
pub const fn add_mod(a: &Limb384, b: &Limb384, p: &Limb384) -> Limb384 {
    let mut sum = [0u64; LIMBS];
    let mut carry = 0;
    let mut i = 0;

    while i < LIMBS {
        let (w, c) = adc(a[i], b[i], carry);
        sum[i] = w;
        carry = c;
        i += 1;
    }

    reduce_once(&sum, carry, p)
}

/// Computes `(a - b) mod p`.
#[inline]
pub const fn sub_mod(a: &Limb384, b: &Limb384, p: &Limb384) -> Limb384 {
    let mut diff = [0u64; LIMBS];
    let mut borrow = 0;
    let mut i = 0;

    while i < LIMBS {
        let (w, bw) = sbb(a[i], b[i], borrow);
        diff[i] = w;
        borrow = bw;
        i += 1;
    }

    // If underflow occurred on the final limb, borrow = 0xfff...fff, otherwise
    // borrow = 0x000...000. Thus, we use it as a mask to conditionally add the
    // modulus.
    let mut carry = 0;
    i = 0;

    while i < LIMBS {
        let (w, c) = adc(diff[i], p[i] & borrow, carry);
        diff[i] = w;
        carry = c;
        i += 1;
    }

    diff
}

/// Montgomery multiplication: computes `a * b * R^-1 mod p` where `R = 2^384`.
///
/// `inv` must be `-p^-1 mod 2^64` and `p` must be odd.
///
/// Uses coarsely integrated operand scanning:
/// ```text
/// T <- 0
/// for i in 0..n {
///     T <- T + a * b[i]
///     m <- T[0] * inv mod 2^64
///     T <- (T + m * p) / 2^64
/// }
/// if T >= p {
///     T <- T - p
/// }
/// ```
///
/// With reduced operands `T < 2p` holds after every round, so the accumulator
/// needs `n + 1` limbs plus one carry word.
pub const fn mul_mont(a: &Limb384, b: &Limb384, p: &Limb384, inv: u64) -> Limb384 {
    let mut t = [0u64; LIMBS + 1];
    let mut t_hi = 0u64;
    let mut i = 0;

    while i < LIMBS {
        // T += a * b[i]
        let mut carry = 0;
        let mut j = 0;
        while j < LIMBS {
            let (w, c) = mac(t[j], a[j], b[i], carry);
            t[j] = w;
            carry = c;
            j += 1;
        }
        let (w, c) = adc(t[LIMBS], carry, 0);
        t[LIMBS] = w;
        t_hi = c;

        // T = (T + m * p) / 2^64, where m is chosen so the low limb vanishes
        let m = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], m, p[0], 0);
        j = 1;
        while j < LIMBS {
            let (w, c) = mac(t[j], m, p[j], carry);
            t[j - 1] = w;
            carry = c;
            j += 1;
        }
        let (w, c) = adc(t[LIMBS], carry, 0);
        t[LIMBS - 1] = w;
        t[LIMBS] = t_hi.wrapping_add(c);

        i += 1;
    }

    let lo = [t[0], t[1], t[2], t[3], t[4], t[5]];
    reduce_once(&lo, t[LIMBS], p)
}

/// Constant-time check that `a < p`.
#[inline]
pub fn is_reduced(a: &Limb384, p: &Limb384) -> Choice {
    Choice::from((lt_mask(a, p) & 1) as u8)
}

/// Returns `u64::MAX` if `a < p`, otherwise `0`.
pub(crate) const fn lt_mask(a: &Limb384, p: &Limb384) -> u64 {
    let mut borrow = 0;
    let mut i = 0;

    while i < LIMBS {
        let (_, b) = sbb(a[i], p[i], borrow);
        borrow = b;
        i += 1;
    }

    borrow
}

/// Subtracts `p` from the 385-bit value `hi:lo` when it is not below `p`.
///
/// `hi` is the carry word above the six limbs and must be `0` or `1`.
#[inline]
const fn reduce_once(lo: &Limb384, hi: u64, p: &Limb384) -> Limb384 {
    let mut ret = [0u64; LIMBS];
    let mut borrow = 0;
    let mut i = 0;

    while i < LIMBS {
        let (w, b) = sbb(lo[i], p[i], borrow);
        ret[i] = w;
        borrow = b;
        i += 1;
    }

    // Borrow out of the carry word means `hi:lo < p`: keep the unreduced value.
    let (_, keep) = sbb(hi, 0, borrow);

    i = 0;
    while i < LIMBS {
        ret[i] ^= (ret[i] ^ lo[i]) & keep;
        i += 1;
    }

    ret
}

/// Writes `(a + b) mod p` into `out`.
#[inline]
pub fn add_mod_384(out: &mut Limb384, a: &Limb384, b: &Limb384, p: &Limb384) {
    *out = add_mod(a, b, p);
}

/// Writes `(a - b) mod p` into `out`.
#[inline]
pub fn sub_mod_384(out: &mut Limb384, a: &Limb384, b: &Limb384, p: &Limb384) {
    *out = sub_mod(a, b, p);
}

/// Writes the Montgomery product `a * b * R^-1 mod p` into `out`.
///
/// See [`mul_mont`].
#[inline]
pub fn mul_mod_384(out: &mut Limb384, a: &Limb384, b: &Limb384, p: &Limb384, inv: u64) {
    *out = mul_mont(a, b, p, inv);
}

/// In-place form of [`add_mod_384`]: `a <- (a + b) mod p`.
#[inline]
pub fn add_mod_384_assign(a: &mut Limb384, b: &Limb384, p: &Limb384) {
    *a = add_mod(a, b, p);
}

/// In-place form of [`sub_mod_384`]: `a <- (a - b) mod p`.
#[inline]
pub fn sub_mod_384_assign(a: &mut Limb384, b: &Limb384, p: &Limb384) {
    *a = sub_mod(a, b, p);
}

/// In-place form of [`mul_mod_384`]: `a <- a * b * R^-1 mod p`.
#[inline]
pub fn mul_mod_384_assign(a: &mut Limb384, b: &Limb384, p: &Limb384, inv: u64) {
    *a = mul_mont(a, b, p, inv);
}
