//! Field elements which use an internal Montgomery form representation on top
//! of the 384-bit modular arithmetic primitives.

use crate::{LIMBS, Limb384, Modulus384, arithmetic::is_reduced};
use core::{
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Parameters of a prime field with a 384-bit (or smaller) odd modulus.
pub trait FieldParams384: Copy + fmt::Debug + Default + Eq + Send + Sync + 'static {
    /// Precomputed Montgomery parameters of the modulus.
    const MODULUS: Modulus384;

    /// Human-readable name of the field, used in `Debug` output.
    const NAME: &'static str;
}

/// Field element modulo `P::MODULUS`, stored in Montgomery form `aR mod p`
/// with `R = 2^384`.
pub struct Fe384<P: FieldParams384> {
    limbs: Limb384,
    params: PhantomData<P>,
}

impl<P: FieldParams384> Fe384<P> {
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_montgomery([0; LIMBS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery(P::MODULUS.r());

    /// Create an element from limbs which are already in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// The limbs are expected to be in Montgomery form and reduced. Failure to
    /// maintain these invariants will lead to miscomputation.
    pub const fn from_montgomery(limbs: Limb384) -> Self {
        Self {
            limbs,
            params: PhantomData,
        }
    }

    /// Create an element from a canonical little-endian limb representation.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    pub fn from_canonical(limbs: &Limb384) -> CtOption<Self> {
        let is_some = is_reduced(limbs, &P::MODULUS.modulus());
        CtOption::new(Self::from_canonical_reduced(limbs), is_some)
    }

    /// Create an element from any 384-bit value, reducing it modulo `p`.
    pub const fn from_canonical_reduced(limbs: &Limb384) -> Self {
        Self::from_montgomery(P::MODULUS.to_montgomery(limbs))
    }

    /// Convert a `u64` into a field element.
    pub const fn from_u64(w: u64) -> Self {
        Self::from_canonical_reduced(&[w, 0, 0, 0, 0, 0])
    }

    /// Canonical little-endian limbs of this element.
    pub const fn to_canonical(&self) -> Limb384 {
        P::MODULUS.from_montgomery(&self.limbs)
    }

    /// Internal Montgomery-form limbs of this element.
    pub const fn to_montgomery(&self) -> Limb384 {
        self.limbs
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Add elements.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::MODULUS.add(&self.limbs, &rhs.limbs))
    }

    /// Subtract elements.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::MODULUS.sub(&self.limbs, &rhs.limbs))
    }

    /// Negate element.
    pub const fn neg(&self) -> Self {
        Self::from_montgomery(P::MODULUS.neg(&self.limbs))
    }

    /// Double element (add it to itself).
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiply elements.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self::from_montgomery(P::MODULUS.mul(&self.limbs, &rhs.limbs))
    }

    /// Square element.
    pub const fn square(&self) -> Self {
        Self::from_montgomery(P::MODULUS.square(&self.limbs))
    }

    /// Raise to the power of `exp`, given as canonical little-endian limbs.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub const fn pow_vartime(&self, exp: &Limb384) -> Self {
        Self::from_montgomery(P::MODULUS.pow_vartime(&self.limbs, exp))
    }

    /// Compute the multiplicative inverse via Fermat's little theorem
    /// (`a^(p-2)`), which requires the modulus to be prime.
    ///
    /// The exponent is public, so this runs in constant time with respect to
    /// `self`.
    pub fn invert(&self) -> CtOption<Self> {
        // p - 2, computed as (0 - 2) mod p
        let exp = P::MODULUS.neg(&[2, 0, 0, 0, 0, 0]);
        CtOption::new(self.pow_vartime(&exp), !self.is_zero())
    }

    /// Generate a uniformly random element by rejection sampling.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 48];

        loop {
            rng.fill_bytes(&mut bytes);
            let limbs = crate::encoding::from_le_bytes(&bytes);
            if let Some(fe) = Self::from_canonical(&limbs).into() {
                return fe;
            }
        }
    }
}

impl<P: FieldParams384> Clone for Fe384<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams384> Copy for Fe384<P> {}

impl<P: FieldParams384> Default for Fe384<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams384> ConditionallySelectable for Fe384<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_montgomery(<[u64; LIMBS]>::conditional_select(
            &a.limbs, &b.limbs, choice,
        ))
    }
}

impl<P: FieldParams384> ConstantTimeEq for Fe384<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl<P: FieldParams384> PartialEq for Fe384<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FieldParams384> Eq for Fe384<P> {}

impl<P: FieldParams384> From<u64> for Fe384<P> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

#[cfg(feature = "zeroize")]
impl<P: FieldParams384> zeroize::DefaultIsZeroes for Fe384<P> {}

//
// `core::ops` impls
//

macro_rules! impl_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl<P: FieldParams384> $op for Fe384<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                Fe384::$inner(&self, &rhs)
            }
        }

        impl<P: FieldParams384> $op<&Fe384<P>> for Fe384<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                Fe384::$inner(&self, rhs)
            }
        }

        impl<P: FieldParams384> $op<&Fe384<P>> for &Fe384<P> {
            type Output = Fe384<P>;

            #[inline]
            fn $op_fn(self, rhs: &Fe384<P>) -> Fe384<P> {
                Fe384::$inner(self, rhs)
            }
        }

        impl<P: FieldParams384> $assign for Fe384<P> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = Fe384::$inner(self, &rhs);
            }
        }

        impl<P: FieldParams384> $assign<&Fe384<P>> for Fe384<P> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = Fe384::$inner(self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, multiply);

impl<P: FieldParams384> Neg for Fe384<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Fe384::neg(&self)
    }
}

impl<P: FieldParams384> Neg for &Fe384<P> {
    type Output = Fe384<P>;

    fn neg(self) -> Fe384<P> {
        Fe384::neg(self)
    }
}

impl<P: FieldParams384> Sum for Fe384<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, P: FieldParams384> Sum<&'a Fe384<P>> for Fe384<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams384> Product for Fe384<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, P: FieldParams384> Product<&'a Fe384<P>> for Fe384<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

//
// `core::fmt` impls
//

impl<P: FieldParams384> fmt::Debug for Fe384<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fe384<{}>(0x{:X})", P::NAME, self)
    }
}

impl<P: FieldParams384> fmt::LowerHex for Fe384<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.to_canonical().iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<P: FieldParams384> fmt::UpperHex for Fe384<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.to_canonical().iter().rev() {
            write!(f, "{:016X}", limb)?;
        }
        Ok(())
    }
}
