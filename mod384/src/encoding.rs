//! Raw limb layout conversions.
//!
//! The byte form of a [`Limb384`] is its in-memory layout on little-endian
//! targets: 48 bytes, limb 0 first, each limb little-endian.

use crate::{LIMBS, Limb384};

#[cfg(feature = "bigint")]
use bigint::{Encoding, U384};

/// Size of an encoded [`Limb384`] in bytes.
pub const BYTES: usize = LIMBS * 8;

/// Serialize limbs as 48 little-endian bytes.
pub const fn to_le_bytes(a: &Limb384) -> [u8; BYTES] {
    let mut bytes = [0u8; BYTES];
    let mut i = 0;

    while i < BYTES {
        bytes[i] = (a[i / 8] >> ((i % 8) * 8)) as u8;
        i += 1;
    }

    bytes
}

/// Deserialize limbs from 48 little-endian bytes.
pub const fn from_le_bytes(bytes: &[u8; BYTES]) -> Limb384 {
    let mut limbs = [0u64; LIMBS];
    let mut i = 0;

    while i < BYTES {
        limbs[i / 8] |= (bytes[i] as u64) << ((i % 8) * 8);
        i += 1;
    }

    limbs
}

/// Convert limbs into a `crypto-bigint` [`U384`].
#[cfg(feature = "bigint")]
pub fn to_uint(a: &Limb384) -> U384 {
    U384::from_le_slice(&to_le_bytes(a))
}

/// Convert a `crypto-bigint` [`U384`] into limbs.
#[cfg(feature = "bigint")]
pub fn from_uint(x: &U384) -> Limb384 {
    let mut bytes = [0u8; BYTES];
    bytes.copy_from_slice(x.to_le_bytes().as_ref());
    from_le_bytes(&bytes)
}
