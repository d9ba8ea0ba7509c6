#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

pub mod arithmetic;
pub mod bls12_381;
pub mod encoding;

mod error;
mod field;
mod modulus;
mod util;

pub use crate::{
    arithmetic::{
        add_mod_384, add_mod_384_assign, mul_mod_384, mul_mod_384_assign, sub_mod_384,
        sub_mod_384_assign,
    },
    error::{Error, Result},
    field::{Fe384, FieldParams384},
    modulus::Modulus384,
};
pub use subtle;

#[cfg(feature = "bigint")]
pub use bigint;
#[cfg(feature = "rand_core")]
pub use rand_core;
#[cfg(feature = "zeroize")]
pub use zeroize;

/// Number of 64-bit limbs in a 384-bit integer.
pub const LIMBS: usize = 6;

/// 384-bit unsigned integer as little-endian 64-bit limbs (limb 0 is the least
/// significant).
pub type Limb384 = [u64; LIMBS];
