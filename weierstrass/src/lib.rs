#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! # weierstrass
//!
//! Pure Rust ECDSA over short Weierstrass curves `y² = x³ + ax + b` whose
//! domain parameters are chosen at runtime.
//!
//! - [`Curve`]: validated domain parameters, plus the named curves in
//!   [`curve`] (NIST P-192 to P-521, secp256k1, Brainpool r1 224 to 512)
//! - [`Point`]: affine points with the group law and scalar multiplication
//! - [`ecdsa`]: signing and verification with RFC 6979 deterministic nonces,
//!   keys, and DER / raw / hex / base64 signature encodings
//! - [`sec1`]: SEC1 point encoding
//!
//! Integers are arbitrary precision [`BigUint`]s. Secret-dependent
//! comparisons go through [`subtle`] and scalar multiplication runs a
//! fixed-length ladder, but big-integer arithmetic itself is not constant
//! time.
//!
//! ## Usage
//!
#![cfg_attr(feature = "sha2", doc = "```")]
#![cfg_attr(not(feature = "sha2"), doc = "```ignore")]
//! # fn example() -> Result<(), weierstrass::Error> {
//! use weierstrass::{curve, ecdsa, num_bigint::BigUint, sha2::Sha256};
//!
//! let curve = curve::secp256k1();
//! let d = BigUint::from(0xc0ffee_u32);
//! let public_key = curve.generator().scalar_mul(&d);
//!
//! let signature = ecdsa::sign::<Sha256>(b"hello", &d, curve)?;
//! assert!(ecdsa::verify::<Sha256>(&signature, b"hello", &public_key, curve)?);
//! assert!(!ecdsa::verify::<Sha256>(&signature, b"hullo", &public_key, curve)?);
//! # Ok(())
//! # }
//! ```

extern crate alloc;

pub mod curve;
pub mod ecdsa;
pub mod rfc6979;
pub mod sec1;

mod error;
mod field;
mod point;

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    point::Point,
};
pub use digest;
pub use num_bigint::{self, BigUint};

#[cfg(feature = "sha2")]
pub use sha2;
#[cfg(feature = "sha3")]
pub use sha3;
