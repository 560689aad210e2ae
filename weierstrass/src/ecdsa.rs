//! Elliptic Curve Digital Signature Algorithm (ECDSA) as specified in
//! [FIPS 186-5], with nonces derived deterministically per [RFC 6979].
//!
//! ## Algorithm
//!
//! ```text
//! Sign (d, m):
//! S1: e = H(m), z = leftmost bits(q) bits of e
//! S2: k = RFC6979(d, e, q, H)
//! S3: (x1, y1) = k·G, r = x1 mod q, fail if r = 0
//! S4: s = k⁻¹·(z + r·d) mod q, fail if s = 0
//! S5: the signature of m is (r, s)
//!
//! Verify (Q, m, r, s):
//! V1: Q must be a point of the curve other than the identity
//! V2: 1 ≤ r < q and 1 ≤ s < q
//! V3: w = s⁻¹ mod q, u1 = z·w mod q, u2 = r·w mod q
//! V4: (x1, y1) = u1·G + u2·Q, reject if it is the identity
//! V5: accept iff x1 mod q = r
//! ```
//!
//! ## Usage
//!
#![cfg_attr(feature = "sha2", doc = "```")]
#![cfg_attr(not(feature = "sha2"), doc = "```ignore")]
//! # fn example() -> Result<(), weierstrass::Error> {
//! use weierstrass::{curve, ecdsa::{self, SigningKey}, sha2::Sha256};
//!
//! let signing_key = SigningKey::from_slice(curve::p256(), &[0x2a; 32])?;
//! let signature = signing_key.sign::<Sha256>(b"test message")?;
//!
//! let der = ecdsa::der::encode(&signature)?;
//! let decoded = ecdsa::der::decode(&der)?;
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify::<Sha256>(b"test message", &decoded)?);
//! # Ok(())
//! # }
//! ```
//!
//! [FIPS 186-5]: https://csrc.nist.gov/pubs/fips/186-5/final
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979

pub mod der;
pub mod raw;
pub mod text;

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{Curve, Error, Point, Result, curve::same_curve, field, rfc6979};
use core::fmt::{self, Debug};
use digest::{Digest, core_api::BlockSizeUser};
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::ConstantTimeEq;

/// ECDSA signature: the pair of scalars `(r, s)`.
///
/// Signatures are not bound to a curve. Whether `r` and `s` lie in
/// `[1, q-1]` is checked when the signature is verified against a curve.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its `r` and `s` components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` scalars.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Is `s` in the lower half of `[1, q-1]`?
    pub fn is_low_s(&self, curve: &Curve) -> bool {
        self.s <= curve.q() >> 1
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Returns `(r, q - s)` when `s > q/2`, and the signature unchanged
    /// otherwise. Both forms verify against the same key and message.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self, curve: &Curve) -> Self {
        if self.is_low_s(curve) || self.s >= *curve.q() {
            return self.clone();
        }

        Self {
            r: self.r.clone(),
            s: curve.q() - &self.s,
        }
    }

    /// Serialize this signature as ASN.1 DER.
    pub fn to_der(&self) -> Result<alloc::vec::Vec<u8>> {
        der::encode(self)
    }

    /// Parse an ASN.1 DER encoded signature.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        der::decode(bytes)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::Signature(r: {:X}, s: {:X})", self.r, self.s)
    }
}

/// Sign `message` with secret scalar `d`, hashing it with `D`.
///
/// `D` is also the hash function instantiating the RFC 6979 HMAC-DRBG.
pub fn sign<D>(message: &[u8], d: &BigUint, curve: &Curve) -> Result<Signature>
where
    D: Digest + BlockSizeUser,
{
    sign_prehashed::<D>(&D::digest(message), d, curve)
}

/// Sign a message digest computed with `D`.
pub fn sign_prehashed<D>(digest: &[u8], d: &BigUint, curve: &Curve) -> Result<Signature>
where
    D: Digest + BlockSizeUser,
{
    sign_prehashed_rfc6979::<D>(digest, d, curve, &[])
}

/// Compute a signature using RFC 6979 to deterministically derive `k`,
/// mixing in the optional additional data of RFC 6979 § 3.6.
pub(crate) fn sign_prehashed_rfc6979<D>(
    digest: &[u8],
    d: &BigUint,
    curve: &Curve,
    data: &[u8],
) -> Result<Signature>
where
    D: Digest + BlockSizeUser,
{
    let q = curve.q();

    if d.is_zero() || d >= q {
        return Err(Error::InvalidPrivateKey);
    }

    // S1: z = leftmost bits(q) bits of e
    let z = rfc6979::bits2int(digest, q.bits());

    // S2: k = RFC6979(d, e, q, H)
    let k = rfc6979::generate_k::<D>(d, q, digest, data)?;

    // S3: (x1, y1) = k·G, r = x1 mod q
    let big_r = curve.generator().scalar_mul(&k);
    let r = big_r.x().ok_or(Error::DegenerateSignature)? % q;
    if r.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    // S4: s = k⁻¹·(z + r·d) mod q
    let k_inv = field::invert(&k, q).ok_or(Error::DegenerateSignature)?;
    let s = field::mul(&k_inv, &field::add(&z, &field::mul(&r, d, q), q), q);
    if s.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    // S5: the signature of m is (r, s)
    Ok(Signature { r, s })
}

/// Verify `signature` over `message` against public key `public_key`,
/// hashing the message with `D`.
///
/// Returns `Ok(false)` for a well-formed signature that does not match.
/// Fails with [`Error::InvalidPublicKey`] if `public_key` is the identity or
/// lies on a different curve, and with [`Error::InvalidSignatureRange`] if
/// `r` or `s` is outside of `[1, q-1]`.
pub fn verify<D>(
    signature: &Signature,
    message: &[u8],
    public_key: &Point<'_>,
    curve: &Curve,
) -> Result<bool>
where
    D: Digest,
{
    verify_prehashed(signature, &D::digest(message), public_key, curve)
}

/// Verify `signature` over a message digest.
///
/// See [`verify`] for the error conditions.
pub fn verify_prehashed(
    signature: &Signature,
    digest: &[u8],
    public_key: &Point<'_>,
    curve: &Curve,
) -> Result<bool> {
    // V1: Q must be a point of the curve other than the identity
    if !same_curve(public_key.curve(), curve) || public_key.is_identity() {
        return Err(Error::InvalidPublicKey);
    }

    // V2: 1 ≤ r < q and 1 ≤ s < q
    let q = curve.q();
    let Signature { r, s } = signature;
    if r.is_zero() || r >= q || s.is_zero() || s >= q {
        return Err(Error::InvalidSignatureRange);
    }

    // V3: w = s⁻¹ mod q, u1 = z·w mod q, u2 = r·w mod q
    let z = rfc6979::bits2int(digest, q.bits());
    let Some(w) = field::invert(s, q) else {
        return Ok(false);
    };
    let u1 = field::mul(&z, &w, q);
    let u2 = field::mul(r, &w, q);

    // V4: (x1, y1) = u1·G + u2·Q
    let big_r = Point::lincomb(&curve.generator(), &u1, public_key, &u2)?;
    let Some(x1) = big_r.x() else {
        return Ok(false);
    };

    // V5: accept iff x1 mod q = r
    let v = x1 % q;
    let len = curve.scalar_bytes_len();
    match (
        field::to_be_bytes_padded(&v, len),
        field::to_be_bytes_padded(r, len),
    ) {
        (Some(v), Some(r)) => Ok(v.ct_eq(&r).into()),
        _ => Ok(false),
    }
}
