//! ECDSA signing keys.

use super::{Signature, VerifyingKey, sign_prehashed_rfc6979};
use crate::{Curve, Error, Result, field};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use digest::{Digest, core_api::BlockSizeUser};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};

/// ECDSA secret key used for signing messages and producing signatures.
///
/// Holds the secret scalar `d ∈ [1, q-1]` together with its
/// [`VerifyingKey`] `Q = d·G`.
#[derive(Clone)]
pub struct SigningKey<'c> {
    /// Secret scalar.
    secret_scalar: BigUint,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey<'c>,
}

impl<'c> SigningKey<'c> {
    /// Create a signing key from a secret scalar.
    ///
    /// Returns [`Error::InvalidPrivateKey`] unless `1 ≤ d < q`.
    pub fn new(curve: &'c Curve, secret_scalar: BigUint) -> Result<Self> {
        if secret_scalar.is_zero() || &secret_scalar >= curve.q() {
            return Err(Error::InvalidPrivateKey);
        }

        let public_point = curve.generator().scalar_mul(&secret_scalar);
        let verifying_key = VerifyingKey::from_affine(public_point)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Parse signing key from a big endian-encoded byte slice containing a
    /// secret scalar value.
    ///
    /// The slice must be exactly [`Curve::scalar_bytes_len`] bytes long.
    pub fn from_slice(curve: &'c Curve, slice: &[u8]) -> Result<Self> {
        if slice.len() != curve.scalar_bytes_len() {
            return Err(Error::InvalidPrivateKey);
        }

        Self::new(curve, BigUint::from_bytes_be(slice))
    }

    /// Generate a random signing key.
    ///
    /// Samples `bits(q)`-bit candidates from `rng` until one lands in
    /// `[1, q-1]`.
    pub fn random(curve: &'c Curve, rng: &mut impl CryptoRngCore) -> Self {
        let q = curve.q();
        let mut bytes = alloc::vec![0u8; curve.scalar_bytes_len()];
        let excess_bits = 8 * bytes.len() as u64 - q.bits();

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xff >> excess_bits;

            if let Ok(signing_key) = Self::new(curve, BigUint::from_bytes_be(&bytes)) {
                return signing_key;
            }
        }
    }

    /// Serialize the secret scalar as [`Curve::scalar_bytes_len`] big endian
    /// bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        field::to_be_bytes_padded(&self.secret_scalar, self.curve().scalar_bytes_len())
            .expect("secret scalar is reduced modulo q")
    }

    /// Borrow the secret scalar value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'c> {
        &self.verifying_key
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.verifying_key.curve()
    }

    /// Sign `msg`, hashing it with `D`.
    pub fn sign<D>(&self, msg: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        self.sign_prehashed::<D>(&D::digest(msg))
    }

    /// Sign the raw output bytes of a message digest computed with `D`.
    pub fn sign_prehashed<D>(&self, prehash: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        sign_prehashed_rfc6979::<D>(prehash, &self.secret_scalar, self.curve(), &[])
    }

    /// Sign `msg`, mixing fresh randomness from `rng` into the RFC 6979
    /// nonce as additional data (RFC 6979 § 3.6).
    ///
    /// The result verifies like any other signature but is no longer
    /// reproducible.
    pub fn sign_with_rng<D>(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        let mut data = alloc::vec![0u8; self.curve().scalar_bytes_len()];
        rng.fill_bytes(&mut data);
        sign_prehashed_rfc6979::<D>(&D::digest(msg), &self.secret_scalar, self.curve(), &data)
    }
}

impl<'c> AsRef<VerifyingKey<'c>> for SigningKey<'c> {
    fn as_ref(&self) -> &VerifyingKey<'c> {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_curve = Choice::from(u8::from(self.curve() == other.curve()));
        same_curve & self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl Eq for SigningKey<'_> {}
impl PartialEq for SigningKey<'_> {
    fn eq(&self, other: &SigningKey<'_>) -> bool {
        self.ct_eq(other).into()
    }
}
