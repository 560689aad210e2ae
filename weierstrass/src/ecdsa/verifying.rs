//! ECDSA verifying keys.

use super::{Signature, verify_prehashed};
use crate::{Curve, Error, Point, Result, sec1};
use alloc::boxed::Box;
use digest::Digest;

/// ECDSA public key used for verifying signatures are valid for a given
/// message.
///
/// Wraps a curve [`Point`] which is guaranteed not to be the identity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'c> {
    point: Point<'c>,
}

impl<'c> VerifyingKey<'c> {
    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::InvalidPublicKey`] if the given affine point is the
    /// additive identity (a.k.a. point at infinity).
    pub fn from_affine(point: Point<'c>) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { point })
    }

    /// Initialize [`VerifyingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(curve: &'c Curve, bytes: &[u8]) -> Result<Self> {
        Self::from_affine(sec1::decode_point(bytes, curve)?)
    }

    /// Convert this [`VerifyingKey`] into the
    /// `Elliptic-Curve-Point-to-Octet-String` encoding described in
    /// SEC 1: Elliptic Curve Cryptography (Version 2.0) section 2.3.3
    /// (page 10).
    ///
    /// <http://www.secg.org/sec1-v2.pdf>
    pub fn to_sec1_bytes(&self, compress: bool) -> Box<[u8]> {
        sec1::encode_point(&self.point, compress).into_boxed_slice()
    }

    /// Borrow the inner [`Point`] for this public key.
    pub fn as_affine(&self) -> &Point<'c> {
        &self.point
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.point.curve()
    }

    /// Verify `signature` over `msg`, hashing it with `D`.
    ///
    /// Returns `Ok(false)` if the signature is well-formed but does not
    /// match, and [`Error::InvalidSignatureRange`] if `r` or `s` is outside of
    /// `[1, q-1]`.
    pub fn verify<D>(&self, msg: &[u8], signature: &Signature) -> Result<bool>
    where
        D: Digest,
    {
        self.verify_prehashed(&D::digest(msg), signature)
    }

    /// Verify `signature` over the raw output bytes of a message digest.
    pub fn verify_prehashed(&self, prehash: &[u8], signature: &Signature) -> Result<bool> {
        verify_prehashed(signature, prehash, &self.point, self.curve())
    }
}

impl<'c> From<VerifyingKey<'c>> for Point<'c> {
    fn from(verifying_key: VerifyingKey<'c>) -> Point<'c> {
        verifying_key.point
    }
}

impl<'c> TryFrom<Point<'c>> for VerifyingKey<'c> {
    type Error = Error;

    fn try_from(point: Point<'c>) -> Result<Self> {
        Self::from_affine(point)
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{Error, Point, curve};

    #[test]
    fn rejects_identity() {
        let curve = curve::p384();
        assert_eq!(
            VerifyingKey::from_affine(Point::identity(curve)).unwrap_err(),
            Error::InvalidPublicKey
        );
        assert_eq!(
            VerifyingKey::from_sec1_bytes(curve, &[0x00]).unwrap_err(),
            Error::InvalidPublicKey
        );
    }

    #[test]
    fn sec1_round_trip() {
        let curve = curve::brainpool_p256r1();
        let key = VerifyingKey::from_affine(curve.generator().double()).unwrap();
        for compress in [false, true] {
            let bytes = key.to_sec1_bytes(compress);
            assert_eq!(VerifyingKey::from_sec1_bytes(curve, &bytes).unwrap(), key);
        }
    }
}
