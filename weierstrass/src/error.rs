//! Error type.

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve and ECDSA errors.
///
/// Verification of a well-formed signature which simply does not match is
/// *not* an error: [`verify`](crate::ecdsa::verify) returns `Ok(false)` for
/// it. The variants below describe inputs on which an operation could not be
/// attempted at all.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Curve parameters are inconsistent (singular curve, generator off the
    /// curve, generator order mismatch, ...).
    InvalidCurveParameters,

    /// Operands belong to different curves.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Secret scalar is outside of `[1, q-1]`.
    InvalidPrivateKey,

    /// Public key is the identity or is not a point on the given curve.
    InvalidPublicKey,

    /// Signature `r` or `s` component is outside of `[1, q-1]`.
    InvalidSignatureRange,

    /// Signing produced `r = 0` or `s = 0`.
    DegenerateSignature,

    /// RFC 6979 candidate loop exceeded its iteration bound.
    NonceGenerationExhausted,

    /// Malformed DER, raw, textual or SEC1 input.
    Encoding,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidCurveParameters => "invalid curve parameters",
            Error::CurveMismatch => "curve mismatch",
            Error::NotOnCurve => "point is not on the curve",
            Error::InvalidPrivateKey => "invalid private key",
            Error::InvalidPublicKey => "invalid public key",
            Error::InvalidSignatureRange => "signature component out of range",
            Error::DegenerateSignature => "degenerate signature",
            Error::NonceGenerationExhausted => "nonce generation exhausted",
            Error::Encoding => "encoding error",
        })
    }
}

impl core::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::Encoding
    }
}

impl From<base16ct::Error> for Error {
    fn from(_: base16ct::Error) -> Error {
        Error::Encoding
    }
}

impl From<base64::DecodeError> for Error {
    fn from(_: base64::DecodeError) -> Error {
        Error::Encoding
    }
}
