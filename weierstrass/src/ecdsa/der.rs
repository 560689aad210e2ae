//! ASN.1 DER encoding for ECDSA signatures.
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```
//!
//! Integers are unsigned, minimal length and big endian, with a leading
//! `0x00` byte when the most significant bit would otherwise be set.
//! Decoding is strict: trailing data, truncated or inconsistent lengths, and
//! non-minimal or negative integers are rejected with [`Error::Encoding`].
//!
//! [`Error::Encoding`]: crate::Error::Encoding

use super::Signature;
use crate::Result;
use alloc::vec::Vec;
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer,
    asn1::UintRef,
};
use num_bigint::BigUint;

/// Serialize a signature as ASN.1 DER.
pub fn encode(signature: &Signature) -> Result<Vec<u8>> {
    let r = signature.r().to_bytes_be();
    let s = signature.s().to_bytes_be();

    let sig = SignatureRef {
        r: UintRef::new(&r)?,
        s: UintRef::new(&s)?,
    };

    Ok(sig.to_der()?)
}

/// Parse an ASN.1 DER encoded signature.
pub fn decode(bytes: &[u8]) -> Result<Signature> {
    let SignatureRef { r, s } = SignatureRef::from_der(bytes)?;

    Ok(Signature::new(
        BigUint::from_bytes_be(r.as_bytes()),
        BigUint::from_bytes_be(s.as_bytes()),
    ))
}

struct SignatureRef<'a> {
    pub r: UintRef<'a>,
    pub s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    type Error = der::Error;

    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}
