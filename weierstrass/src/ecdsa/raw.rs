//! Fixed-width `r ‖ s` signature encoding.
//!
//! Each component is big endian and left-padded with zeros to `coord_len`
//! bytes, usually [`Curve::byte_len`](crate::Curve::byte_len). This is the
//! format of e.g. JWS, COSE and PKCS#11 ECDSA signatures.

use super::Signature;
use crate::{Error, Result, field};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Serialize a signature as `r ‖ s`, each `coord_len` bytes wide.
///
/// Fails with [`Error::Encoding`] if `coord_len` is zero or either component
/// does not fit in `coord_len` bytes.
pub fn encode(signature: &Signature, coord_len: usize) -> Result<Vec<u8>> {
    if coord_len == 0 {
        return Err(Error::Encoding);
    }

    let r = field::to_be_bytes_padded(signature.r(), coord_len).ok_or(Error::Encoding)?;
    let s = field::to_be_bytes_padded(signature.s(), coord_len).ok_or(Error::Encoding)?;

    let mut bytes = r;
    bytes.extend_from_slice(&s);
    Ok(bytes)
}

/// Parse an `r ‖ s` signature.
///
/// Fails with [`Error::Encoding`] unless `bytes` is exactly `2 · coord_len`
/// bytes long.
pub fn decode(bytes: &[u8], coord_len: usize) -> Result<Signature> {
    if coord_len == 0 || Some(bytes.len()) != coord_len.checked_mul(2) {
        return Err(Error::Encoding);
    }

    let (r_bytes, s_bytes) = bytes.split_at(coord_len);
    Ok(Signature::new(
        BigUint::from_bytes_be(r_bytes),
        BigUint::from_bytes_be(s_bytes),
    ))
}
