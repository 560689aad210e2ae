//! SEC1 elliptic curve point encoding.
//!
//! Implements the `Elliptic-Curve-Point-to-Octet-String` conversion of
//! [SEC 1: Elliptic Curve Cryptography] §2.3.3 and its inverse:
//!
//! - identity: `0x00`
//! - compressed: `0x02 | 0x03 ‖ X`, the tag carrying the parity of `y`
//! - uncompressed: `0x04 ‖ X ‖ Y`
//!
//! Coordinates are big-endian, each [`Curve::field_bytes_len`] bytes wide.
//!
//! [SEC 1: Elliptic Curve Cryptography]: https://www.secg.org/sec1-v2.pdf

use crate::{Curve, Error, Point, Result, field};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Tag byte of a SEC1 encoded point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Tag {
    Identity = 0x00,
    CompressedEvenY = 0x02,
    CompressedOddY = 0x03,
    Uncompressed = 0x04,
}

impl Tag {
    fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0x00 => Ok(Tag::Identity),
            0x02 => Ok(Tag::CompressedEvenY),
            0x03 => Ok(Tag::CompressedOddY),
            0x04 => Ok(Tag::Uncompressed),
            _ => Err(Error::Encoding),
        }
    }

    fn compress_y(y_is_odd: bool) -> Self {
        if y_is_odd {
            Tag::CompressedOddY
        } else {
            Tag::CompressedEvenY
        }
    }

    /// Length of the whole encoding for a field of `field_len` bytes.
    fn message_len(self, field_len: usize) -> usize {
        match self {
            Tag::Identity => 1,
            Tag::CompressedEvenY | Tag::CompressedOddY => 1 + field_len,
            Tag::Uncompressed => 1 + 2 * field_len,
        }
    }
}

/// Serialize a point, optionally in compressed form.
pub fn encode_point(point: &Point<'_>, compress: bool) -> Vec<u8> {
    let (Some(x), Some(y)) = (point.x(), point.y()) else {
        return alloc::vec![Tag::Identity as u8];
    };

    let field_len = point.curve().field_bytes_len();
    let tag = if compress {
        Tag::compress_y(y.bit(0))
    } else {
        Tag::Uncompressed
    };

    let mut bytes = Vec::with_capacity(tag.message_len(field_len));
    bytes.push(tag as u8);
    bytes.extend_from_slice(&coordinate_bytes(x, field_len));
    if tag == Tag::Uncompressed {
        bytes.extend_from_slice(&coordinate_bytes(y, field_len));
    }
    bytes
}

fn coordinate_bytes(n: &BigUint, field_len: usize) -> Vec<u8> {
    field::to_be_bytes_padded(n, field_len).expect("coordinate is reduced modulo p")
}

/// Parse a SEC1 encoded point on the given curve.
///
/// Returns [`Error::Encoding`] for a bad tag, a length that does not match
/// the tag, or a coordinate `≥ p`, and [`Error::NotOnCurve`] when the
/// coordinates are well-formed but do not describe a curve point (including
/// a compressed `x` with no matching `y`).
pub fn decode_point<'c>(bytes: &[u8], curve: &'c Curve) -> Result<Point<'c>> {
    let (&first, rest) = bytes.split_first().ok_or(Error::Encoding)?;
    let tag = Tag::from_u8(first)?;
    let field_len = curve.field_bytes_len();

    if bytes.len() != tag.message_len(field_len) {
        return Err(Error::Encoding);
    }

    let (x_bytes, y_bytes) = rest.split_at(rest.len().min(field_len));
    let x = BigUint::from_bytes_be(x_bytes);
    if tag != Tag::Identity && &x >= curve.p() {
        return Err(Error::Encoding);
    }

    match tag {
        Tag::Identity => Ok(Point::identity(curve)),
        Tag::Uncompressed => {
            let y = BigUint::from_bytes_be(y_bytes);
            if &y >= curve.p() {
                return Err(Error::Encoding);
            }
            Point::new(x, y, curve)
        }
        Tag::CompressedEvenY | Tag::CompressedOddY => {
            let y = field::sqrt(&curve.rhs(&x), curve.p()).ok_or(Error::NotOnCurve)?;
            let y = if y.bit(0) == (tag == Tag::CompressedOddY) {
                y
            } else {
                field::neg(&y, curve.p())
            };

            // y = 0 has no odd representative
            if y.bit(0) != (tag == Tag::CompressedOddY) {
                return Err(Error::NotOnCurve);
            }
            Point::new(x, y, curve)
        }
    }
}
