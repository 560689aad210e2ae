//! Textual signature encodings: hex and base64 over either the DER or the
//! raw byte form.

use super::{Signature, der, raw};
use crate::Result;
use alloc::{string::String, vec::Vec};
use base64::{Engine, prelude::BASE64_STANDARD};

/// Underlying binary signature format.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    /// ASN.1 DER, see [`der`].
    Der,

    /// Fixed-width `r ‖ s`, see [`raw`].
    Raw {
        /// Width of each component in bytes.
        coord_len: usize,
    },
}

/// Text encoding applied to the binary form.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Text {
    /// Base16. Lower-case on output, either case on input.
    Hex,

    /// Base64 with the standard alphabet and padding (RFC 4648 § 4).
    Base64,
}

/// Serialize a signature to text.
pub fn encode(signature: &Signature, format: Format, text: Text) -> Result<String> {
    let bytes = match format {
        Format::Der => der::encode(signature)?,
        Format::Raw { coord_len } => raw::encode(signature, coord_len)?,
    };

    Ok(match text {
        Text::Hex => base16ct::lower::encode_string(&bytes),
        Text::Base64 => BASE64_STANDARD.encode(bytes),
    })
}

/// Parse a signature from text.
pub fn decode(input: &str, format: Format, text: Text) -> Result<Signature> {
    let bytes: Vec<u8> = match text {
        Text::Hex => base16ct::mixed::decode_vec(input)?,
        Text::Base64 => BASE64_STANDARD.decode(input)?,
    };

    match format {
        Format::Der => der::decode(&bytes),
        Format::Raw { coord_len } => raw::decode(&bytes, coord_len),
    }
}
