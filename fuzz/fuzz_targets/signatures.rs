#![no_main]
// Decoders must never panic, and whatever they accept must re-encode to the
// same bytes.
use libfuzzer_sys::fuzz_target;
use weierstrass::ecdsa::{
    der, raw,
    text::{self, Format, Text},
};

fuzz_target!(|data: &[u8]| {
    if let Ok(sig) = der::decode(data) {
        assert_eq!(der::encode(&sig).unwrap(), data);
    }

    if let Some((&width, rest)) = data.split_first() {
        let coord_len = usize::from(width & 0x7f);
        if let Ok(sig) = raw::decode(rest, coord_len) {
            assert_eq!(raw::encode(&sig, coord_len).unwrap(), rest);
        }
    }

    if let Ok(input) = core::str::from_utf8(data) {
        for format in [Format::Der, Format::Raw { coord_len: 32 }] {
            let _ = text::decode(input, format, Text::Hex);
            let _ = text::decode(input, format, Text::Base64);
        }
    }
});
