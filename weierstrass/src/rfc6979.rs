//! Deterministic nonce generation as described in [RFC 6979 § 3.2].
//!
//! The nonce `k` is derived from the secret scalar and the message digest with
//! an HMAC-DRBG, so signing needs no external randomness and the same
//! `(x, h, H)` always yields the same `k`.
//!
//! [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3

use crate::{Error, Result, field};
use alloc::vec::Vec;
use core::marker::PhantomData;
use digest::{Digest, core_api::BlockSizeUser};
use hmac::{Mac, SimpleHmac};
use num_bigint::BigUint;
use num_traits::Zero;

/// Upper bound on the number of candidates tried by [`generate_k`].
///
/// Each candidate is rejected with probability below `2⁻³²` for every
/// named curve, so hitting this bound means something is badly wrong.
pub const MAX_ITERATIONS: usize = 64;

/// Deterministically generate an ephemeral scalar `k` in `[1, q-1]`.
///
/// Accepts the following parameters and inputs:
///
/// - `x`: secret key, `1 ≤ x < q`
/// - `q`: group order
/// - `h`: message digest computed with `D`
/// - `data`: additional associated data, e.g. CSRNG output used as added
///   entropy (RFC 6979 § 3.6); pass `&[]` for the plain algorithm
///
/// Fails with [`Error::InvalidPrivateKey`] if `x ∉ [1, q-1]` and with
/// [`Error::NonceGenerationExhausted`] if no candidate is accepted within
/// [`MAX_ITERATIONS`].
pub fn generate_k<D>(x: &BigUint, q: &BigUint, h: &[u8], data: &[u8]) -> Result<BigUint>
where
    D: Digest + BlockSizeUser,
{
    if x.is_zero() || x >= q {
        return Err(Error::InvalidPrivateKey);
    }

    let qlen = q.bits();
    let rlen = field::bytes_for_bits(qlen);
    let x = int2octets(x, rlen)?;
    let h = bits2octets(h, q)?;

    let mut hmac_drbg = HmacDrbg::<D>::new(&x, &h, data);
    let mut t = alloc::vec![0u8; rlen];

    for _ in 0..MAX_ITERATIONS {
        hmac_drbg.fill_bytes(&mut t);
        let k = bits2int(&t, qlen);

        if !k.is_zero() && &k < q {
            return Ok(k);
        }
    }

    Err(Error::NonceGenerationExhausted)
}

/// Internal implementation of `HMAC_DRBG` as described in NIST SP800-90A.
///
/// <https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final>
///
/// This is a HMAC-based deterministic random bit generator used compute a
/// deterministic ephemeral scalar `k`.
pub struct HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// HMAC key `K` (see RFC 6979 Section 3.2.c)
    k: Vec<u8>,

    /// Chaining value `V` (see RFC 6979 Section 3.2.c)
    v: Vec<u8>,

    digest: PhantomData<D>,
}

impl<D> HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// Initialize `HMAC_DRBG`.
    pub fn new(entropy_input: &[u8], nonce: &[u8], personalization_string: &[u8]) -> Self {
        let hlen = <D as Digest>::output_size();
        let mut k = alloc::vec![0x00; hlen];
        let mut v = alloc::vec![0x01; hlen];

        for i in 0..=1 {
            // Steps 3.2.d,f: K = HMAC_K(V || i || entropy || nonce || pers)
            let mut mac = hmac::<D>(&k);
            mac.update(&v);
            mac.update(&[i]);
            mac.update(entropy_input);
            mac.update(nonce);
            mac.update(personalization_string);
            k = mac.finalize().into_bytes().to_vec();

            // Steps 3.2.e,g: V = HMAC_K(V)
            let mut mac = hmac::<D>(&k);
            mac.update(&v);
            v = mac.finalize().into_bytes().to_vec();
        }

        Self {
            k,
            v,
            digest: PhantomData,
        }
    }

    /// Write the next `HMAC_DRBG` output to the given byte slice.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for out_chunk in out.chunks_mut(self.v.len()) {
            self.v = self.hmac_v(&[]);
            out_chunk.copy_from_slice(&self.v[..out_chunk.len()]);
        }

        // Step 3.2.h.3: K = HMAC_K(V || 0x00), V = HMAC_K(V)
        self.k = self.hmac_v(&[0x00]);
        self.v = self.hmac_v(&[]);
    }

    /// `HMAC_K(V || suffix)`
    fn hmac_v(&self, suffix: &[u8]) -> Vec<u8> {
        let mut mac = hmac::<D>(&self.k);
        mac.update(&self.v);
        mac.update(suffix);
        mac.finalize().into_bytes().to_vec()
    }
}

fn hmac<D>(key: &[u8]) -> SimpleHmac<D>
where
    D: Digest + BlockSizeUser,
{
    <SimpleHmac<D> as Mac>::new_from_slice(key).expect("HMAC error")
}

/// Convert the leftmost `qlen` bits of `bytes` to an integer
/// (RFC 6979 § 2.3.2).
pub fn bits2int(bytes: &[u8], qlen: u64) -> BigUint {
    let x = BigUint::from_bytes_be(bytes);
    let blen = 8 * bytes.len() as u64;

    if blen > qlen { x >> (blen - qlen) } else { x }
}

/// `rlen`-byte big-endian encoding of `x < q` (RFC 6979 § 2.3.3).
fn int2octets(x: &BigUint, rlen: usize) -> Result<Vec<u8>> {
    field::to_be_bytes_padded(x, rlen).ok_or(Error::InvalidPrivateKey)
}

/// `int2octets(bits2int(bytes) mod q)` (RFC 6979 § 2.3.4).
fn bits2octets(bytes: &[u8], q: &BigUint) -> Result<Vec<u8>> {
    let z = bits2int(bytes, q.bits()) % q;
    int2octets(&z, field::bytes_for_bits(q.bits()))
}
