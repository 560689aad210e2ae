//! Arithmetic modulo an odd prime.
//!
//! All inputs are reduced before use, so callers may pass unreduced values.
//! Results are always in `[0, m)`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns `a + b mod m`.
pub(crate) fn add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Returns `a - b mod m`.
pub(crate) fn sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b { a - b } else { m - (b - a) }
}

/// Returns `a * b mod m`.
pub(crate) fn mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Returns `a² mod m`.
pub(crate) fn square(a: &BigUint, m: &BigUint) -> BigUint {
    mul(a, a, m)
}

/// Returns `-a mod m`.
pub(crate) fn neg(a: &BigUint, m: &BigUint) -> BigUint {
    sub(&BigUint::zero(), a, m)
}

/// Returns `a⁻¹ mod m` for prime `m`, or `None` when `a ≡ 0`.
///
/// Computed as `a^(m-2)` by Fermat's little theorem.
pub(crate) fn invert(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return None;
    }
    let exp = m - 2u32;
    Some(a.modpow(&exp, m))
}

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    fn for_modulus(p: &BigUint) -> Self {
        if residue(p, 4) == 3 {
            Self::Shanks
        } else if residue(p, 8) == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

/// Returns a square root of `a mod p`, or `None` if `a` is a non-residue.
///
/// Adapted from <https://eprint.iacr.org/2012/685.pdf>.
pub(crate) fn sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(a);
    }

    let root = match Algorithm::for_modulus(p) {
        Algorithm::Shanks => {
            let exp = (p + 1u32) >> 2;
            a.modpow(&exp, p)
        }
        Algorithm::Atkin => {
            let exp = (p - 5u32) >> 3;
            let two = BigUint::from(2u32);
            let b = (&two * &a % p).modpow(&exp, p);
            let i = mul(&mul(&two, &a, p), &square(&b, p), p);
            mul(&mul(&a, &b, p), &sub(&i, &BigUint::one(), p), p)
        }
        Algorithm::TonelliShanks => tonelli_shanks(&a, p)?,
    };

    (square(&root, p) == a).then_some(root)
}

/// Tonelli-Shanks for `p ≡ 1 (mod 8)`.
fn tonelli_shanks(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    let p_minus_1 = p - 1u32;

    // p - 1 = q·2^s with q odd
    let s = p_minus_1.trailing_zeros()?;
    let q = &p_minus_1 >> s;

    // Euler's criterion
    if a.modpow(&(&p_minus_1 >> 1), p) != one {
        return None;
    }

    // a composite p may have no such z
    let mut z = BigUint::from(2u32);
    while z.modpow(&(&p_minus_1 >> 1), p) != p_minus_1 {
        z += 1u32;
        if &z >= p {
            return None;
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1), p);

    while t != one {
        // least i with t^(2^i) = 1
        let mut i = 0u64;
        let mut t2i = t.clone();
        while t2i != one {
            t2i = square(&t2i, p);
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = square(&b, p);
        }

        m = i;
        c = square(&b, p);
        t = mul(&t, &c, p);
        r = mul(&r, &b, p);
    }

    Some(r)
}

/// Miller-Rabin witnesses: the first twenty primes.
const WITNESSES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Miller-Rabin probable prime test with fixed bases.
///
/// Deterministic below 3.3·10²⁴ and a probable-prime test above that.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    for w in WITNESSES {
        if residue(n, w) == 0 {
            return *n == BigUint::from(w);
        }
    }
    if *n < BigUint::from(2u32) {
        return false;
    }

    let one = BigUint::one();
    let n_minus_1 = n - 1u32;
    let Some(s) = n_minus_1.trailing_zeros() else {
        return false;
    };
    let d = &n_minus_1 >> s;

    WITNESSES.iter().all(|&w| {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x == one || x == n_minus_1 {
            return true;
        }
        for _ in 1..s {
            x = square(&x, n);
            if x == n_minus_1 {
                return true;
            }
        }
        false
    })
}

/// Number of bytes needed to hold `bits` bits.
pub(crate) fn bytes_for_bits(bits: u64) -> usize {
    usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX)
}

fn residue(n: &BigUint, m: u32) -> u32 {
    (n % m).to_u32_digits().first().copied().unwrap_or(0)
}

/// Serialize `n` as exactly `len` big-endian bytes, or `None` if it is wider.
pub(crate) fn to_be_bytes_padded(n: &BigUint, len: usize) -> Option<alloc::vec::Vec<u8>> {
    let bytes = n.to_bytes_be();
    let bytes = if n.is_zero() { &[][..] } else { &bytes[..] };
    if bytes.len() > len {
        return None;
    }
    let mut out = alloc::vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(bytes);
    Some(out)
}
