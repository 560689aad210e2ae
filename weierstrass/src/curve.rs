//! Short Weierstrass curves `y² = x³ + ax + b` over a prime field.

mod params;

use crate::{
    Error, Result, field,
    point::{Point, projective::ProjectivePoint},
};
use alloc::{boxed::Box, string::String};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::race::OnceBox;
use params::CurveParams;

/// Elliptic curve in short Weierstrass form together with a base point of
/// prime order.
///
/// A `Curve` is immutable once constructed. Points and keys borrow it, so a
/// single instance is shared by every operation performed on that curve.
///
/// Two curves are equal when their domain parameters `(p, a, b, q, G)` are
/// equal. The name is a label and takes no part in the comparison.
#[derive(Clone)]
pub struct Curve {
    name: String,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    q: BigUint,
    gx: BigUint,
    gy: BigUint,
}

impl Curve {
    /// Create a new curve from its domain parameters.
    ///
    /// Returns [`Error::InvalidCurveParameters`] unless all of the following
    /// hold:
    ///
    /// - `p > 3` and `p` is a probable prime
    /// - `a < p` and `b < p`
    /// - `4a³ + 27b² ≠ 0 (mod p)`
    /// - `q` is a probable prime
    /// - `(gx, gy)` is a point on the curve and `q·G` is the identity
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        q: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Result<Self> {
        let curve = Self {
            name: name.into(),
            p,
            a,
            b,
            q,
            gx,
            gy,
        };

        if curve.p <= BigUint::from(3u32) || !field::is_probable_prime(&curve.p) {
            return Err(Error::InvalidCurveParameters);
        }

        if curve.a >= curve.p || curve.b >= curve.p || !field::is_probable_prime(&curve.q) {
            return Err(Error::InvalidCurveParameters);
        }

        if curve.discriminant().is_zero() {
            return Err(Error::InvalidCurveParameters);
        }

        if !curve.is_on_curve(&curve.gx, &curve.gy) {
            return Err(Error::InvalidCurveParameters);
        }

        // q·G must vanish. The scalar is not reduced here since reducing by
        // `q` would trivially give the identity.
        let g = ProjectivePoint::from_affine(&curve.gx, &curve.gy);
        if !g.ladder(&curve.q, curve.q.bits(), &curve).is_identity() {
            return Err(Error::InvalidCurveParameters);
        }

        Ok(curve)
    }

    fn from_params(params: &CurveParams) -> Result<Self> {
        let hex = |s: &str| {
            BigUint::parse_bytes(s.as_bytes(), 16).ok_or(Error::InvalidCurveParameters)
        };

        Self::new(
            params.name,
            hex(params.p)?,
            hex(params.a)?,
            hex(params.b)?,
            hex(params.q)?,
            hex(params.gx)?,
            hex(params.gy)?,
        )
    }

    /// `4a³ + 27b² mod p`
    fn discriminant(&self) -> BigUint {
        let p = &self.p;
        let a3 = field::mul(&field::square(&self.a, p), &self.a, p);
        let b2 = field::square(&self.b, p);
        field::add(
            &field::mul(&BigUint::from(4u32), &a3, p),
            &field::mul(&BigUint::from(27u32), &b2, p),
            p,
        )
    }

    /// Name of this curve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order `q` of the base point.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Base point `G`.
    pub fn generator(&self) -> Point<'_> {
        Point::from_trusted(self.gx.clone(), self.gy.clone(), self)
    }

    /// Size of a serialized field element: `⌈bits(p) / 8⌉`.
    pub fn field_bytes_len(&self) -> usize {
        field::bytes_for_bits(self.p.bits())
    }

    /// Size of a serialized scalar: `⌈bits(q) / 8⌉`.
    pub fn scalar_bytes_len(&self) -> usize {
        field::bytes_for_bits(self.q.bits())
    }

    /// Coordinate byte length, the larger of [`Curve::field_bytes_len`] and
    /// [`Curve::scalar_bytes_len`].
    ///
    /// This is the width of each half of a raw `r ‖ s` signature.
    pub fn byte_len(&self) -> usize {
        self.field_bytes_len().max(self.scalar_bytes_len())
    }

    /// Is the given point a point of this curve?
    pub fn contains(&self, point: &Point<'_>) -> bool {
        same_curve(self, point.curve())
    }

    /// Is `(x, y)` a solution of the curve equation with both coordinates
    /// in `[0, p)`?
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.p || y >= &self.p {
            return false;
        }

        field::square(y, &self.p) == self.rhs(x)
    }

    /// `x³ + ax + b mod p`
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x3 = field::mul(&field::square(x, p), x, p);
        let ax = field::mul(&self.a, x, p);
        field::add(&field::add(&x3, &ax, p), &self.b, p)
    }

    /// `a + b mod p`
    pub fn add_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        field::add(a, b, &self.p)
    }

    /// `a - b mod p`
    pub fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        field::sub(a, b, &self.p)
    }

    /// `a · b mod p`
    pub fn mul_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        field::mul(a, b, &self.p)
    }

    /// `a⁻¹ mod p`, computed as `a^(p-2)`.
    ///
    /// # Panics
    ///
    /// If `a ≡ 0 (mod p)`. Inverting zero is a bug in the caller.
    pub fn invert_mod(&self, a: &BigUint) -> BigUint {
        field::invert(a, &self.p).expect("attempted to invert zero")
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
            && self.a == other.a
            && self.b == other.b
            && self.q == other.q
            && self.gx == other.gx
            && self.gy == other.gy
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("p", &format_args!("{:x}", self.p))
            .field("q", &format_args!("{:x}", self.q))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Are `a` and `b` the same curve?
pub(crate) fn same_curve(a: &Curve, b: &Curve) -> bool {
    core::ptr::eq(a, b) || a == b
}

macro_rules! named_curve {
    ($fn_name:ident, $params:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $fn_name() -> &'static Curve {
            static CURVE: OnceBox<Curve> = OnceBox::new();
            CURVE.get_or_init(|| {
                Box::new(
                    Curve::from_params(&params::$params)
                        .expect(concat!(stringify!($params), " parameters are valid")),
                )
            })
        }
    };
}

named_curve!(p192, P192, "NIST P-192 (`secp192r1`).");
named_curve!(p224, P224, "NIST P-224 (`secp224r1`).");
named_curve!(p256, P256, "NIST P-256 (`secp256r1`, `prime256v1`).");
named_curve!(p384, P384, "NIST P-384 (`secp384r1`).");
named_curve!(p521, P521, "NIST P-521 (`secp521r1`).");
named_curve!(secp256k1, SECP256K1, "SECG `secp256k1`, the Koblitz curve used by Bitcoin.");
named_curve!(brainpool_p224r1, BRAINPOOL_P224R1, "Brainpool `brainpoolP224r1` (RFC 5639).");
named_curve!(brainpool_p256r1, BRAINPOOL_P256R1, "Brainpool `brainpoolP256r1` (RFC 5639).");
named_curve!(brainpool_p320r1, BRAINPOOL_P320R1, "Brainpool `brainpoolP320r1` (RFC 5639).");
named_curve!(brainpool_p384r1, BRAINPOOL_P384R1, "Brainpool `brainpoolP384r1` (RFC 5639).");
named_curve!(brainpool_p512r1, BRAINPOOL_P512R1, "Brainpool `brainpoolP512r1` (RFC 5639).");

/// Look up a named curve.
///
/// Matching is ASCII case-insensitive and accepts the NIST, SECG and
/// RFC 5639 spellings, e.g. `"P256"`, `"P-256"`, `"secp256r1"`.
pub fn by_name(name: &str) -> Option<&'static Curve> {
    let lookup: [(&[&str], fn() -> &'static Curve); 11] = [
        (&["P192", "P-192", "secp192r1", "prime192v1"], p192),
        (&["P224", "P-224", "secp224r1"], p224),
        (&["P256", "P-256", "secp256r1", "prime256v1"], p256),
        (&["P384", "P-384", "secp384r1"], p384),
        (&["P521", "P-521", "secp521r1"], p521),
        (&["secp256k1"], secp256k1),
        (&["brainpoolP224r1"], brainpool_p224r1),
        (&["brainpoolP256r1"], brainpool_p256r1),
        (&["brainpoolP320r1"], brainpool_p320r1),
        (&["brainpoolP384r1"], brainpool_p384r1),
        (&["brainpoolP512r1"], brainpool_p512r1),
    ];

    lookup
        .iter()
        .find(|(names, _)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
        .map(|(_, curve)| curve())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_lengths() {
        assert_eq!(p192().byte_len(), 24);
        assert_eq!(p256().field_bytes_len(), 32);
        assert_eq!(p521().field_bytes_len(), 66);
        assert_eq!(p521().scalar_bytes_len(), 66);
        assert_eq!(brainpool_p384r1().byte_len(), 48);
        assert_eq!(brainpool_p320r1().byte_len(), 40);
        assert_eq!(brainpool_p512r1().field_bytes_len(), 64);
    }

    #[test]
    fn named_curves_are_cached() {
        assert!(core::ptr::eq(p256(), p256()));
        assert!(core::ptr::eq(by_name("prime256v1").unwrap(), p256()));
    }

    #[test]
    fn equality_ignores_name() {
        let renamed = Curve {
            name: "prime256v1".into(),
            ..p256().clone()
        };
        assert_eq!(&renamed, p256());
        assert!(same_curve(&renamed, p256()));
        assert_ne!(p256(), brainpool_p256r1());
    }

    #[test]
    fn discriminant_of_singular_curve() {
        // y² = x³ over F_7 is singular
        let p = BigUint::from(7u32);
        let zero = BigUint::zero();
        let c = Curve {
            name: "singular".into(),
            p,
            a: zero.clone(),
            b: zero.clone(),
            q: BigUint::from(2u32),
            gx: zero.clone(),
            gy: zero,
        };
        assert!(c.discriminant().is_zero());
    }
}
