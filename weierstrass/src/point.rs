//! Affine curve points and the group law.

pub(crate) mod projective;

use crate::{Curve, Error, Result, curve::same_curve, field};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use projective::ProjectivePoint;

/// Point on a short Weierstrass curve in affine coordinates, or the
/// identity (point at infinity).
///
/// A `Point` borrows the [`Curve`] it lies on. Every constructor checks
/// curve membership, so a `Point` is always either the identity or a
/// solution of its curve equation.
///
/// The group law is exposed through named methods. Operations mixing points
/// of different curves fail with [`Error::CurveMismatch`].
#[derive(Clone)]
pub struct Point<'c> {
    x: BigUint,
    y: BigUint,
    infinity: bool,
    curve: &'c Curve,
}

impl<'c> Point<'c> {
    /// Create a point from affine coordinates.
    ///
    /// Returns [`Error::NotOnCurve`] unless `x, y < p` and
    /// `y² = x³ + ax + b (mod p)`.
    pub fn new(x: BigUint, y: BigUint, curve: &'c Curve) -> Result<Self> {
        if !curve.is_on_curve(&x, &y) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self::from_trusted(x, y, curve))
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: &'c Curve) -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
            curve,
        }
    }

    /// Coordinates already known to satisfy the curve equation.
    pub(crate) fn from_trusted(x: BigUint, y: BigUint, curve: &'c Curve) -> Self {
        Self {
            x,
            y,
            infinity: false,
            curve,
        }
    }

    pub(crate) fn from_projective(point: &ProjectivePoint, curve: &'c Curve) -> Self {
        match point.to_affine(curve) {
            Some((x, y)) => Self::from_trusted(x, y, curve),
            None => Self::identity(curve),
        }
    }

    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        if self.infinity {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint::from_affine(&self.x, &self.y)
        }
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.x)
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.y)
    }

    /// Curve this point lies on.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    fn check_curve(&self, other: &Point<'_>) -> Result<()> {
        if same_curve(self.curve, other.curve) {
            Ok(())
        } else {
            Err(Error::CurveMismatch)
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Point<'_>) -> Result<Self> {
        self.check_curve(other)?;

        if self.infinity {
            return Ok(other.with_curve(self.curve));
        }
        if other.infinity {
            return Ok(self.clone());
        }

        if self.x == other.x {
            return Ok(if self.y == other.y {
                self.double()
            } else {
                Self::identity(self.curve)
            });
        }

        let sum = self.to_projective().add(&other.to_projective(), self.curve);
        Ok(Self::from_projective(&sum, self.curve))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Point<'_>) -> Result<Self> {
        self.add(&other.negate())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::identity(self.curve);
        }

        Self::from_projective(&self.to_projective().double(self.curve), self.curve)
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        if self.infinity {
            return self.clone();
        }

        Self::from_trusted(
            self.x.clone(),
            field::neg(&self.y, self.curve.p()),
            self.curve,
        )
    }

    /// Returns `k·self`.
    ///
    /// The scalar is reduced modulo the curve order `q` first, so `k ≡ 0`
    /// yields the identity. Runs a Montgomery ladder over `bits(q)`
    /// iterations regardless of the value of `k`.
    pub fn scalar_mul(&self, k: &BigUint) -> Self {
        let q = self.curve.q();
        let k = k % q;

        if self.infinity || k.is_zero() {
            return Self::identity(self.curve);
        }

        let product = self.to_projective().ladder(&k, q.bits(), self.curve);
        Self::from_projective(&product, self.curve)
    }

    /// Returns `k·p + l·q`.
    ///
    /// Both scalars are reduced modulo the curve order. Not constant time:
    /// intended for verification, where all inputs are public.
    pub fn lincomb(p: &Point<'c>, k: &BigUint, q: &Point<'_>, l: &BigUint) -> Result<Self> {
        p.check_curve(q)?;

        let curve = p.curve;
        let k = k % curve.q();
        let l = l % curve.q();
        let sum = ProjectivePoint::lincomb(&p.to_projective(), &k, &q.to_projective(), &l, curve);
        Ok(Self::from_projective(&sum, curve))
    }

    fn with_curve<'d>(&self, curve: &'d Curve) -> Point<'d> {
        Point {
            x: self.x.clone(),
            y: self.y.clone(),
            infinity: self.infinity,
            curve,
        }
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !same_curve(self.curve, other.curve) {
            return false;
        }

        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for Point<'_> {}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return write!(f, "Point::identity({})", self.curve.name());
        }

        f.debug_struct("Point")
            .field("curve", &self.curve.name())
            .field("x", &format_args!("{:x}", self.x))
            .field("y", &format_args!("{:x}", self.y))
            .finish()
    }
}
