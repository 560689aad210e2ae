//! Points in homogeneous projective coordinates.
//!
//! `(X : Y : Z)` represents the affine point `(X/Z, Y/Z)`; the identity is
//! `(0 : 1 : 0)`. Intermediate results of scalar multiplication stay in this
//! form so that a single field inversion is needed per multiplication.

use crate::{Curve, field};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Point on a Weierstrass curve in projective coordinates.
///
/// Does not carry its curve: every operation takes it explicitly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    pub(crate) fn from_affine(x: &BigUint, y: &BigUint) -> Self {
        Self {
            x: x.clone(),
            y: y.clone(),
            z: BigUint::one(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns the affine coordinates of this point, or `None` if it is the
    /// identity.
    pub(crate) fn to_affine(&self, curve: &Curve) -> Option<(BigUint, BigUint)> {
        let p = curve.p();
        let zinv = field::invert(&self.z, p)?;
        Some((field::mul(&self.x, &zinv, p), field::mul(&self.y, &zinv, p)))
    }

    /// Returns `-self`.
    pub(crate) fn neg(&self, curve: &Curve) -> Self {
        Self {
            x: self.x.clone(),
            y: field::neg(&self.y, curve.p()),
            z: self.z.clone(),
        }
    }

    /// Returns `self + rhs`.
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// The formula is complete on curves of odd order. When the curve has
    /// points of order two and `self - rhs` is one of them, it degenerates to
    /// `(0 : 0 : 0)` and the sum is recomputed in affine coordinates.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub(crate) fn add(&self, rhs: &Self, curve: &Curve) -> Self {
        let p = curve.p();
        let a = curve.a();
        let mul = |x: &BigUint, y: &BigUint| field::mul(x, y, p);
        let add = |x: &BigUint, y: &BigUint| field::add(x, y, p);
        let sub = |x: &BigUint, y: &BigUint| field::sub(x, y, p);
        let b3 = mul(&BigUint::from(3u32), curve.b());

        let t0 = mul(&self.x, &rhs.x); // 1
        let t1 = mul(&self.y, &rhs.y); // 2
        let t2 = mul(&self.z, &rhs.z); // 3
        let t3 = add(&self.x, &self.y); // 4
        let t4 = add(&rhs.x, &rhs.y); // 5
        let t3 = mul(&t3, &t4); // 6
        let t4 = add(&t0, &t1); // 7
        let t3 = sub(&t3, &t4); // 8
        let t4 = add(&self.x, &self.z); // 9
        let t5 = add(&rhs.x, &rhs.z); // 10
        let t4 = mul(&t4, &t5); // 11
        let t5 = add(&t0, &t2); // 12
        let t4 = sub(&t4, &t5); // 13
        let t5 = add(&self.y, &self.z); // 14
        let x3 = add(&rhs.y, &rhs.z); // 15
        let t5 = mul(&t5, &x3); // 16
        let x3 = add(&t1, &t2); // 17
        let t5 = sub(&t5, &x3); // 18
        let z3 = mul(a, &t4); // 19
        let x3 = mul(&b3, &t2); // 20
        let z3 = add(&x3, &z3); // 21
        let x3 = sub(&t1, &z3); // 22
        let z3 = add(&t1, &z3); // 23
        let y3 = mul(&x3, &z3); // 24
        let t1 = add(&t0, &t0); // 25
        let t1 = add(&t1, &t0); // 26
        let t2 = mul(a, &t2); // 27
        let t4 = mul(&b3, &t4); // 28
        let t1 = add(&t1, &t2); // 29
        let t2 = sub(&t0, &t2); // 30
        let t2 = mul(a, &t2); // 31
        let t4 = add(&t4, &t2); // 32
        let t0 = mul(&t1, &t4); // 33
        let y3 = add(&y3, &t0); // 34
        let t0 = mul(&t5, &t4); // 35
        let x3 = mul(&t3, &x3); // 36
        let x3 = sub(&x3, &t0); // 37
        let t0 = mul(&t3, &t1); // 38
        let z3 = mul(&t5, &z3); // 39
        let z3 = add(&z3, &t0); // 40

        let sum = Self {
            x: x3,
            y: y3,
            z: z3,
        };

        if sum.is_degenerate() {
            self.add_exceptional(rhs, curve)
        } else {
            sum
        }
    }

    /// Returns `self + self`.
    ///
    /// Implements the exception-free point doubling formula from
    /// [Renes-Costello-Batina 2015] (Algorithm 3). The comments after each line
    /// indicate which algorithm steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub(crate) fn double(&self, curve: &Curve) -> Self {
        let p = curve.p();
        let a = curve.a();
        let mul = |x: &BigUint, y: &BigUint| field::mul(x, y, p);
        let add = |x: &BigUint, y: &BigUint| field::add(x, y, p);
        let sub = |x: &BigUint, y: &BigUint| field::sub(x, y, p);
        let b3 = mul(&BigUint::from(3u32), curve.b());

        let t0 = mul(&self.x, &self.x); // 1
        let t1 = mul(&self.y, &self.y); // 2
        let t2 = mul(&self.z, &self.z); // 3
        let t3 = mul(&self.x, &self.y); // 4
        let t3 = add(&t3, &t3); // 5
        let z3 = mul(&self.x, &self.z); // 6
        let z3 = add(&z3, &z3); // 7
        let x3 = mul(a, &z3); // 8
        let y3 = mul(&b3, &t2); // 9
        let y3 = add(&x3, &y3); // 10
        let x3 = sub(&t1, &y3); // 11
        let y3 = add(&t1, &y3); // 12
        let y3 = mul(&x3, &y3); // 13
        let x3 = mul(&t3, &x3); // 14
        let z3 = mul(&b3, &z3); // 15
        let t2 = mul(a, &t2); // 16
        let t3 = sub(&t0, &t2); // 17
        let t3 = mul(a, &t3); // 18
        let t3 = add(&t3, &z3); // 19
        let z3 = add(&t0, &t0); // 20
        let t0 = add(&z3, &t0); // 21
        let t0 = add(&t0, &t2); // 22
        let t0 = mul(&t0, &t3); // 23
        let y3 = add(&y3, &t0); // 24
        let t2 = mul(&self.y, &self.z); // 25
        let t2 = add(&t2, &t2); // 26
        let t0 = mul(&t2, &t3); // 27
        let x3 = sub(&x3, &t0); // 28
        let z3 = mul(&t2, &t1); // 29
        let z3 = add(&z3, &z3); // 30
        let z3 = add(&z3, &z3); // 31

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// Chord-and-tangent addition for the inputs on which the complete
    /// formula degenerates.
    fn add_exceptional(&self, rhs: &Self, curve: &Curve) -> Self {
        let p = curve.p();
        let Some((x1, y1)) = self.to_affine(curve) else {
            return rhs.clone();
        };
        let Some((x2, y2)) = rhs.to_affine(curve) else {
            return self.clone();
        };

        if x1 == x2 {
            return if field::add(&y1, &y2, p).is_zero() {
                Self::identity()
            } else {
                self.double(curve)
            };
        }

        let Some(dx) = field::invert(&field::sub(&x2, &x1, p), p) else {
            return Self::identity();
        };
        let lambda = field::mul(&field::sub(&y2, &y1, p), &dx, p);
        let x3 = field::sub(&field::sub(&field::square(&lambda, p), &x1, p), &x2, p);
        let y3 = field::sub(&field::mul(&lambda, &field::sub(&x1, &x3, p), p), &y1, p);
        Self::from_affine(&x3, &y3)
    }

    /// Montgomery ladder computing `k·self` over exactly `bits` iterations.
    ///
    /// Bits of `k` at position `bits` and above are ignored. The sequence of
    /// group operations does not depend on `k`, though the underlying
    /// big-integer arithmetic is not constant time.
    pub(crate) fn ladder(&self, k: &BigUint, bits: u64, curve: &Curve) -> Self {
        let mut r0 = Self::identity();
        let mut r1 = self.clone();

        for i in (0..bits).rev() {
            let bit = k.bit(i);

            // (r0, r1) <- bit ? (r0 + r1, 2·r1) : (2·r0, r0 + r1)
            conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0.add(&r1, curve);
            r0 = r0.double(curve);
            conditional_swap(&mut r0, &mut r1, bit);
        }

        r0
    }

    /// Computes `k·p + l·q` with Shamir's trick.
    ///
    /// Variable time: only use with public scalars.
    pub(crate) fn lincomb(
        p: &Self,
        k: &BigUint,
        q: &Self,
        l: &BigUint,
        curve: &Curve,
    ) -> Self {
        let pq = p.add(q, curve);
        let bits = k.bits().max(l.bits());
        let mut acc = Self::identity();

        for i in (0..bits).rev() {
            acc = acc.double(curve);
            match (k.bit(i), l.bit(i)) {
                (true, true) => acc = acc.add(&pq, curve),
                (true, false) => acc = acc.add(p, curve),
                (false, true) => acc = acc.add(q, curve),
                (false, false) => (),
            }
        }

        acc
    }
}

fn conditional_swap(a: &mut ProjectivePoint, b: &mut ProjectivePoint, swap: bool) {
    if swap {
        core::mem::swap(a, b);
    }
}
