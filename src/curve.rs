//! Montgomery curves By^2 = x^3 + Ax^2 + x over Fp2.
//!
//! - [`MontgomeryCurve`] and [`AffinePoint`]: the full affine group law, used to check
//!   base points and x-only results
//! - [`ProjectivePoint`] and [`ProjectiveCurve`]: the x-only (X : Z) arithmetic the
//!   isogeny walks run on, with curve constants kept as projective pairs
//!
//! The x-only formulas follow the SIKE round 3 reference and work on whichever
//! constant pair they need: (A + 2C : 4C) for doubling, (A - 2C : A + 2C) for tripling.
use crate::fields::{Fp2, FpElement};
use crate::params::{SikeParam, STARTING_A};
use num_bigint::BigUint;
use subtle::Choice;

#[derive(Clone, Debug)]
pub enum AffinePoint<E: FpElement> {
    Infinity,
    Finite { x: Fp2<E>, y: Fp2<E> },
}

impl<E: FpElement> AffinePoint<E> {
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }
}

impl<E: FpElement> PartialEq for AffinePoint<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AffinePoint::Infinity, AffinePoint::Infinity) => true,
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }
}

/// Curve in affine form, By^2 = x^3 + Ax^2 + x
#[derive(Clone, Debug)]
pub struct MontgomeryCurve<E: FpElement> {
    pub A: Fp2<E>,
    pub B: Fp2<E>,
}

impl<E: FpElement> MontgomeryCurve<E> {
    pub fn new(A: Fp2<E>, B: Fp2<E>) -> Self {
        MontgomeryCurve { A, B }
    }

    /// The starting curve E0: y^2 = x^3 + 6x^2 + x
    pub fn starting(param: &'static SikeParam) -> Self {
        MontgomeryCurve::new(Fp2::from_u64(param, STARTING_A), Fp2::one(param))
    }

    pub fn is_on_curve(&self, P: &AffinePoint<E>) -> bool {
        match P {
            AffinePoint::Infinity => true,
            AffinePoint::Finite { x, y } => {
                let one = x.one_like();
                let lhs = &self.B * &y.square();
                let rhs = &(&(&x.square() + &(&self.A * x)) + &one) * x;
                lhs == rhs
            }
        }
    }

    pub fn negate(&self, P: &AffinePoint<E>) -> AffinePoint<E> {
        match P {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Finite { x, y } => AffinePoint::Finite {
                x: x.clone(),
                y: -y,
            },
        }
    }

    /// Chord through two points with slope `lambda`
    fn chord(&self, lambda: &Fp2<E>, x1: &Fp2<E>, x2: &Fp2<E>, y1: &Fp2<E>) -> AffinePoint<E> {
        let x3 = &(&(&(&self.B * &lambda.square()) - &self.A) - x1) - x2;
        let y3 = &(lambda * &(x1 - &x3)) - y1;
        AffinePoint::Finite { x: x3, y: y3 }
    }

    pub fn double(&self, P: &AffinePoint<E>) -> AffinePoint<E> {
        match P {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Finite { x, y } => {
                if bool::from(y.is_zero()) {
                    return AffinePoint::Infinity;
                }
                let one = x.one_like();
                let two = &one + &one;
                let three = &two + &one;
                // (3x^2 + 2Ax + 1) / 2By
                let num = &(&(&three * &x.square()) + &(&(&two * &self.A) * x)) + &one;
                let den = &(&two * &self.B) * y;
                let lambda = &num * &den.inverse();
                self.chord(&lambda, x, x, y)
            }
        }
    }

    pub fn add(&self, P: &AffinePoint<E>, Q: &AffinePoint<E>) -> AffinePoint<E> {
        match (P, Q) {
            (AffinePoint::Infinity, _) => Q.clone(),
            (_, AffinePoint::Infinity) => P.clone(),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if bool::from((y1 + y2).is_zero()) {
                        return AffinePoint::Infinity;
                    }
                    return self.double(P);
                }
                let lambda = &(y2 - y1) * &(x2 - x1).inverse();
                self.chord(&lambda, x1, x2, y1)
            }
        }
    }

    /// Double-and-add from the least significant bit. Variable time, public scalars only.
    pub fn mul(&self, P: &AffinePoint<E>, n: &BigUint) -> AffinePoint<E> {
        let mut result = AffinePoint::Infinity;
        let mut base = P.clone();
        for i in 0..n.bits() {
            if n.bit(i) {
                result = self.add(&result, &base);
            }
            base = self.double(&base);
        }
        result
    }

    pub fn j_invariant(&self) -> Fp2<E> {
        ProjectiveCurve::new(self.A.clone(), self.A.one_like()).j_invariant()
    }
}

/// Curve constant A given as the projective pair (A : C)
#[derive(Clone, Debug)]
pub struct ProjectiveCurve<E: FpElement> {
    pub A: Fp2<E>,
    pub C: Fp2<E>,
}

impl<E: FpElement> ProjectiveCurve<E> {
    pub fn new(A: Fp2<E>, C: Fp2<E>) -> Self {
        ProjectiveCurve { A, C }
    }

    pub fn starting(param: &'static SikeParam) -> Self {
        ProjectiveCurve::new(Fp2::from_u64(param, STARTING_A), Fp2::one(param))
    }

    /// (A + 2C, 4C), the constants used by doubling
    pub fn a24_plus_c24(&self) -> (Fp2<E>, Fp2<E>) {
        let C2 = &self.C + &self.C;
        let A24plus = &self.A + &C2;
        let C24 = &C2 + &C2;
        (A24plus, C24)
    }

    /// (A - 2C, A + 2C), the constants used by tripling
    pub fn a24_minus_plus(&self) -> (Fp2<E>, Fp2<E>) {
        let C2 = &self.C + &self.C;
        (&self.A - &C2, &self.A + &C2)
    }

    pub fn from_a24_plus_c24(A24plus: &Fp2<E>, C24: &Fp2<E>) -> Self {
        let t = &(A24plus + A24plus) - C24;
        ProjectiveCurve::new(&t + &t, C24.clone())
    }

    pub fn from_a24_minus_plus(A24minus: &Fp2<E>, A24plus: &Fp2<E>) -> Self {
        let t = A24plus + A24minus;
        ProjectiveCurve::new(&t + &t, A24plus - A24minus)
    }

    /// A / C
    pub fn normalize(&self) -> Fp2<E> {
        &self.A * &self.C.inverse()
    }

    /// j = 256 (A^2 - 3C^2)^3 / (C^4 (A^2 - 4C^2))
    /// Cost: 3M, 4S, 1I
    pub fn j_invariant(&self) -> Fp2<E> {
        let mut j = self.A.square();
        let mut t1 = self.C.square();
        let mut t0 = &t1 + &t1;
        t0 = &j - &t0;
        t0 = &t0 - &t1;
        j = &t0 - &t1;
        t1 = t1.square();
        j = &j * &t1;
        t0 = &t0 + &t0;
        t0 = &t0 + &t0;
        t1 = t0.square();
        t0 = &t0 * &t1;
        t0 = &t0 + &t0;
        t0 = &t0 + &t0;
        j = j.inverse();
        &j * &t0
    }
}

/// Point on the Kummer line, x = X / Z
#[derive(Clone, Debug)]
pub struct ProjectivePoint<E: FpElement> {
    pub X: Fp2<E>,
    pub Z: Fp2<E>,
}

impl<E: FpElement> ProjectivePoint<E> {
    pub fn new(X: Fp2<E>, Z: Fp2<E>) -> Self {
        ProjectivePoint { X, Z }
    }

    pub fn from_x(x: &Fp2<E>) -> Self {
        ProjectivePoint::new(x.clone(), x.one_like())
    }

    pub fn is_infinity(&self) -> bool {
        bool::from(self.Z.is_zero())
    }

    /// Affine x-coordinate X / Z
    pub fn normalize(&self) -> Fp2<E> {
        &self.X * &self.Z.inverse()
    }

    /// The same point with Z = 1. The point at infinity comes back as (1 : 0).
    pub fn normalized(&self) -> Self {
        let at_infinity = self.Z.is_zero();
        let one = self.X.one_like();
        ProjectivePoint::new(
            Fp2::conditional_select(&self.normalize(), &one, at_infinity),
            Fp2::conditional_select(&one, &self.Z, at_infinity),
        )
    }

    /// Swaps `P` and `Q` in constant time when `choice` is set
    pub fn conditional_swap(P: &mut Self, Q: &mut Self, choice: Choice) {
        let (PX, QX) = (
            Fp2::conditional_select(&P.X, &Q.X, choice),
            Fp2::conditional_select(&Q.X, &P.X, choice),
        );
        let (PZ, QZ) = (
            Fp2::conditional_select(&P.Z, &Q.Z, choice),
            Fp2::conditional_select(&Q.Z, &P.Z, choice),
        );
        (P.X, P.Z, Q.X, Q.Z) = (PX, PZ, QX, QZ);
    }

    /// Projective equality X1 Z2 = X2 Z1
    pub fn equals(&self, other: &Self) -> bool {
        &self.X * &other.Z == &other.X * &self.Z
    }
}

/// Doubling [2]P on the curve given by (A24plus : C24) = (A + 2C : 4C)
/// Cost: 4M, 2S, 4a
pub fn x_dbl<E: FpElement>(
    P: &ProjectivePoint<E>,
    A24plus: &Fp2<E>,
    C24: &Fp2<E>,
) -> ProjectivePoint<E> {
    let mut t0 = &P.X - &P.Z;
    let mut t1 = &P.X + &P.Z;
    t0 = t0.square();
    t1 = t1.square();
    let mut Z = C24 * &t0;
    let X = &t1 * &Z;
    t1 = &t1 - &t0;
    t0 = A24plus * &t1;
    Z = &Z + &t0;
    Z = &Z * &t1;
    ProjectivePoint::new(X, Z)
}

/// [2^e]P by repeated doubling
pub fn x_dbl_e<E: FpElement>(
    P: &ProjectivePoint<E>,
    A24plus: &Fp2<E>,
    C24: &Fp2<E>,
    e: usize,
) -> ProjectivePoint<E> {
    let mut Q = P.clone();
    for _ in 0..e {
        Q = x_dbl(&Q, A24plus, C24);
    }
    Q
}

/// Tripling [3]P on the curve given by (A24minus : A24plus) = (A - 2C : A + 2C)
/// Cost: 7M, 5S, 9a
pub fn x_tpl<E: FpElement>(
    P: &ProjectivePoint<E>,
    A24minus: &Fp2<E>,
    A24plus: &Fp2<E>,
) -> ProjectivePoint<E> {
    let mut t0 = &P.X - &P.Z;
    let mut t2 = t0.square();
    let mut t1 = &P.X + &P.Z;
    let mut t3 = t1.square();
    let t4 = &t1 + &t0;
    t0 = &t1 - &t0;
    t1 = t4.square();
    t1 = &t1 - &t3;
    t1 = &t1 - &t2;
    let t5 = &t3 * A24plus;
    t3 = &t5 * &t3;
    let t6 = A24minus * &t2;
    t2 = &t2 * &t6;
    t3 = &t2 - &t3;
    t2 = &t5 - &t6;
    t1 = &t2 * &t1;
    t2 = (&t3 + &t1).square();
    let X = &t4 * &t2;
    t1 = (&t3 - &t1).square();
    let Z = &t0 * &t1;
    ProjectivePoint::new(X, Z)
}

/// [3^e]P by repeated tripling
pub fn x_tpl_e<E: FpElement>(
    P: &ProjectivePoint<E>,
    A24minus: &Fp2<E>,
    A24plus: &Fp2<E>,
    e: usize,
) -> ProjectivePoint<E> {
    let mut Q = P.clone();
    for _ in 0..e {
        Q = x_tpl(&Q, A24minus, A24plus);
    }
    Q
}

/// Differential addition: P + Q from P, Q and PQ = P - Q
/// Cost: 4M, 2S, 6a
pub fn x_add<E: FpElement>(
    P: &ProjectivePoint<E>,
    Q: &ProjectivePoint<E>,
    PQ: &ProjectivePoint<E>,
) -> ProjectivePoint<E> {
    let t0 = &(&P.X + &P.Z) * &(&Q.X - &Q.Z);
    let t1 = &(&P.X - &P.Z) * &(&Q.X + &Q.Z);
    let X = &PQ.Z * &(&t0 + &t1).square();
    let Z = &PQ.X * &(&t0 - &t1).square();
    ProjectivePoint::new(X, Z)
}

/// Combined ladder step returning ([2]P, P + Q) given PQ = P - Q and a24 = (A + 2) / 4
/// Cost: 7M, 4S, 8a
pub fn x_dbl_add<E: FpElement>(
    P: &ProjectivePoint<E>,
    Q: &ProjectivePoint<E>,
    PQ: &ProjectivePoint<E>,
    a24: &Fp2<E>,
) -> (ProjectivePoint<E>, ProjectivePoint<E>) {
    let mut t0 = &P.X + &P.Z;
    let mut t1 = &P.X - &P.Z;
    let mut X2 = t0.square();
    let mut t2 = &Q.X - &Q.Z;
    let XQ = &Q.X + &Q.Z;
    t0 = &t0 * &t2;
    let mut Z2 = t1.square();
    t1 = &t1 * &XQ;
    t2 = &X2 - &Z2;
    X2 = &X2 * &Z2;
    let mut XQ = a24 * &t2;
    let mut ZQ = &t0 - &t1;
    Z2 = &XQ + &Z2;
    XQ = &t0 + &t1;
    Z2 = &Z2 * &t2;
    ZQ = ZQ.square();
    XQ = XQ.square();
    ZQ = &ZQ * &PQ.X;
    XQ = &XQ * &PQ.Z;
    (ProjectivePoint::new(X2, Z2), ProjectivePoint::new(XQ, ZQ))
}

/// Recovers the affine A of the curve from x(P), x(Q) and x(P - Q)
/// Cost: 4M, 1S, 1I
pub fn recover_a<E: FpElement>(xP: &Fp2<E>, xQ: &Fp2<E>, xR: &Fp2<E>) -> Fp2<E> {
    let one = xP.one_like();
    let mut t1 = xP + xQ;
    let mut t0 = xP * xQ;
    let mut A = xR * &t1;
    A = &t0 + &A;
    t0 = &t0 * xR;
    A = &A - &one;
    t0 = &t0 + &t0;
    t1 = &t1 + xR;
    t0 = &t0 + &t0;
    A = A.square();
    t0 = t0.inverse();
    A = &A * &t0;
    &A - &t1
}
