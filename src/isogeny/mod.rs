//! Isogenies of degree 2, 3 and 4 between Montgomery curves, and the engines that
//! compose them into the secret walks of SIDH.
//!
//! - [`TwoIsogeny`], [`FourIsogeny`], [`ThreeIsogeny`]: a single step on the Kummer line,
//!   given by its kernel point (formulas of the SIKE round 3 submission)
//! - [`IsogenyEngine`]: key generation (IsoGen) and shared secret (IsoEx) walks driven by
//!   the optimal strategies of the parameter set
//! - [`IsogenyAffine`] normalizes every intermediate result, [`IsogenyProjective`]
//!   stays in projective coordinates until the end. Both produce identical outputs.
mod affine;
mod projective;

pub use affine::IsogenyAffine;
pub use projective::IsogenyProjective;

use crate::curve::{recover_a, x_dbl, x_dbl_add, x_tpl, ProjectiveCurve, ProjectivePoint};
use crate::fields::{Fp2, FpElement, FpOpti, FpRef};
use crate::params::{SikeParam, STARTING_A};
use log::trace;
use std::fmt;
use subtle::Choice;

/// Affine engine over the arbitrary precision field
pub type ReferenceEngine = IsogenyAffine<FpRef>;
/// Projective engine over the Montgomery limb field
pub type OptimizedEngine = IsogenyProjective<FpOpti>;

/// Alice walks the 2-power torsion, Bob the 3-power torsion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    Alice,
    Bob,
}

impl Party {
    pub fn counterpart(self) -> Party {
        match self {
            Party::Alice => Party::Bob,
            Party::Bob => Party::Alice,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Alice => f.write_str("Alice"),
            Party::Bob => f.write_str("Bob"),
        }
    }
}

/// Isogeny of degree 2 whose kernel is a point of order 2 other than (0, 0).
/// The codomain is returned as (A24plus : C24).
pub struct TwoIsogeny<E: FpElement> {
    sum: Fp2<E>,
    diff: Fp2<E>,
    codomain: (Fp2<E>, Fp2<E>),
}

impl<E: FpElement> TwoIsogeny<E> {
    /// Cost: 2S, 3a
    pub fn new(kernel: &ProjectivePoint<E>) -> Self {
        let XX = kernel.X.square();
        let ZZ = kernel.Z.square();
        TwoIsogeny {
            sum: &kernel.X + &kernel.Z,
            diff: &kernel.X - &kernel.Z,
            codomain: (&ZZ - &XX, ZZ),
        }
    }

    pub fn codomain(&self) -> (Fp2<E>, Fp2<E>) {
        self.codomain.clone()
    }

    /// Cost: 4M, 6a
    pub fn evaluate(&self, P: &ProjectivePoint<E>) -> ProjectivePoint<E> {
        let t0 = &self.sum * &(&P.X - &P.Z);
        let t1 = &self.diff * &(&P.X + &P.Z);
        let X = &P.X * &(&t0 + &t1);
        let Z = &P.Z * &(&t0 - &t1);
        ProjectivePoint::new(X, Z)
    }
}

/// Isogeny of degree 4 whose kernel point (X : Z) does not lie above (0, 0),
/// so that X != +-Z. The codomain is returned as (A24plus : C24).
pub struct FourIsogeny<E: FpElement> {
    coeffs: [Fp2<E>; 3],
    codomain: (Fp2<E>, Fp2<E>),
}

impl<E: FpElement> FourIsogeny<E> {
    /// Cost: 4S, 5a
    pub fn new(kernel: &ProjectivePoint<E>) -> Self {
        let c1 = &kernel.X - &kernel.Z;
        let c2 = &kernel.X + &kernel.Z;
        let mut c0 = kernel.Z.square();
        c0 = &c0 + &c0;
        let C24 = c0.square();
        c0 = &c0 + &c0;
        let mut A24plus = kernel.X.square();
        A24plus = &A24plus + &A24plus;
        A24plus = A24plus.square();
        FourIsogeny {
            coeffs: [c0, c1, c2],
            codomain: (A24plus, C24),
        }
    }

    pub fn codomain(&self) -> (Fp2<E>, Fp2<E>) {
        self.codomain.clone()
    }

    /// Cost: 6M, 2S, 6a
    pub fn evaluate(&self, P: &ProjectivePoint<E>) -> ProjectivePoint<E> {
        let [c0, c1, c2] = &self.coeffs;
        let mut t0 = &P.X + &P.Z;
        let mut t1 = &P.X - &P.Z;
        let mut X = &t0 * c1;
        let mut Z = &t1 * c2;
        t0 = &t0 * &t1;
        t0 = c0 * &t0;
        t1 = (&X + &Z).square();
        Z = (&X - &Z).square();
        X = &t1 + &t0;
        t0 = &Z - &t0;
        ProjectivePoint::new(&X * &t1, &Z * &t0)
    }
}

/// Isogeny of degree 3 with the given kernel point of order 3.
/// The codomain is returned as (A24minus : A24plus).
pub struct ThreeIsogeny<E: FpElement> {
    coeffs: [Fp2<E>; 2],
    codomain: (Fp2<E>, Fp2<E>),
}

impl<E: FpElement> ThreeIsogeny<E> {
    /// Cost: 2M, 3S, 14a
    pub fn new(kernel: &ProjectivePoint<E>) -> Self {
        let c0 = &kernel.X - &kernel.Z;
        let t0 = c0.square();
        let c1 = &kernel.X + &kernel.Z;
        let t1 = c1.square();
        let mut t2 = &t0 + &t1;
        let mut t3 = (&c0 + &c1).square();
        t3 = &t3 - &t2;
        t2 = &t1 + &t3;
        t3 = &t3 + &t0;
        let mut t4 = &t0 + &t3;
        t4 = &t4 + &t4;
        t4 = &t1 + &t4;
        let A24minus = &t2 * &t4;
        t4 = &t1 + &t2;
        t4 = &t4 + &t4;
        t4 = &t0 + &t4;
        let A24plus = &t3 * &t4;
        ThreeIsogeny {
            coeffs: [c0, c1],
            codomain: (A24minus, A24plus),
        }
    }

    pub fn codomain(&self) -> (Fp2<E>, Fp2<E>) {
        self.codomain.clone()
    }

    /// Cost: 4M, 2S, 4a
    pub fn evaluate(&self, P: &ProjectivePoint<E>) -> ProjectivePoint<E> {
        let [c0, c1] = &self.coeffs;
        let t0 = c0 * &(&P.X + &P.Z);
        let t1 = c1 * &(&P.X - &P.Z);
        let t2 = (&t0 + &t1).square();
        let t0 = (&t1 - &t0).square();
        ProjectivePoint::new(&P.X * &t2, &P.Z * &t0)
    }
}

/// Bit `i` of a little-endian scalar, 0 past its end
fn key_bit(key: &[u8], i: usize) -> u8 {
    let byte = key.get(i / 8).copied().unwrap_or(0);
    (byte >> (i % 8)) & 1
}

/// The SIDH isogeny walks.
///
/// Implementors only decide how intermediate points and curve constants are represented
/// through `settle_point` and `settle_curve`. The walks themselves are shared.
pub trait IsogenyEngine {
    type Field: FpElement;

    fn new(param: &'static SikeParam) -> Self
    where
        Self: Sized;

    fn param(&self) -> &'static SikeParam;

    /// Brings a freshly computed point into the engine's working representation
    fn settle_point(&self, P: ProjectivePoint<Self::Field>) -> ProjectivePoint<Self::Field>;

    /// Brings a freshly computed pair of curve constants into the engine's working representation
    fn settle_curve(
        &self,
        curve: (Fp2<Self::Field>, Fp2<Self::Field>),
    ) -> (Fp2<Self::Field>, Fp2<Self::Field>);

    fn x_dbl_e(
        &self,
        P: &ProjectivePoint<Self::Field>,
        curve: &(Fp2<Self::Field>, Fp2<Self::Field>),
        e: usize,
    ) -> ProjectivePoint<Self::Field> {
        let mut Q = P.clone();
        for _ in 0..e {
            Q = self.settle_point(x_dbl(&Q, &curve.0, &curve.1));
        }
        Q
    }

    fn x_tpl_e(
        &self,
        P: &ProjectivePoint<Self::Field>,
        curve: &(Fp2<Self::Field>, Fp2<Self::Field>),
        e: usize,
    ) -> ProjectivePoint<Self::Field> {
        let mut Q = P.clone();
        for _ in 0..e {
            Q = self.settle_point(x_tpl(&Q, &curve.0, &curve.1));
        }
        Q
    }

    /// Computes x(P + [key]Q) from x(P), x(Q) and x(P - Q) on the curve with affine
    /// constant A. Scans exactly `nbits` bits of the little-endian `key` with constant time swaps.
    fn ladder_3pt(
        &self,
        xP: &Fp2<Self::Field>,
        xQ: &Fp2<Self::Field>,
        xPQ: &Fp2<Self::Field>,
        key: &[u8],
        nbits: usize,
        A: &Fp2<Self::Field>,
    ) -> ProjectivePoint<Self::Field> {
        let one = A.one_like();
        let two = &one + &one;
        let four = &two + &two;
        let a24 = &(A + &two) * &four.inverse();

        let mut R0 = ProjectivePoint::from_x(xQ);
        let mut R1 = ProjectivePoint::from_x(xP);
        let mut R2 = ProjectivePoint::from_x(xPQ);
        let mut prevbit = 0u8;
        for i in 0..nbits {
            let bit = key_bit(key, i);
            let swap = bit ^ prevbit;
            prevbit = bit;
            ProjectivePoint::conditional_swap(&mut R1, &mut R2, Choice::from(swap));
            let (D, S) = x_dbl_add(&R0, &R2, &R1, &a24);
            R0 = self.settle_point(D);
            R2 = self.settle_point(S);
        }
        ProjectivePoint::conditional_swap(&mut R1, &mut R2, Choice::from(prevbit));
        R1
    }

    /// Alice's public key: the images of Bob's basis under the isogeny with kernel
    /// PA + [key]QA
    fn iso_gen_2(&self, key: &[u8]) -> [Fp2<Self::Field>; 3] {
        let param = self.param();
        let A = Fp2::from_u64(param, STARTING_A);
        let [xP, xQ, xR] = param.basis(Party::Alice).map(|b| b.x(param));
        let R = self.ladder_3pt(&xP, &xQ, &xR, key, param.bits_a, &A);

        let mut phi = param
            .basis(Party::Bob)
            .map(|b| ProjectivePoint::from_x(&b.x(param)));
        let curve = self.settle_curve(ProjectiveCurve::starting(param).a24_plus_c24());
        let (R, curve) = odd_two_isogeny(self, R, curve, &mut phi);
        walk_four(self, R, curve, &mut phi);
        phi.map(|P| P.normalize())
    }

    /// Bob's public key: the images of Alice's basis under the isogeny with kernel
    /// PB + [key]QB
    fn iso_gen_3(&self, key: &[u8]) -> [Fp2<Self::Field>; 3] {
        let param = self.param();
        let A = Fp2::from_u64(param, STARTING_A);
        let [xP, xQ, xR] = param.basis(Party::Bob).map(|b| b.x(param));
        let R = self.ladder_3pt(&xP, &xQ, &xR, key, param.bits_b, &A);

        let mut phi = param
            .basis(Party::Alice)
            .map(|b| ProjectivePoint::from_x(&b.x(param)));
        let curve = self.settle_curve(ProjectiveCurve::starting(param).a24_minus_plus());
        walk_three(self, R, curve, &mut phi);
        phi.map(|P| P.normalize())
    }

    /// Alice's shared secret: j-invariant of the curve reached from Bob's public key
    fn iso_ex_2(&self, key: &[u8], public: &[Fp2<Self::Field>; 3]) -> Fp2<Self::Field> {
        let param = self.param();
        let [xP, xQ, xR] = public;
        let A = recover_a(xP, xQ, xR);
        let R = self.ladder_3pt(xP, xQ, xR, key, param.bits_a, &A);

        let curve = ProjectiveCurve::new(A.clone(), A.one_like());
        let curve = self.settle_curve(curve.a24_plus_c24());
        let (R, curve) = odd_two_isogeny(self, R, curve, &mut []);
        let (A24plus, C24) = walk_four(self, R, curve, &mut []);
        ProjectiveCurve::from_a24_plus_c24(&A24plus, &C24).j_invariant()
    }

    /// Bob's shared secret: j-invariant of the curve reached from Alice's public key
    fn iso_ex_3(&self, key: &[u8], public: &[Fp2<Self::Field>; 3]) -> Fp2<Self::Field> {
        let param = self.param();
        let [xP, xQ, xR] = public;
        let A = recover_a(xP, xQ, xR);
        let R = self.ladder_3pt(xP, xQ, xR, key, param.bits_b, &A);

        let curve = ProjectiveCurve::new(A.clone(), A.one_like());
        let curve = self.settle_curve(curve.a24_minus_plus());
        let (A24minus, A24plus) = walk_three(self, R, curve, &mut []);
        ProjectiveCurve::from_a24_minus_plus(&A24minus, &A24plus).j_invariant()
    }
}

type Curve<E> = (Fp2<E>, Fp2<E>);

/// For odd eA the walk of eA 2-isogenies starts with a single 2-isogeny and
/// continues with 4-isogenies.
fn odd_two_isogeny<I: IsogenyEngine + ?Sized>(
    engine: &I,
    R: ProjectivePoint<I::Field>,
    curve: Curve<I::Field>,
    phi: &mut [ProjectivePoint<I::Field>],
) -> (ProjectivePoint<I::Field>, Curve<I::Field>) {
    let e_a = engine.param().e_a as usize;
    if e_a % 2 == 0 {
        return (R, curve);
    }

    let S = engine.x_dbl_e(&R, &curve, e_a - 1);
    let iso = TwoIsogeny::new(&S);
    for P in phi.iter_mut() {
        *P = engine.settle_point(iso.evaluate(P));
    }
    (
        engine.settle_point(iso.evaluate(&R)),
        engine.settle_curve(iso.codomain()),
    )
}

/// Walks eA / 2 4-isogenies from the kernel generator R of order 4^(eA / 2), pushing
/// the points in `phi` through. Returns the codomain as (A24plus : C24).
fn walk_four<I: IsogenyEngine + ?Sized>(
    engine: &I,
    mut R: ProjectivePoint<I::Field>,
    mut curve: Curve<I::Field>,
    phi: &mut [ProjectivePoint<I::Field>],
) -> Curve<I::Field> {
    let param = engine.param();
    let rows = param.tree_rows_a;
    let strategy = param.strategy_a;
    trace!("{}: 4-isogeny walk over {} rows", param.name, rows);

    let mut points: Vec<(ProjectivePoint<I::Field>, usize)> =
        Vec::with_capacity(param.tree_points_a);
    let (mut index, mut ii) = (0, 0);
    for row in 1..rows {
        while index < rows - row {
            points.push((R.clone(), index));
            let m = strategy[ii];
            ii += 1;
            R = engine.x_dbl_e(&R, &curve, 2 * m);
            index += m;
        }

        let iso = FourIsogeny::new(&R);
        curve = engine.settle_curve(iso.codomain());
        for (P, _) in points.iter_mut() {
            *P = engine.settle_point(iso.evaluate(P));
        }
        for P in phi.iter_mut() {
            *P = engine.settle_point(iso.evaluate(P));
        }

        if let Some((P, i)) = points.pop() {
            (R, index) = (P, i);
        }
    }
    debug_assert!(points.is_empty() && ii == strategy.len());

    let iso = FourIsogeny::new(&R);
    for P in phi.iter_mut() {
        *P = engine.settle_point(iso.evaluate(P));
    }
    engine.settle_curve(iso.codomain())
}

/// Walks eB 3-isogenies from the kernel generator R of order 3^eB, pushing
/// the points in `phi` through. Returns the codomain as (A24minus : A24plus).
fn walk_three<I: IsogenyEngine + ?Sized>(
    engine: &I,
    mut R: ProjectivePoint<I::Field>,
    mut curve: Curve<I::Field>,
    phi: &mut [ProjectivePoint<I::Field>],
) -> Curve<I::Field> {
    let param = engine.param();
    let rows = param.tree_rows_b;
    let strategy = param.strategy_b;
    trace!("{}: 3-isogeny walk over {} rows", param.name, rows);

    let mut points: Vec<(ProjectivePoint<I::Field>, usize)> =
        Vec::with_capacity(param.tree_points_b);
    let (mut index, mut ii) = (0, 0);
    for row in 1..rows {
        while index < rows - row {
            points.push((R.clone(), index));
            let m = strategy[ii];
            ii += 1;
            R = engine.x_tpl_e(&R, &curve, m);
            index += m;
        }

        let iso = ThreeIsogeny::new(&R);
        curve = engine.settle_curve(iso.codomain());
        for (P, _) in points.iter_mut() {
            *P = engine.settle_point(iso.evaluate(P));
        }
        for P in phi.iter_mut() {
            *P = engine.settle_point(iso.evaluate(P));
        }

        if let Some((P, i)) = points.pop() {
            (R, index) = (P, i);
        }
    }
    debug_assert!(points.is_empty() && ii == strategy.len());

    let iso = ThreeIsogeny::new(&R);
    for P in phi.iter_mut() {
        *P = engine.settle_point(iso.evaluate(P));
    }
    engine.settle_curve(iso.codomain())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{x_dbl_e, x_tpl_e, AffinePoint, MontgomeryCurve};
    use crate::params::ParamSet;
    use num_bigint::BigUint;

    #[test]
    fn key_bits() {
        let key = [0x01, 0x80];
        assert_eq!(key_bit(&key, 0), 1);
        assert_eq!(key_bit(&key, 1), 0);
        assert_eq!(key_bit(&key, 15), 1);
        assert_eq!(key_bit(&key, 16), 0);
    }

    #[test]
    fn ladder_matches_group_law() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let engine = IsogenyProjective::<FpOpti>::new(param);
        let curve = MontgomeryCurve::<FpOpti>::starting(param);
        let [P, Q, _] = param.basis(Party::Bob).map(|b| b.affine::<FpOpti>(param));
        let [xP, xQ, xR] = param.basis(Party::Bob).map(|b| b.x::<FpOpti>(param));

        let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab];
        let m = BigUint::from_bytes_le(&key);
        let expected = curve.add(&P, &curve.mul(&Q, &m));
        let R = engine.ladder_3pt(&xP, &xQ, &xR, &key, 48, &curve.A);
        match expected {
            AffinePoint::Finite { x, .. } => assert_eq!(R.normalize(), x),
            AffinePoint::Infinity => panic!("P + [m]Q cannot vanish"),
        }
    }

    #[test]
    fn three_isogeny_kernel_vanishes() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let E0 = ProjectiveCurve::<FpOpti>::starting(param);
        let (A24minus, A24plus) = E0.a24_minus_plus();
        let P = ProjectivePoint::from_x(&param.pb.x::<FpOpti>(param));
        let K = x_tpl_e(&P, &A24minus, &A24plus, param.e_b as usize - 1);
        let iso = ThreeIsogeny::new(&K);
        assert!(iso.evaluate(&K).is_infinity());

        // The image of a point of order 3^eB has order 3^(eB - 1)
        let (A24minus, A24plus) = iso.codomain();
        let image = iso.evaluate(&P);
        let image = x_tpl_e(&image, &A24minus, &A24plus, param.e_b as usize - 2);
        assert!(!image.is_infinity());
        assert!(x_tpl_e(&image, &A24minus, &A24plus, 1).is_infinity());
    }

    #[test]
    fn four_isogeny_kernel_vanishes() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let (A24plus, C24) = ProjectiveCurve::<FpOpti>::starting(param).a24_plus_c24();
        let P = ProjectivePoint::from_x(&param.pa.x::<FpOpti>(param));
        let K = x_dbl_e(&P, &A24plus, &C24, param.e_a as usize - 2);
        let iso = FourIsogeny::new(&K);
        assert!(iso.evaluate(&K).is_infinity());

        let (A24plus, C24) = iso.codomain();
        let image = x_dbl_e(&iso.evaluate(&P), &A24plus, &C24, param.e_a as usize - 3);
        assert!(!image.is_infinity());
        assert!(x_dbl_e(&image, &A24plus, &C24, 1).is_infinity());
    }

    #[test]
    fn two_isogeny_kernel_vanishes() {
        let param = SikeParam::get(ParamSet::P610).unwrap();
        let (A24plus, C24) = ProjectiveCurve::<FpRef>::starting(param).a24_plus_c24();
        let P = ProjectivePoint::from_x(&param.pa.x::<FpRef>(param));
        let K = x_dbl_e(&P, &A24plus, &C24, param.e_a as usize - 1);
        let iso = TwoIsogeny::new(&K);
        assert!(iso.evaluate(&K).is_infinity());

        let (A24plus, C24) = iso.codomain();
        let image = x_dbl_e(&iso.evaluate(&P), &A24plus, &C24, param.e_a as usize - 2);
        assert!(!image.is_infinity());
        assert!(x_dbl_e(&image, &A24plus, &C24, 1).is_infinity());
    }
}
