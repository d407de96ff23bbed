//! Finite field arithmetic for Fp and its quadratic extension Fp2 = Fp[i] with i^2 = -1.
//!
//! The prime field comes in two flavours implementing [`FpElement`]:
//! - [`reference::FpRef`]: residues held as arbitrary precision integers
//! - [`optimized::FpOpti`]: fixed width limbs in Montgomery form
//!
//! [`Fp2`] is written once over the [`FpElement`] contract and is shared by both.
pub mod optimized;
pub mod reference;

use crate::error::{Result, SikeError};
use crate::params::SikeParam;
use num_bigint::BigUint;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConstantTimeEq};

pub use optimized::FpOpti;
pub use reference::FpRef;

pub type Fp2Ref = Fp2<FpRef>;
pub type Fp2Opti = Fp2<FpOpti>;

/// Element of the prime field Fp. Every value is kept reduced into [0, p).
pub trait FpElement: Clone + Debug + Sized {
    fn zero(param: &'static SikeParam) -> Self;
    fn one(param: &'static SikeParam) -> Self;
    fn from_u64(param: &'static SikeParam, v: u64) -> Self;
    /// Reduces `v` modulo p
    fn from_biguint(param: &'static SikeParam, v: &BigUint) -> Self;
    fn to_biguint(&self) -> BigUint;

    fn zero_like(&self) -> Self;
    fn one_like(&self) -> Self;
    fn modulus(&self) -> &'static BigUint;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn square(&self) -> Self;

    /// Computes self^((p - 3) / 4)
    fn pow_p34(&self) -> Self;

    /// Multiplicative inverse, with 0 mapped to 0
    fn inverse(&self) -> Self {
        // self^(p - 2) = (self^((p - 3) / 4))^4 * self
        let t = self.pow_p34().square().square();
        t.mul(self)
    }

    /// Square-and-multiply scanning the exponent from its least significant bit.
    /// The exponent is public.
    fn pow(&self, e: &BigUint) -> Self {
        let mut result = self.one_like();
        let mut base = self.clone();
        for i in 0..e.bits() {
            if e.bit(i) {
                result = result.mul(&base);
            }
            base = base.square();
        }
        result
    }

    fn is_zero(&self) -> Choice;
    fn ct_eq(&self, rhs: &Self) -> Choice;
    /// Returns `a` when `choice` is 0 and `b` when it is 1
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self;

    /// Fixed width little-endian encoding, the octet order of the SIKE reference
    fn encode(&self) -> Vec<u8>;
    fn decode(param: &'static SikeParam, bytes: &[u8]) -> Result<Self>;
}

/// Element x0 + i * x1 of Fp2
#[derive(Clone, Copy, Debug)]
pub struct Fp2<E: FpElement> {
    pub x0: E,
    pub x1: E,
}

impl<E: FpElement> Fp2<E> {
    pub fn new(x0: E, x1: E) -> Self {
        Fp2 { x0, x1 }
    }

    pub fn zero(param: &'static SikeParam) -> Self {
        Fp2::new(E::zero(param), E::zero(param))
    }

    pub fn one(param: &'static SikeParam) -> Self {
        Fp2::new(E::one(param), E::zero(param))
    }

    pub fn from_u64(param: &'static SikeParam, v: u64) -> Self {
        Fp2::new(E::from_u64(param, v), E::zero(param))
    }

    pub fn from_biguint(param: &'static SikeParam, x0: &BigUint, x1: &BigUint) -> Self {
        Fp2::new(E::from_biguint(param, x0), E::from_biguint(param, x1))
    }

    pub fn zero_like(&self) -> Self {
        Fp2::new(self.x0.zero_like(), self.x0.zero_like())
    }

    pub fn one_like(&self) -> Self {
        Fp2::new(self.x0.one_like(), self.x0.zero_like())
    }

    /// Multiplication by i
    pub fn mul_i(&self) -> Self {
        Fp2::new(self.x1.neg(), self.x0.clone())
    }

    /// Cost: 2M, 3a
    pub fn square(&self) -> Self {
        let t0 = self.x0.add(&self.x1);
        let t1 = self.x0.sub(&self.x1);
        let t2 = self.x0.add(&self.x0);
        Fp2::new(t0.mul(&t1), t2.mul(&self.x1))
    }

    /// Norm x0^2 + x1^2 down to Fp
    pub fn norm(&self) -> E {
        self.x0.square().add(&self.x1.square())
    }

    /// Inverse through the norm, 0 is mapped to 0
    pub fn inverse(&self) -> Self {
        let n = self.norm().inverse();
        Fp2::new(self.x0.mul(&n), self.x1.mul(&n).neg())
    }

    pub fn pow(&self, e: &BigUint) -> Self {
        let mut result = self.one_like();
        let mut base = self.clone();
        for i in 0..e.bits() {
            if e.bit(i) {
                result = &result * &base;
            }
            base = base.square();
        }
        result
    }

    /// An element of Fp2 is a square exactly when its norm is a square in Fp
    pub fn is_quadratic_residue(&self) -> bool {
        let p = self.x0.modulus();
        let chi = self.norm().pow(&((p - 1u32) >> 1));
        bool::from(chi.is_zero() | chi.ct_eq(&chi.one_like()))
    }

    /// Square root for p = 3 mod 4 (Adj and Rodriguez-Henriquez, Algorithm 9).
    /// Fails with `InvalidOperation` when the element is not a square.
    pub fn sqrt(&self) -> Result<Self> {
        let p = self.x0.modulus();
        let one = self.one_like();

        let a1 = self.pow(&((p - 3u32) >> 2));
        let x0 = &a1 * self;
        let alpha = &a1 * &x0;

        // Both candidates are always computed, alpha = -1 only picks one
        let via_i = x0.mul_i();
        let via_b = (&one + &alpha).pow(&((p - 1u32) >> 1)) * &x0;
        let root = Fp2::conditional_select(&via_b, &via_i, alpha.ct_eq(&-&one));

        if root.square().equals(self) == 0 {
            return Err(SikeError::InvalidOperation(
                "square root of a quadratic non-residue",
            ));
        }
        Ok(root)
    }

    pub fn is_zero(&self) -> Choice {
        self.x0.is_zero() & self.x1.is_zero()
    }

    /// Returns 0xFFFFFFFF when equal and 0 otherwise, in constant time
    pub fn equals(&self, rhs: &Self) -> u32 {
        let eq = self.x0.ct_eq(&rhs.x0) & self.x1.ct_eq(&rhs.x1);
        (eq.unwrap_u8() as u32).wrapping_neg()
    }

    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2::new(
            E::conditional_select(&a.x0, &b.x0, choice),
            E::conditional_select(&a.x1, &b.x1, choice),
        )
    }

    /// Encoded as x0 || x1
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.x0.encode();
        out.extend_from_slice(&self.x1.encode());
        out
    }

    pub fn decode(param: &'static SikeParam, bytes: &[u8]) -> Result<Self> {
        let n = param.fp_bytes;
        if bytes.len() != 2 * n {
            return Err(SikeError::InvalidLength {
                what: "Fp2 element",
                expected: 2 * n,
                actual: bytes.len(),
            });
        }
        Ok(Fp2::new(
            E::decode(param, &bytes[..n])?,
            E::decode(param, &bytes[n..])?,
        ))
    }
}

impl<E: FpElement> ConstantTimeEq for Fp2<E> {
    fn ct_eq(&self, rhs: &Self) -> Choice {
        self.x0.ct_eq(&rhs.x0) & self.x1.ct_eq(&rhs.x1)
    }
}

impl<E: FpElement> PartialEq for Fp2<E> {
    fn eq(&self, rhs: &Self) -> bool {
        self.equals(rhs) != 0
    }
}

impl<E: FpElement> Eq for Fp2<E> {}

impl<'a, 'b, E: FpElement> Add<&'b Fp2<E>> for &'a Fp2<E> {
    type Output = Fp2<E>;

    fn add(self, rhs: &'b Fp2<E>) -> Fp2<E> {
        Fp2::new(self.x0.add(&rhs.x0), self.x1.add(&rhs.x1))
    }
}

impl<'a, 'b, E: FpElement> Sub<&'b Fp2<E>> for &'a Fp2<E> {
    type Output = Fp2<E>;

    fn sub(self, rhs: &'b Fp2<E>) -> Fp2<E> {
        Fp2::new(self.x0.sub(&rhs.x0), self.x1.sub(&rhs.x1))
    }
}

/// Karatsuba style product
/// Cost: 3M, 5a
impl<'a, 'b, E: FpElement> Mul<&'b Fp2<E>> for &'a Fp2<E> {
    type Output = Fp2<E>;

    fn mul(self, rhs: &'b Fp2<E>) -> Fp2<E> {
        let t0 = self.x0.mul(&rhs.x0);
        let t1 = self.x1.mul(&rhs.x1);
        let t2 = self.x0.add(&self.x1).mul(&rhs.x0.add(&rhs.x1));
        Fp2::new(t0.sub(&t1), t2.sub(&t0).sub(&t1))
    }
}

impl<'a, E: FpElement> Neg for &'a Fp2<E> {
    type Output = Fp2<E>;

    fn neg(self) -> Fp2<E> {
        Fp2::new(self.x0.neg(), self.x1.neg())
    }
}

impl<E: FpElement> Neg for Fp2<E> {
    type Output = Fp2<E>;

    fn neg(self) -> Fp2<E> {
        -&self
    }
}

// Owned operands forward to the borrowed implementations
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl<E: FpElement> $imp<Fp2<E>> for Fp2<E> {
            type Output = Fp2<E>;

            #[inline]
            fn $method(self, rhs: Fp2<E>) -> Fp2<E> {
                <&Fp2<E> as $imp<&Fp2<E>>>::$method(&self, &rhs)
            }
        }

        impl<'b, E: FpElement> $imp<&'b Fp2<E>> for Fp2<E> {
            type Output = Fp2<E>;

            #[inline]
            fn $method(self, rhs: &'b Fp2<E>) -> Fp2<E> {
                <&Fp2<E> as $imp<&Fp2<E>>>::$method(&self, rhs)
            }
        }

        impl<'a, E: FpElement> $imp<Fp2<E>> for &'a Fp2<E> {
            type Output = Fp2<E>;

            #[inline]
            fn $method(self, rhs: Fp2<E>) -> Fp2<E> {
                <&Fp2<E> as $imp<&Fp2<E>>>::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ParamSet, SikeParam};
    use num_bigint::RandBigInt;
    use rand::thread_rng;

    fn random_fp2<E: FpElement>(param: &'static SikeParam) -> Fp2<E> {
        let mut rng = thread_rng();
        let x0 = rng.gen_biguint_below(&param.prime);
        let x1 = rng.gen_biguint_below(&param.prime);
        Fp2::from_biguint(param, &x0, &x1)
    }

    fn field_axioms<E: FpElement>(param: &'static SikeParam) {
        let one = Fp2::<E>::one(param);
        for _ in 0..20 {
            let a = random_fp2::<E>(param);
            let b = random_fp2::<E>(param);
            let c = random_fp2::<E>(param);

            assert_eq!(&(&a + &b) * &c, &(&a * &c) + &(&b * &c));
            assert_eq!(a.square(), &a * &a);
            assert_eq!(&a - &a, Fp2::zero(param));
            assert_eq!(&a * &a.inverse(), one);
            assert_eq!(a.mul_i().mul_i(), -&a);
        }
        assert_eq!(Fp2::<E>::zero(param).inverse(), Fp2::zero(param));
    }

    #[test]
    fn fp2_field_axioms() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        field_axioms::<FpRef>(param);
        field_axioms::<FpOpti>(param);
    }

    #[test]
    fn fp2_sqrt() {
        for set in [ParamSet::P434, ParamSet::P610] {
            let param = SikeParam::get(set).unwrap();
            for _ in 0..10 {
                let a = random_fp2::<FpOpti>(param);
                let q = a.square();
                assert!(q.is_quadratic_residue());
                let r = q.sqrt().unwrap();
                assert_eq!(r.square(), q);
            }
        }
    }

    #[test]
    fn fp2_sqrt_covers_both_candidates() {
        let param = SikeParam::get(ParamSet::P503).unwrap();
        let mut rng = thread_rng();
        for _ in 0..5 {
            let c = rng.gen_biguint_below(&param.prime);
            let c = Fp2::<FpOpti>::from_biguint(param, &c, &BigUint::from(0u32));
            // -c^2 has alpha = -1 and its roots are +-ic, c^2 takes the other candidate
            for q in [-&c.square(), c.square()] {
                let r = q.sqrt().unwrap();
                assert_eq!(r.square(), q);
            }
        }
        let minus_one = -&Fp2::<FpRef>::one(param);
        let i = minus_one.sqrt().unwrap();
        assert_eq!(i.square(), minus_one);
        assert!(bool::from(i.x0.is_zero()));
    }

    #[test]
    fn fp2_sqrt_of_non_residue_fails() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let mut found = 0;
        while found < 5 {
            let a = random_fp2::<FpRef>(param);
            if a.is_quadratic_residue() {
                continue;
            }
            assert_eq!(
                a.sqrt(),
                Err(SikeError::InvalidOperation(
                    "square root of a quadratic non-residue"
                ))
            );
            found += 1;
        }
    }

    #[test]
    fn fp2_encoding() {
        let param = SikeParam::get(ParamSet::P503).unwrap();
        let a = random_fp2::<FpOpti>(param);
        let bytes = a.encode();
        assert_eq!(bytes.len(), 2 * param.fp_bytes);
        assert_eq!(Fp2::<FpOpti>::decode(param, &bytes).unwrap(), a);

        // Both backends share the byte layout
        let b = Fp2::<FpRef>::decode(param, &bytes).unwrap();
        assert_eq!(b.encode(), bytes);

        assert!(Fp2::<FpOpti>::decode(param, &bytes[1..]).is_err());

        // Least significant octet first, x0 before x1
        let small = Fp2::<FpOpti>::new(FpOpti::from_u64(param, 0x0102), FpOpti::from_u64(param, 3));
        let bytes = small.encode();
        let n = param.fp_bytes;
        assert_eq!(&bytes[..3], &[0x02, 0x01, 0x00]);
        assert_eq!(bytes[n], 3);
        assert!(bytes[n + 1..].iter().all(|b| *b == 0));
    }
}
