//! Reference prime field on top of num-bigint.
//!
//! Straightforward and easy to audit, but not constant time: BigUint arithmetic
//! branches and allocates depending on operand size. Used as the correctness
//! baseline for the Montgomery backend.
use super::FpElement;
use crate::error::{Result, SikeError};
use crate::params::SikeParam;
use num_bigint::{BigInt, BigUint, Sign};
use std::fmt;
use subtle::Choice;

/// Constants of Fp needed by [`FpRef`]
#[derive(Debug)]
pub struct PrimeField {
    pub(crate) p: BigUint,
    pub(crate) p34: BigUint,
    pub(crate) bytes: usize,
}

impl PrimeField {
    pub fn new(p: &BigUint, bytes: usize) -> Self {
        PrimeField {
            p: p.clone(),
            p34: (p - 3u32) >> 2,
            bytes,
        }
    }

    fn reduce(&'static self, v: BigUint) -> FpRef {
        FpRef { v: v % &self.p, f: self }
    }
}

/// Computes a^-1 mod p with the extended Euclidean algorithm, 0 is mapped to 0
pub(crate) fn xgcd_inverse(a: &BigUint, p: &BigUint) -> BigUint {
    let (mut s1, mut s2) = (BigInt::from(0u32), BigInt::from(1u32));
    let (mut m, mut n) = (
        BigInt::from_biguint(Sign::Plus, p.clone()),
        BigInt::from_biguint(Sign::Plus, a % p),
    );

    // m = s1 * a (mod p) and n = s2 * a (mod p) hold throughout
    while n.sign() != Sign::NoSign {
        let q = &m / &n;
        let r = &m - &q * &n;
        (m, n) = (n, r);
        (s1, s2) = (s2.clone(), s1 - &q * s2);
    }

    let modulus = BigInt::from_biguint(Sign::Plus, p.clone());
    s1 %= &modulus;
    if s1.sign() == Sign::Minus {
        s1 += &modulus;
    }
    s1.into_parts().1
}

#[derive(Clone)]
pub struct FpRef {
    v: BigUint,
    f: &'static PrimeField,
}

impl fmt::Debug for FpRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FpRef(0x{})", self.v.to_str_radix(16))
    }
}

impl FpElement for FpRef {
    fn zero(param: &'static SikeParam) -> Self {
        FpRef {
            v: BigUint::from(0u32),
            f: &param.ref_field,
        }
    }

    fn one(param: &'static SikeParam) -> Self {
        FpRef {
            v: BigUint::from(1u32),
            f: &param.ref_field,
        }
    }

    fn from_u64(param: &'static SikeParam, v: u64) -> Self {
        param.ref_field.reduce(BigUint::from(v))
    }

    fn from_biguint(param: &'static SikeParam, v: &BigUint) -> Self {
        param.ref_field.reduce(v.clone())
    }

    fn to_biguint(&self) -> BigUint {
        self.v.clone()
    }

    fn zero_like(&self) -> Self {
        FpRef {
            v: BigUint::from(0u32),
            f: self.f,
        }
    }

    fn one_like(&self) -> Self {
        FpRef {
            v: BigUint::from(1u32),
            f: self.f,
        }
    }

    fn modulus(&self) -> &'static BigUint {
        &self.f.p
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut v = &self.v + &rhs.v;
        if v >= self.f.p {
            v -= &self.f.p;
        }
        FpRef { v, f: self.f }
    }

    fn sub(&self, rhs: &Self) -> Self {
        let v = if self.v >= rhs.v {
            &self.v - &rhs.v
        } else {
            &self.f.p - &rhs.v + &self.v
        };
        FpRef { v, f: self.f }
    }

    fn neg(&self) -> Self {
        let v = if self.v.bits() == 0 {
            BigUint::from(0u32)
        } else {
            &self.f.p - &self.v
        };
        FpRef { v, f: self.f }
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.f.reduce(&self.v * &rhs.v)
    }

    fn square(&self) -> Self {
        self.f.reduce(&self.v * &self.v)
    }

    fn pow_p34(&self) -> Self {
        FpRef {
            v: self.v.modpow(&self.f.p34, &self.f.p),
            f: self.f,
        }
    }

    fn inverse(&self) -> Self {
        FpRef {
            v: xgcd_inverse(&self.v, &self.f.p),
            f: self.f,
        }
    }

    fn pow(&self, e: &BigUint) -> Self {
        FpRef {
            v: self.v.modpow(e, &self.f.p),
            f: self.f,
        }
    }

    fn is_zero(&self) -> Choice {
        Choice::from((self.v.bits() == 0) as u8)
    }

    fn ct_eq(&self, rhs: &Self) -> Choice {
        Choice::from((self.v == rhs.v) as u8)
    }

    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        if bool::from(choice) {
            b.clone()
        } else {
            a.clone()
        }
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = self.v.to_bytes_le();
        out.resize(self.f.bytes, 0);
        out
    }

    fn decode(param: &'static SikeParam, bytes: &[u8]) -> Result<Self> {
        let f = &param.ref_field;
        if bytes.len() != f.bytes {
            return Err(SikeError::InvalidLength {
                what: "Fp element",
                expected: f.bytes,
                actual: bytes.len(),
            });
        }
        let v = BigUint::from_bytes_le(bytes);
        if v >= f.p {
            return Err(SikeError::NonCanonical("Fp element"));
        }
        Ok(FpRef { v, f })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;
    use num_bigint::RandBigInt;
    use rand::thread_rng;

    #[test]
    fn inverse_matches_fermat() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let p = &param.prime;
        let mut rng = thread_rng();
        for _ in 0..20 {
            let a = rng.gen_biguint_below(p);
            let inv = xgcd_inverse(&a, p);
            assert_eq!(inv, a.modpow(&(p - 2u32), p));
            if a.bits() != 0 {
                assert_eq!((&a * &inv) % p, BigUint::from(1u32));
            }
        }
        assert_eq!(xgcd_inverse(&BigUint::from(0u32), p), BigUint::from(0u32));
    }

    #[test]
    fn pow_p34_inverse() {
        let param = SikeParam::get(ParamSet::P503).unwrap();
        let mut rng = thread_rng();
        let a = FpRef::from_biguint(param, &rng.gen_biguint_below(&param.prime));
        // The default chain based inverse agrees with extended Euclid
        let t = a.pow_p34().square().square().mul(&a);
        assert!(bool::from(t.ct_eq(&a.inverse())));
    }

    #[test]
    fn encoding_rejects_non_canonical() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let bytes = param.prime.to_bytes_le();
        assert_eq!(bytes.len(), param.fp_bytes);
        assert_eq!(
            FpRef::decode(param, &bytes).unwrap_err(),
            SikeError::NonCanonical("Fp element")
        );
        let minus_one = FpRef::one(param).neg();
        let enc = minus_one.encode();
        assert_eq!(BigUint::from_bytes_le(&enc), &param.prime - 1u32);
    }
}
