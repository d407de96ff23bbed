//! Prime field on fixed width 64-bit limbs in Montgomery form.
//!
//! For p = 2^eA * 3^eB - 1 the value p + 1 has eA / 64 zero low words and
//! -p^-1 = 1 mod 2^64, which makes the Montgomery reduction a plain
//! multiply-accumulate by p + 1 that skips the zero words.
//!
//! Every routine runs through all `words` limbs with no data dependent branch or
//! memory access. Elements stay fully reduced in [0, p).
use super::FpElement;
use crate::error::{Result, SikeError};
use crate::params::SikeParam;
use num_bigint::BigUint;
use std::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Enough 64-bit words for the largest supported prime (751 bits)
pub const MAX_WORDS: usize = 12;

type Limbs = [u64; MAX_WORDS];

#[inline(always)]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// a + b * c + carry
#[inline(always)]
fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

fn limbs_from_biguint(v: &BigUint) -> Limbs {
    let mut out = [0u64; MAX_WORDS];
    for (o, d) in out.iter_mut().zip(v.to_u64_digits()) {
        *o = d;
    }
    out
}

/// Montgomery constants of Fp
#[derive(Debug)]
pub struct MontgomeryField {
    words: usize,
    zero_words: usize,
    bytes: usize,
    p: Limbs,
    p_plus_one: Limbs,
    /// R mod p, the Montgomery form of 1
    one: Limbs,
    /// R^2 mod p
    r2: Limbs,
    modulus: BigUint,
    chain_start: usize,
    pow_strategy: &'static [u8],
    mul_strategy: &'static [u8],
}

impl MontgomeryField {
    /// Prepares the field for p with the addition chain computing x^((p - 3) / 4)
    pub fn new(
        p: &BigUint,
        bytes: usize,
        chain_start: u8,
        pow_strategy: &'static [u8],
        mul_strategy: &'static [u8],
    ) -> Result<Self> {
        let words = ((p.bits() + 63) / 64) as usize;
        if words > MAX_WORDS {
            return Err(SikeError::InvalidParameter(format!(
                "prime of {} bits does not fit in {} words",
                p.bits(),
                MAX_WORDS
            )));
        }

        let p_plus_one = limbs_from_biguint(&(p + 1u32));
        let zero_words = p_plus_one.iter().take_while(|w| **w == 0).count();
        if zero_words == 0 {
            return Err(SikeError::InvalidParameter(
                "p + 1 must be divisible by 2^64".to_string(),
            ));
        }
        if pow_strategy.len() != mul_strategy.len()
            || chain_start >= 16
            || mul_strategy.iter().any(|m| *m >= 16)
        {
            return Err(SikeError::InvalidParameter(
                "malformed addition chain".to_string(),
            ));
        }

        let r = BigUint::from(1u32) << (64 * words);
        Ok(MontgomeryField {
            words,
            zero_words,
            bytes,
            p: limbs_from_biguint(p),
            p_plus_one,
            one: limbs_from_biguint(&(&r % p)),
            r2: limbs_from_biguint(&((&r * &r) % p)),
            modulus: p.clone(),
            chain_start: chain_start as usize,
            pow_strategy,
            mul_strategy,
        })
    }

    /// Subtracts p once when `v + hi * 2^(64 words)` is not below p.
    /// The input must be below 2p.
    fn reduce_once(&self, v: &Limbs, hi: u64) -> Limbs {
        let mut diff = [0u64; MAX_WORDS];
        let mut borrow = 0;
        for i in 0..self.words {
            (diff[i], borrow) = sbb(v[i], self.p[i], borrow);
        }
        // v < p exactly when the subtraction borrowed out of the top word
        let keep = Choice::from((borrow & !hi & 1) as u8);
        let mut out = [0u64; MAX_WORDS];
        for i in 0..self.words {
            out[i] = u64::conditional_select(&diff[i], &v[i], keep);
        }
        out
    }

    fn add(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let mut sum = [0u64; MAX_WORDS];
        let mut carry = 0;
        for i in 0..self.words {
            (sum[i], carry) = adc(a[i], b[i], carry);
        }
        self.reduce_once(&sum, carry)
    }

    fn sub(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let mut diff = [0u64; MAX_WORDS];
        let mut borrow = 0;
        for i in 0..self.words {
            (diff[i], borrow) = sbb(a[i], b[i], borrow);
        }
        // Add p back if the subtraction wrapped around
        let mask = borrow.wrapping_neg();
        let mut carry = 0;
        for i in 0..self.words {
            (diff[i], carry) = adc(diff[i], self.p[i] & mask, carry);
        }
        diff
    }

    /// Montgomery reduction of a double width value t < p * R
    fn redc(&self, t: &mut [u64; 2 * MAX_WORDS + 1]) -> Limbs {
        let n = self.words;
        for i in 0..n {
            // m * p = m * (p + 1) - m, and the -m cancels t[i]
            let m = t[i];
            t[i] = 0;
            let mut carry = 0;
            for j in self.zero_words..n {
                (t[i + j], carry) = mac(t[i + j], m, self.p_plus_one[j], carry);
            }
            for k in (i + n)..(2 * n + 1) {
                (t[k], carry) = adc(t[k], 0, carry);
            }
        }
        let mut out = [0u64; MAX_WORDS];
        out[..n].copy_from_slice(&t[n..2 * n]);
        self.reduce_once(&out, t[2 * n])
    }

    fn mul(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let n = self.words;
        let mut t = [0u64; 2 * MAX_WORDS + 1];
        for i in 0..n {
            let mut carry = 0;
            for j in 0..n {
                (t[i + j], carry) = mac(t[i + j], a[i], b[j], carry);
            }
            t[i + n] = carry;
        }
        self.redc(&mut t)
    }

    fn to_montgomery(&self, a: &Limbs) -> Limbs {
        self.mul(a, &self.r2)
    }

    fn from_montgomery(&self, a: &Limbs) -> Limbs {
        let mut t = [0u64; 2 * MAX_WORDS + 1];
        t[..self.words].copy_from_slice(&a[..self.words]);
        self.redc(&mut t)
    }

    /// Canonical value of `v` if it is below p
    fn checked_limbs(&self, v: &Limbs) -> Option<Limbs> {
        let mut borrow = 0;
        for i in 0..self.words {
            (_, borrow) = sbb(v[i], self.p[i], borrow);
        }
        if borrow == 1 && v[self.words..].iter().all(|w| *w == 0) {
            Some(*v)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct FpOpti {
    v: Limbs,
    f: &'static MontgomeryField,
}

impl fmt::Debug for FpOpti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FpOpti(0x{})", hex::encode(self.encode()))
    }
}

impl FpOpti {
    fn with(&self, v: Limbs) -> Self {
        FpOpti { v, f: self.f }
    }
}

impl FpElement for FpOpti {
    fn zero(param: &'static SikeParam) -> Self {
        FpOpti {
            v: [0u64; MAX_WORDS],
            f: &param.opt_field,
        }
    }

    fn one(param: &'static SikeParam) -> Self {
        let f = &param.opt_field;
        FpOpti { v: f.one, f }
    }

    fn from_u64(param: &'static SikeParam, v: u64) -> Self {
        Self::from_biguint(param, &BigUint::from(v))
    }

    fn from_biguint(param: &'static SikeParam, v: &BigUint) -> Self {
        let f = &param.opt_field;
        let reduced = v % &f.modulus;
        FpOpti {
            v: f.to_montgomery(&limbs_from_biguint(&reduced)),
            f,
        }
    }

    fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.encode())
    }

    fn zero_like(&self) -> Self {
        self.with([0u64; MAX_WORDS])
    }

    fn one_like(&self) -> Self {
        self.with(self.f.one)
    }

    fn modulus(&self) -> &'static BigUint {
        &self.f.modulus
    }

    fn add(&self, rhs: &Self) -> Self {
        self.with(self.f.add(&self.v, &rhs.v))
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.with(self.f.sub(&self.v, &rhs.v))
    }

    fn neg(&self) -> Self {
        self.with(self.f.sub(&[0u64; MAX_WORDS], &self.v))
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.with(self.f.mul(&self.v, &rhs.v))
    }

    fn square(&self) -> Self {
        self.with(self.f.mul(&self.v, &self.v))
    }

    /// Fixed addition chain over the table a, a^3, ..., a^31
    fn pow_p34(&self) -> Self {
        let f = self.f;
        let a2 = self.square();
        let mut table = [*self; 16];
        for i in 1..16 {
            table[i] = table[i - 1].mul(&a2);
        }

        let mut t = table[f.chain_start];
        for (&squarings, &m) in f.pow_strategy.iter().zip(f.mul_strategy) {
            for _ in 0..squarings {
                t = t.square();
            }
            t = t.mul(&table[m as usize]);
        }
        t
    }

    fn is_zero(&self) -> Choice {
        let acc = self.v[..self.f.words].iter().fold(0u64, |acc, w| acc | w);
        acc.ct_eq(&0)
    }

    fn ct_eq(&self, rhs: &Self) -> Choice {
        let n = self.f.words;
        self.v[..n].ct_eq(&rhs.v[..n])
    }

    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut v = [0u64; MAX_WORDS];
        for i in 0..MAX_WORDS {
            v[i] = u64::conditional_select(&a.v[i], &b.v[i], choice);
        }
        a.with(v)
    }

    fn encode(&self) -> Vec<u8> {
        let canonical = self.f.from_montgomery(&self.v);
        let n = self.f.bytes;
        (0..n).map(|k| (canonical[k / 8] >> (8 * (k % 8))) as u8).collect()
    }

    fn decode(param: &'static SikeParam, bytes: &[u8]) -> Result<Self> {
        let f = &param.opt_field;
        if bytes.len() != f.bytes {
            return Err(SikeError::InvalidLength {
                what: "Fp element",
                expected: f.bytes,
                actual: bytes.len(),
            });
        }
        let mut v = [0u64; MAX_WORDS];
        for (k, b) in bytes.iter().enumerate() {
            v[k / 8] |= (*b as u64) << (8 * (k % 8));
        }
        let v = f
            .checked_limbs(&v)
            .ok_or(SikeError::NonCanonical("Fp element"))?;
        Ok(FpOpti {
            v: f.to_montgomery(&v),
            f,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FpRef;
    use crate::params::ParamSet;
    use num_bigint::RandBigInt;
    use proptest::prelude::*;
    use rand::thread_rng;

    fn both(set: ParamSet, v: &BigUint) -> (FpOpti, FpRef) {
        let param = SikeParam::get(set).unwrap();
        (FpOpti::from_biguint(param, v), FpRef::from_biguint(param, v))
    }

    #[test]
    fn montgomery_constants() {
        for set in ParamSet::ALL {
            let param = SikeParam::get(set).unwrap();
            let f = &param.opt_field;
            assert_eq!(f.zero_words, param.e_a as usize / 64);
            let one = FpOpti::one(param);
            assert_eq!(one.to_biguint(), BigUint::from(1u32));
            assert!(bool::from(one.mul(&one).ct_eq(&one)));
        }
    }

    #[test]
    fn chain_inverse_all_sets() {
        let mut rng = thread_rng();
        for set in ParamSet::ALL {
            let param = SikeParam::get(set).unwrap();
            let v = rng.gen_biguint_below(&param.prime);
            let a = FpOpti::from_biguint(param, &v);
            let inv = a.inverse();
            assert_eq!(
                inv.to_biguint(),
                v.modpow(&(&param.prime - 2u32), &param.prime)
            );
            assert!(bool::from(FpOpti::zero(param).inverse().is_zero()));
        }
    }

    #[test]
    fn edge_values() {
        let param = SikeParam::get(ParamSet::P751).unwrap();
        let p = &param.prime;
        let max = FpOpti::from_biguint(param, &(p - 1u32));
        assert_eq!(max.add(&max).to_biguint(), p - 2u32);
        assert_eq!(max.mul(&max).to_biguint(), BigUint::from(1u32));
        assert!(bool::from(max.add(&FpOpti::one(param)).is_zero()));
        assert!(bool::from(FpOpti::zero(param).neg().is_zero()));
    }

    proptest! {
        #[test]
        fn agrees_with_reference(
            a in prop::collection::vec(any::<u8>(), 64),
            b in prop::collection::vec(any::<u8>(), 64),
            idx in 0usize..4,
        ) {
            let set = ParamSet::ALL[idx];
            let (a, b) = (BigUint::from_bytes_be(&a), BigUint::from_bytes_be(&b));
            let (oa, ra) = both(set, &a);
            let (ob, rb) = both(set, &b);

            prop_assert_eq!(oa.add(&ob).encode(), ra.add(&rb).encode());
            prop_assert_eq!(oa.sub(&ob).encode(), ra.sub(&rb).encode());
            prop_assert_eq!(oa.mul(&ob).encode(), ra.mul(&rb).encode());
            prop_assert_eq!(oa.neg().encode(), ra.neg().encode());
            prop_assert_eq!(oa.square().encode(), ra.square().encode());
        }

        #[test]
        fn decode_encode(bytes in prop::collection::vec(any::<u8>(), 55)) {
            let param = SikeParam::get(ParamSet::P434).unwrap();
            match FpOpti::decode(param, &bytes) {
                Ok(a) => prop_assert_eq!(a.encode(), bytes.clone()),
                Err(e) => {
                    prop_assert_eq!(e, SikeError::NonCanonical("Fp element"));
                    prop_assert!(BigUint::from_bytes_le(&bytes) >= param.prime);
                }
            }
        }
    }
}
