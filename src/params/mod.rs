//! Named SIKE parameter sets.
//!
//! Each set is an immutable [`SikeParam`] built once per process from the constants
//! in the per-prime modules and shared read-only afterwards.
mod p434;
mod p503;
mod p610;
mod p751;

use crate::curve::{AffinePoint, MontgomeryCurve};
use crate::error::{Result, SikeError};
use crate::fields::optimized::MontgomeryField;
use crate::fields::reference::PrimeField;
use crate::fields::{Fp2, FpElement, FpRef};
use crate::isogeny::Party;
use crate::strategy::max_tree_points;
use log::debug;
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Montgomery coefficient of the starting curve y^2 = x^3 + 6x^2 + x
pub const STARTING_A: u64 = 6;

pub(crate) struct BasePointHex {
    x0: &'static str,
    x1: &'static str,
    y0: &'static str,
    y1: &'static str,
}

pub(crate) struct ParamConstants {
    name: &'static str,
    prime: &'static str,
    e_a: u32,
    e_b: u32,
    msg_bytes: usize,
    crypto_bytes: usize,
    pa: BasePointHex,
    qa: BasePointHex,
    ra: BasePointHex,
    pb: BasePointHex,
    qb: BasePointHex,
    rb: BasePointHex,
    strategy_a: &'static [usize],
    strategy_b: &'static [usize],
    tree_points_a: usize,
    tree_points_b: usize,
    chain_start: u8,
    pow_strategy: &'static [u8],
    mul_strategy: &'static [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSet {
    P434,
    P503,
    P610,
    P751,
}

impl ParamSet {
    pub const ALL: [ParamSet; 4] = [
        ParamSet::P434,
        ParamSet::P503,
        ParamSet::P610,
        ParamSet::P751,
    ];

    fn constants(self) -> &'static ParamConstants {
        match self {
            ParamSet::P434 => &p434::CONSTANTS,
            ParamSet::P503 => &p503::CONSTANTS,
            ParamSet::P610 => &p610::CONSTANTS,
            ParamSet::P751 => &p751::CONSTANTS,
        }
    }

    fn index(self) -> usize {
        match self {
            ParamSet::P434 => 0,
            ParamSet::P503 => 1,
            ParamSet::P610 => 2,
            ParamSet::P751 => 3,
        }
    }

    pub fn name(self) -> &'static str {
        self.constants().name
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamSet {
    type Err = SikeError;

    /// Accepts `p434` as well as `SIKEp434`, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let short = lower.strip_prefix("sike").unwrap_or(&lower);
        ParamSet::ALL
            .into_iter()
            .find(|set| set.name()[4..].eq_ignore_ascii_case(short))
            .ok_or_else(|| SikeError::InvalidParameter(format!("unknown parameter set {s}")))
    }
}

/// Affine point of the starting curve with coordinates in Fp2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePoint {
    pub x: [BigUint; 2],
    pub y: [BigUint; 2],
}

impl BasePoint {
    fn parse(hex: &BasePointHex, p: &BigUint) -> Result<Self> {
        let x = [parse_hex(hex.x0, p)?, parse_hex(hex.x1, p)?];
        let y = [parse_hex(hex.y0, p)?, parse_hex(hex.y1, p)?];
        Ok(BasePoint { x, y })
    }

    /// x-coordinate in the field backend `E`
    pub fn x<E: FpElement>(&self, param: &'static SikeParam) -> Fp2<E> {
        Fp2::from_biguint(param, &self.x[0], &self.x[1])
    }

    pub fn affine<E: FpElement>(&self, param: &'static SikeParam) -> AffinePoint<E> {
        AffinePoint::Finite {
            x: self.x(param),
            y: Fp2::from_biguint(param, &self.y[0], &self.y[1]),
        }
    }
}

fn parse_hex(s: &str, p: &BigUint) -> Result<BigUint> {
    let v = BigUint::parse_bytes(s.as_bytes(), 16)
        .ok_or_else(|| SikeError::InvalidParameter(format!("malformed constant {s}")))?;
    if &v >= p {
        return Err(SikeError::InvalidParameter(format!(
            "constant {s} is not reduced"
        )));
    }
    Ok(v)
}

/// All constants of one parameter set
#[derive(Debug)]
pub struct SikeParam {
    pub set: ParamSet,
    pub name: &'static str,
    pub prime: BigUint,
    pub e_a: u32,
    pub e_b: u32,
    /// Bit length of private scalars
    pub bits_a: usize,
    pub bits_b: usize,
    pub key_bytes_a: usize,
    pub key_bytes_b: usize,
    /// Masks for the last, most significant, byte of a freshly drawn scalar
    pub mask_a: u8,
    pub mask_b: u8,
    pub msg_bytes: usize,
    pub crypto_bytes: usize,
    pub fp_bytes: usize,
    pub pa: BasePoint,
    pub qa: BasePoint,
    pub ra: BasePoint,
    pub pb: BasePoint,
    pub qb: BasePoint,
    pub rb: BasePoint,
    pub strategy_a: &'static [usize],
    pub strategy_b: &'static [usize],
    pub tree_rows_a: usize,
    pub tree_rows_b: usize,
    pub tree_points_a: usize,
    pub tree_points_b: usize,
    pub(crate) ref_field: PrimeField,
    pub(crate) opt_field: MontgomeryField,
}

static PARAMS: [OnceLock<Result<SikeParam>>; 4] =
    [OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new()];

impl SikeParam {
    /// Shared instance of a parameter set, built on first use
    pub fn get(set: ParamSet) -> Result<&'static SikeParam> {
        PARAMS[set.index()]
            .get_or_init(|| SikeParam::new(set))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn new(set: ParamSet) -> Result<Self> {
        let c = set.constants();
        debug!("building parameter set {}", c.name);

        let prime = BigUint::parse_bytes(c.prime.as_bytes(), 16)
            .ok_or_else(|| SikeError::InvalidParameter("malformed prime".to_string()))?;
        let pow3 = BigUint::from(3u32).pow(c.e_b);
        if prime != (BigUint::from(1u32) << c.e_a) * &pow3 - 1u32 {
            return Err(SikeError::InvalidParameter(format!(
                "{} is not 2^{} * 3^{} - 1",
                c.name, c.e_a, c.e_b
            )));
        }

        let fp_bytes = ((prime.bits() + 7) / 8) as usize;
        let bits_a = c.e_a as usize;
        let bits_b = (pow3.bits() - 1) as usize;
        let (key_bytes_a, mask_a) = key_size(bits_a);
        let (key_bytes_b, mask_b) = key_size(bits_b);

        let tree_rows_a = (c.e_a / 2) as usize;
        let tree_rows_b = c.e_b as usize;
        check_strategy(c.name, tree_rows_a, c.strategy_a, c.tree_points_a)?;
        check_strategy(c.name, tree_rows_b, c.strategy_b, c.tree_points_b)?;

        Ok(SikeParam {
            set,
            name: c.name,
            e_a: c.e_a,
            e_b: c.e_b,
            bits_a,
            bits_b,
            key_bytes_a,
            key_bytes_b,
            mask_a,
            mask_b,
            msg_bytes: c.msg_bytes,
            crypto_bytes: c.crypto_bytes,
            fp_bytes,
            pa: BasePoint::parse(&c.pa, &prime)?,
            qa: BasePoint::parse(&c.qa, &prime)?,
            ra: BasePoint::parse(&c.ra, &prime)?,
            pb: BasePoint::parse(&c.pb, &prime)?,
            qb: BasePoint::parse(&c.qb, &prime)?,
            rb: BasePoint::parse(&c.rb, &prime)?,
            strategy_a: c.strategy_a,
            strategy_b: c.strategy_b,
            tree_rows_a,
            tree_rows_b,
            tree_points_a: c.tree_points_a,
            tree_points_b: c.tree_points_b,
            ref_field: PrimeField::new(&prime, fp_bytes),
            opt_field: MontgomeryField::new(
                &prime,
                fp_bytes,
                c.chain_start,
                c.pow_strategy,
                c.mul_strategy,
            )?,
            prime,
        })
    }

    pub fn bits(&self, party: Party) -> usize {
        match party {
            Party::Alice => self.bits_a,
            Party::Bob => self.bits_b,
        }
    }

    pub fn key_bytes(&self, party: Party) -> usize {
        match party {
            Party::Alice => self.key_bytes_a,
            Party::Bob => self.key_bytes_b,
        }
    }

    pub fn mask(&self, party: Party) -> u8 {
        match party {
            Party::Alice => self.mask_a,
            Party::Bob => self.mask_b,
        }
    }

    /// The basis (P, Q, R = P - Q) generating the kernels of `party`
    pub fn basis(&self, party: Party) -> [&BasePoint; 3] {
        match party {
            Party::Alice => [&self.pa, &self.qa, &self.ra],
            Party::Bob => [&self.pb, &self.qb, &self.rb],
        }
    }

    pub fn strategy(&self, party: Party) -> &'static [usize] {
        match party {
            Party::Alice => self.strategy_a,
            Party::Bob => self.strategy_b,
        }
    }

    pub fn tree_rows(&self, party: Party) -> usize {
        match party {
            Party::Alice => self.tree_rows_a,
            Party::Bob => self.tree_rows_b,
        }
    }

    pub fn tree_points(&self, party: Party) -> usize {
        match party {
            Party::Alice => self.tree_points_a,
            Party::Bob => self.tree_points_b,
        }
    }

    /// Order of the torsion subgroup walked by `party`: 2^eA or 3^eB
    pub fn order(&self, party: Party) -> BigUint {
        match party {
            Party::Alice => BigUint::from(1u32) << self.e_a,
            Party::Bob => BigUint::from(3u32).pow(self.e_b),
        }
    }

    pub fn private_key_bytes(&self) -> usize {
        self.msg_bytes + self.fp_bytes
    }

    pub fn public_key_bytes(&self) -> usize {
        6 * self.fp_bytes
    }

    pub fn ciphertext_bytes(&self) -> usize {
        self.public_key_bytes() + self.msg_bytes
    }

    /// Checks the base points against the starting curve using affine arithmetic:
    /// both bases have full order, R = P - Q, and Alice's Q lies above (0, 0) while P does not.
    pub fn validate(&'static self) -> Result<()> {
        let curve = MontgomeryCurve::<FpRef>::starting(self);
        let two_torsion = AffinePoint::Finite {
            x: Fp2::zero(self),
            y: Fp2::zero(self),
        };

        for party in [Party::Alice, Party::Bob] {
            let [p, q, r] = self.basis(party).map(|b| b.affine::<FpRef>(self));
            for point in [&p, &q, &r] {
                if !curve.is_on_curve(point) {
                    return Err(SikeError::InvalidParameter(format!(
                        "{}: base point of {party} is not on the starting curve",
                        self.name
                    )));
                }
            }
            if curve.add(&p, &curve.negate(&q)) != r {
                return Err(SikeError::InvalidParameter(format!(
                    "{}: R != P - Q for {party}",
                    self.name
                )));
            }

            let cofactor = match party {
                Party::Alice => BigUint::from(1u32) << (self.e_a - 1),
                Party::Bob => BigUint::from(3u32).pow(self.e_b - 1),
            };
            let (lp, lq) = (curve.mul(&p, &cofactor), curve.mul(&q, &cofactor));
            let full_order = !lp.is_infinity()
                && !lq.is_infinity()
                && curve.mul(&p, &self.order(party)).is_infinity()
                && curve.mul(&q, &self.order(party)).is_infinity();
            let independent = match party {
                Party::Alice => lq == two_torsion && lp != two_torsion,
                Party::Bob => lp != lq && lp != curve.negate(&lq),
            };
            if !full_order || !independent {
                return Err(SikeError::InvalidParameter(format!(
                    "{}: base points of {party} do not form a basis",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Byte length of a scalar of `bits` bits and the mask for its top byte
fn key_size(bits: usize) -> (usize, u8) {
    let bytes = (bits + 7) / 8;
    let top_bits = bits - 8 * (bytes - 1);
    (bytes, ((1u16 << top_bits) - 1) as u8)
}

fn check_strategy(name: &str, rows: usize, strategy: &[usize], points: usize) -> Result<()> {
    let needed = max_tree_points(rows, strategy)?;
    if strategy.len() != rows - 1 || needed != points {
        return Err(SikeError::InvalidParameter(format!(
            "{name}: strategy does not fit a tree of {rows} rows"
        )));
    }
    Ok(())
}
