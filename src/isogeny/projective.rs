//! Projective engine: points stay as (X : Z) and curves as projective constant pairs
//! for the whole walk. Only the three public key images are normalized at the end.
use super::IsogenyEngine;
use crate::curve::ProjectivePoint;
use crate::fields::{Fp2, FpElement};
use crate::params::SikeParam;
use std::marker::PhantomData;

pub struct IsogenyProjective<E: FpElement> {
    param: &'static SikeParam,
    _field: PhantomData<E>,
}

impl<E: FpElement> IsogenyEngine for IsogenyProjective<E> {
    type Field = E;

    fn new(param: &'static SikeParam) -> Self {
        IsogenyProjective {
            param,
            _field: PhantomData,
        }
    }

    fn param(&self) -> &'static SikeParam {
        self.param
    }

    #[inline(always)]
    fn settle_point(&self, P: ProjectivePoint<E>) -> ProjectivePoint<E> {
        P
    }

    #[inline(always)]
    fn settle_curve(&self, curve: (Fp2<E>, Fp2<E>)) -> (Fp2<E>, Fp2<E>) {
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FpOpti, FpRef};
    use crate::isogeny::IsogenyAffine;
    use crate::params::ParamSet;

    #[test]
    fn same_public_key_on_both_fields() {
        let param = SikeParam::get(ParamSet::P503).unwrap();
        let opti = IsogenyProjective::<FpOpti>::new(param);
        let reference = IsogenyProjective::<FpRef>::new(param);
        let key = [0x3c; 20];

        let a = opti.iso_gen_3(&key).map(|x| x.encode());
        let b = reference.iso_gen_3(&key).map(|x| x.encode());
        assert_eq!(a, b);
    }

    #[test]
    fn same_shared_secret_as_affine() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let projective = IsogenyProjective::<FpOpti>::new(param);
        let affine = IsogenyAffine::<FpOpti>::new(param);
        let key_a = [0x11; 27];
        let key_b = [0x01, 0x22, 0x33, 0x44];

        let pk_b = projective.iso_gen_3(&key_b);
        assert_eq!(pk_b, affine.iso_gen_3(&key_b));
        let j1 = projective.iso_ex_2(&key_a, &pk_b);
        let j2 = affine.iso_ex_2(&key_a, &pk_b);
        assert_eq!(j1.encode(), j2.encode());
    }
}
