//! Affine engine: every point is brought back to (x : 1) and every curve to (a : 1)
//! after each step. Slow, one inversion per intermediate value, but each state of
//! the walk is a plain affine value that can be checked against the group law.
use super::IsogenyEngine;
use crate::curve::ProjectivePoint;
use crate::fields::{Fp2, FpElement};
use crate::params::SikeParam;
use std::marker::PhantomData;

pub struct IsogenyAffine<E: FpElement> {
    param: &'static SikeParam,
    _field: PhantomData<E>,
}

impl<E: FpElement> IsogenyEngine for IsogenyAffine<E> {
    type Field = E;

    fn new(param: &'static SikeParam) -> Self {
        IsogenyAffine {
            param,
            _field: PhantomData,
        }
    }

    fn param(&self) -> &'static SikeParam {
        self.param
    }

    fn settle_point(&self, P: ProjectivePoint<E>) -> ProjectivePoint<E> {
        P.normalized()
    }

    fn settle_curve(&self, curve: (Fp2<E>, Fp2<E>)) -> (Fp2<E>, Fp2<E>) {
        let (a, c) = curve;
        (&a * &c.inverse(), c.one_like())
    }
}
