//! SIDH shared secret derivation
use crate::error::{Result, SikeError};
use crate::isogeny::{IsogenyEngine, Party};
use crate::keys::{SidhPrivateKey, SidhPublicKey};
use crate::params::SikeParam;
use log::debug;

pub struct Sidh<I: IsogenyEngine> {
    engine: I,
}

impl<I: IsogenyEngine> Sidh<I> {
    pub fn new(param: &'static SikeParam) -> Self {
        Sidh {
            engine: I::new(param),
        }
    }

    /// Encoded j-invariant of the curve both parties reach. The public key has to come
    /// from the other party.
    pub fn generate_shared_secret(
        &self,
        private: &SidhPrivateKey,
        public: &SidhPublicKey<I::Field>,
    ) -> Result<Vec<u8>> {
        let param = self.engine.param();
        if !std::ptr::eq(private.param(), param) || !std::ptr::eq(public.param(), param) {
            return Err(SikeError::InvalidParameter(format!(
                "keys do not belong to {}",
                param.name
            )));
        }
        let expected = private.party().counterpart();
        if public.party() != expected {
            return Err(SikeError::PartyMismatch {
                expected,
                actual: public.party(),
            });
        }

        let j = match private.party() {
            Party::Alice => self.engine.iso_ex_2(private.key(), public.points()),
            Party::Bob => self.engine.iso_ex_3(private.key(), public.points()),
        };
        debug!("{}: shared secret derived by {}", param.name, private.party());
        Ok(j.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isogeny::{OptimizedEngine, ReferenceEngine};
    use crate::keys::KeyGenerator;
    use crate::params::ParamSet;
    use rand::thread_rng;

    #[test]
    fn exchange_p434() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let generator = KeyGenerator::<OptimizedEngine>::new(param);
        let sidh = Sidh::<OptimizedEngine>::new(param);
        let mut rng = thread_rng();

        let alice = generator.generate_key_pair(&mut rng, Party::Alice).unwrap();
        let bob = generator.generate_key_pair(&mut rng, Party::Bob).unwrap();
        let ss_a = sidh.generate_shared_secret(&alice.private, &bob.public).unwrap();
        let ss_b = sidh.generate_shared_secret(&bob.private, &alice.public).unwrap();
        assert_eq!(ss_a, ss_b);
        assert_eq!(ss_a.len(), 2 * param.fp_bytes);
    }

    #[test]
    fn rejects_own_party_key() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let generator = KeyGenerator::<ReferenceEngine>::new(param);
        let sidh = Sidh::<ReferenceEngine>::new(param);
        let mut rng = thread_rng();

        let alice = generator.generate_key_pair(&mut rng, Party::Alice).unwrap();
        assert_eq!(
            sidh.generate_shared_secret(&alice.private, &alice.public),
            Err(SikeError::PartyMismatch {
                expected: Party::Bob,
                actual: Party::Alice
            })
        );
    }
}
