//! SIDH key material and key generation
use crate::error::{Result, SikeError};
use crate::fields::{Fp2, FpElement};
use crate::isogeny::{IsogenyEngine, Party};
use crate::params::SikeParam;
use crate::util::{ct_equal, ct_is_zero};
use log::debug;
use rand_core::{CryptoRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Secret scalar of one party together with the KEM rejection secret `s`.
///
/// The scalar is held little-endian on `fp_bytes` bytes and always satisfies
/// 0 < key < 2^bits(party). Both secrets are wiped on drop.
#[derive(Clone)]
pub struct SidhPrivateKey {
    param: &'static SikeParam,
    party: Party,
    s: Vec<u8>,
    key: Vec<u8>,
}

impl SidhPrivateKey {
    pub fn new(param: &'static SikeParam, party: Party, s: &[u8], key: &[u8]) -> Result<Self> {
        if s.len() != param.msg_bytes {
            return Err(SikeError::InvalidLength {
                what: "private key secret",
                expected: param.msg_bytes,
                actual: s.len(),
            });
        }
        if key.len() != param.fp_bytes {
            return Err(SikeError::InvalidLength {
                what: "private key scalar",
                expected: param.fp_bytes,
                actual: key.len(),
            });
        }
        check_range(param, party, key)?;
        Ok(SidhPrivateKey {
            param,
            party,
            s: s.to_vec(),
            key: key.to_vec(),
        })
    }

    pub fn party(&self) -> Party {
        self.party
    }

    pub fn param(&self) -> &'static SikeParam {
        self.param
    }

    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Little-endian scalar
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Encoded as s || key
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.param.private_key_bytes());
        out.extend_from_slice(&self.s);
        out.extend_from_slice(&self.key);
        out
    }

    pub fn decode(param: &'static SikeParam, party: Party, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != param.private_key_bytes() {
            return Err(SikeError::InvalidLength {
                what: "private key",
                expected: param.private_key_bytes(),
                actual: bytes.len(),
            });
        }
        let (s, key) = bytes.split_at(param.msg_bytes);
        SidhPrivateKey::new(param, party, s, key)
    }
}

/// Rejects 0 and anything with bits at or above 2^bits(party), without branching on the value
fn check_range(param: &SikeParam, party: Party, key: &[u8]) -> Result<()> {
    let top = param.key_bytes(party) - 1;
    let mut excess = key[top + 1..].iter().fold(0u8, |acc, b| acc | b);
    excess |= key[top] & !param.mask(party);
    let out_of_range = !excess.ct_eq(&0) | ct_is_zero(key);
    if bool::from(out_of_range) {
        return Err(SikeError::KeyOutOfRange { party });
    }
    Ok(())
}

impl Drop for SidhPrivateKey {
    fn drop(&mut self) {
        self.s.zeroize();
        self.key.zeroize();
    }
}

impl PartialEq for SidhPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.party == other.party && bool::from(ct_equal(&self.encode(), &other.encode()))
    }
}

impl fmt::Debug for SidhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidhPrivateKey")
            .field("param", &self.param.name)
            .field("party", &self.party)
            .finish_non_exhaustive()
    }
}

/// Images x(phi(P)), x(phi(Q)), x(phi(P - Q)) of the counterpart's basis
#[derive(Clone, Debug)]
pub struct SidhPublicKey<E: FpElement> {
    param: &'static SikeParam,
    party: Party,
    points: [Fp2<E>; 3],
}

impl<E: FpElement> SidhPublicKey<E> {
    pub fn new(param: &'static SikeParam, party: Party, points: [Fp2<E>; 3]) -> Self {
        SidhPublicKey {
            param,
            party,
            points,
        }
    }

    pub fn party(&self) -> Party {
        self.party
    }

    pub fn param(&self) -> &'static SikeParam {
        self.param
    }

    pub fn points(&self) -> &[Fp2<E>; 3] {
        &self.points
    }

    pub fn encode(&self) -> Vec<u8> {
        self.points.iter().flat_map(|x| x.encode()).collect()
    }

    pub fn decode(param: &'static SikeParam, party: Party, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != param.public_key_bytes() {
            return Err(SikeError::InvalidLength {
                what: "public key",
                expected: param.public_key_bytes(),
                actual: bytes.len(),
            });
        }
        let n = 2 * param.fp_bytes;
        let points = [
            Fp2::decode(param, &bytes[..n])?,
            Fp2::decode(param, &bytes[n..2 * n])?,
            Fp2::decode(param, &bytes[2 * n..])?,
        ];
        Ok(SidhPublicKey::new(param, party, points))
    }
}

impl<E: FpElement> PartialEq for SidhPublicKey<E> {
    fn eq(&self, other: &Self) -> bool {
        self.party == other.party && std::ptr::eq(self.param, other.param) && self.points == other.points
    }
}

pub struct KeyPair<E: FpElement> {
    pub private: SidhPrivateKey,
    pub public: SidhPublicKey<E>,
}

/// Draws private keys and derives the matching public keys with the engine `I`
pub struct KeyGenerator<I: IsogenyEngine> {
    engine: I,
}

impl<I: IsogenyEngine> KeyGenerator<I> {
    pub fn new(param: &'static SikeParam) -> Self {
        KeyGenerator {
            engine: I::new(param),
        }
    }

    pub fn param(&self) -> &'static SikeParam {
        self.engine.param()
    }

    /// Draws `s` and then the scalar, masking its last byte so the scalar stays below
    /// 2^bits(party). Only a zero scalar is drawn again.
    pub fn generate_private_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        party: Party,
    ) -> SidhPrivateKey {
        let param = self.param();
        let mut s = vec![0u8; param.msg_bytes];
        rng.fill_bytes(&mut s);

        let n = param.key_bytes(party);
        let mut scalar = vec![0u8; n];
        loop {
            rng.fill_bytes(&mut scalar);
            scalar[n - 1] &= param.mask(party);
            if !bool::from(ct_is_zero(&scalar)) {
                break;
            }
        }

        let mut key = vec![0u8; param.fp_bytes];
        key[..n].copy_from_slice(&scalar);
        scalar.zeroize();
        debug!("{}: generated private key for {}", param.name, party);

        SidhPrivateKey {
            param,
            party,
            s,
            key,
        }
    }

    pub fn derive_public_key(&self, private: &SidhPrivateKey) -> Result<SidhPublicKey<I::Field>> {
        let param = self.param();
        if !std::ptr::eq(private.param, param) {
            return Err(SikeError::InvalidParameter(format!(
                "private key for {} used with {}",
                private.param.name, param.name
            )));
        }

        let points = match private.party {
            Party::Alice => self.engine.iso_gen_2(private.key()),
            Party::Bob => self.engine.iso_gen_3(private.key()),
        };
        debug!("{}: derived public key for {}", param.name, private.party);
        Ok(SidhPublicKey::new(param, private.party, points))
    }

    pub fn generate_key_pair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        party: Party,
    ) -> Result<KeyPair<I::Field>> {
        let private = self.generate_private_key(rng, party);
        let public = self.derive_public_key(&private)?;
        Ok(KeyPair { private, public })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isogeny::OptimizedEngine;
    use crate::params::ParamSet;
    use rand::thread_rng;

    #[test]
    fn private_key_range() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let s = vec![7u8; param.msg_bytes];
        let mut key = vec![0u8; param.fp_bytes];
        assert_eq!(
            SidhPrivateKey::new(param, Party::Alice, &s, &key).unwrap_err(),
            SikeError::KeyOutOfRange { party: Party::Alice }
        );

        // 2^216 - 1 is the largest scalar for Alice
        for b in key[..param.key_bytes_a].iter_mut() {
            *b = 0xff;
        }
        assert!(SidhPrivateKey::new(param, Party::Alice, &s, &key).is_ok());
        key[param.key_bytes_a] = 1;
        assert!(SidhPrivateKey::new(param, Party::Alice, &s, &key).is_err());

        // Bob's scalars stop at 2^217
        let mut key = vec![0u8; param.fp_bytes];
        key[param.key_bytes_b - 1] = 0x02;
        assert_eq!(
            SidhPrivateKey::new(param, Party::Bob, &s, &key).unwrap_err(),
            SikeError::KeyOutOfRange { party: Party::Bob }
        );
        key[param.key_bytes_b - 1] = 0x01;
        assert!(SidhPrivateKey::new(param, Party::Bob, &s, &key).is_ok());
    }

    #[test]
    fn generated_keys_encode() {
        let param = SikeParam::get(ParamSet::P503).unwrap();
        let generator = KeyGenerator::<OptimizedEngine>::new(param);
        let mut rng = thread_rng();
        for party in [Party::Alice, Party::Bob] {
            let pair = generator.generate_key_pair(&mut rng, party).unwrap();
            let sk = pair.private.encode();
            assert_eq!(sk.len(), param.private_key_bytes());
            assert_eq!(SidhPrivateKey::decode(param, party, &sk).unwrap(), pair.private);

            let pk = pair.public.encode();
            assert_eq!(pk.len(), param.public_key_bytes());
            assert_eq!(SidhPublicKey::decode(param, party, &pk).unwrap(), pair.public);
            assert!(SidhPublicKey::<crate::fields::FpOpti>::decode(param, party, &pk[1..]).is_err());
        }
    }

    #[test]
    fn debug_hides_secrets() {
        let param = SikeParam::get(ParamSet::P434).unwrap();
        let generator = KeyGenerator::<OptimizedEngine>::new(param);
        let private = generator.generate_private_key(&mut thread_rng(), Party::Bob);
        let shown = format!("{private:?}");
        assert!(!shown.contains(&hex::encode(private.key())));
        assert!(shown.contains("Bob"));
    }
}
