//! SIKE key encapsulation on top of SIDH.
//!
//! Bob holds the static key pair. Encapsulation runs Alice's side with an ephemeral
//! scalar derived from the message, decapsulation re-encrypts to check the ciphertext
//! and falls back to the secret `s` when the check fails (implicit rejection).
//! G, F and H are all SHAKE256.
use crate::error::{Result, SikeError};
use crate::fields::FpElement;
use crate::isogeny::{IsogenyEngine, Party};
use crate::keys::{SidhPrivateKey, SidhPublicKey};
use crate::params::SikeParam;
use crate::util::{conditional_select_bytes, ct_equal};
use log::debug;
use rand_core::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

fn shake256(parts: &[&[u8]], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    let mut out = vec![0u8; len];
    hasher.finalize_xof().read(&mut out);
    out
}

/// Ciphertext: Alice's ephemeral public key c0 and the masked message c1
#[derive(Clone, Debug)]
pub struct EncryptedMessage<E: FpElement> {
    c0: SidhPublicKey<E>,
    c1: Vec<u8>,
}

impl<E: FpElement> EncryptedMessage<E> {
    pub fn new(c0: SidhPublicKey<E>, c1: Vec<u8>) -> Result<Self> {
        if c0.party() != Party::Alice {
            return Err(SikeError::PartyMismatch {
                expected: Party::Alice,
                actual: c0.party(),
            });
        }
        if c1.len() != c0.param().msg_bytes {
            return Err(SikeError::InvalidLength {
                what: "ciphertext",
                expected: c0.param().msg_bytes,
                actual: c1.len(),
            });
        }
        Ok(EncryptedMessage { c0, c1 })
    }

    pub fn c0(&self) -> &SidhPublicKey<E> {
        &self.c0
    }

    pub fn c1(&self) -> &[u8] {
        &self.c1
    }

    /// Encoded as c0 || c1
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.c0.encode();
        out.extend_from_slice(&self.c1);
        out
    }

    pub fn decode(param: &'static SikeParam, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != param.ciphertext_bytes() {
            return Err(SikeError::InvalidLength {
                what: "encrypted message",
                expected: param.ciphertext_bytes(),
                actual: bytes.len(),
            });
        }
        let (c0, c1) = bytes.split_at(param.public_key_bytes());
        let c0 = SidhPublicKey::decode(param, Party::Alice, c0)?;
        EncryptedMessage::new(c0, c1.to_vec())
    }
}

impl<E: FpElement> ConstantTimeEq for EncryptedMessage<E> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        ct_equal(&self.encode(), &other.encode())
    }
}

impl<E: FpElement> PartialEq for EncryptedMessage<E> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

pub struct EncapsulationResult<E: FpElement> {
    pub secret: Vec<u8>,
    pub message: EncryptedMessage<E>,
}

pub struct Sike<I: IsogenyEngine> {
    engine: I,
}

impl<I: IsogenyEngine> Sike<I> {
    pub fn new(param: &'static SikeParam) -> Self {
        Sike {
            engine: I::new(param),
        }
    }

    /// G: Alice's ephemeral scalar from the message and Bob's public key
    fn ephemeral_scalar(&self, m: &[u8], public: &[u8]) -> Vec<u8> {
        let param = self.engine.param();
        let mut r = shake256(&[m, public], param.key_bytes_a);
        r[param.key_bytes_a - 1] &= param.mask_a;
        r
    }

    /// c0 and c1 for message `m` under Bob's public key
    fn encrypt(&self, m: &[u8], public: &SidhPublicKey<I::Field>) -> Result<EncryptedMessage<I::Field>> {
        let param = self.engine.param();
        let mut r = self.ephemeral_scalar(m, &public.encode());
        let c0 = SidhPublicKey::new(param, Party::Alice, self.engine.iso_gen_2(&r));
        let j = self.engine.iso_ex_2(&r, public.points());
        r.zeroize();

        let mask = shake256(&[&j.encode()[..]], param.msg_bytes);
        let c1 = mask.iter().zip(m).map(|(a, b)| a ^ b).collect();
        EncryptedMessage::new(c0, c1)
    }

    fn check_key(&self, public: &SidhPublicKey<I::Field>) -> Result<()> {
        if !std::ptr::eq(public.param(), self.engine.param()) {
            return Err(SikeError::InvalidParameter(format!(
                "public key does not belong to {}",
                self.engine.param().name
            )));
        }
        if public.party() != Party::Bob {
            return Err(SikeError::PartyMismatch {
                expected: Party::Bob,
                actual: public.party(),
            });
        }
        Ok(())
    }

    /// Draws a random message and returns the shared key with its encapsulation
    pub fn encapsulate<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        public: &SidhPublicKey<I::Field>,
    ) -> Result<EncapsulationResult<I::Field>> {
        self.check_key(public)?;
        let param = self.engine.param();

        let mut m = vec![0u8; param.msg_bytes];
        rng.fill_bytes(&mut m);
        let message = self.encrypt(&m, public)?;
        let secret = shake256(&[&m[..], &message.encode()[..]], param.crypto_bytes);
        m.zeroize();

        debug!("{}: encapsulated a shared key", param.name);
        Ok(EncapsulationResult { secret, message })
    }

    /// Recovers the shared key. A ciphertext that does not re-encrypt to itself yields
    /// H(s || ciphertext) instead, along the same code path.
    pub fn decapsulate(
        &self,
        private: &SidhPrivateKey,
        public: &SidhPublicKey<I::Field>,
        message: &EncryptedMessage<I::Field>,
    ) -> Result<Vec<u8>> {
        self.check_key(public)?;
        let param = self.engine.param();
        if !std::ptr::eq(private.param(), param) || !std::ptr::eq(message.c0().param(), param) {
            return Err(SikeError::InvalidParameter(format!(
                "key or ciphertext does not belong to {}",
                param.name
            )));
        }
        if private.party() != Party::Bob {
            return Err(SikeError::PartyMismatch {
                expected: Party::Bob,
                actual: private.party(),
            });
        }

        let j = self.engine.iso_ex_3(private.key(), message.c0().points());
        let mask = shake256(&[&j.encode()[..]], param.msg_bytes);
        let mut m: Vec<u8> = mask.iter().zip(message.c1()).map(|(a, b)| a ^ b).collect();

        let reencrypted = self.encrypt(&m, public)?;
        let valid = ct_equal(&reencrypted.c0().encode(), &message.c0().encode());
        let mut prefix = conditional_select_bytes(private.s(), &m, valid);
        let secret = shake256(&[&prefix[..], &message.encode()[..]], param.crypto_bytes);
        m.zeroize();
        prefix.zeroize();
        Ok(secret)
    }
}
