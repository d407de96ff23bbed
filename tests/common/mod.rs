use rand_core::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};
use sike_rs::ParamSet;

/// Deterministic byte stream for the known answer tests: SHAKE256 of
/// "sike-rs kat <set>", read in order.
pub struct ShakeRng {
    reader: Shake256Reader,
}

impl ShakeRng {
    pub fn new(set: ParamSet) -> Self {
        let mut hasher = Shake256::default();
        let short = set.name()[4..].to_ascii_lowercase();
        hasher.update(format!("sike-rs kat {short}").as_bytes());
        ShakeRng {
            reader: hasher.finalize_xof(),
        }
    }
}

impl RngCore for ShakeRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.reader.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ShakeRng {}
