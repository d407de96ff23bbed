#![allow(non_snake_case)]

pub mod curve;
pub mod error;
pub mod fields;
pub mod isogeny;
pub mod keys;
pub mod params;
pub mod sidh;
pub mod sike;
pub mod strategy;
pub mod util;

pub use error::{Result, SikeError};
pub use isogeny::{IsogenyEngine, OptimizedEngine, Party, ReferenceEngine};
pub use keys::{KeyGenerator, KeyPair, SidhPrivateKey, SidhPublicKey};
pub use params::{ParamSet, SikeParam};
pub use sidh::Sidh;
pub use sike::{EncapsulationResult, EncryptedMessage, Sike};
