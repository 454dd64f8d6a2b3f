#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! mnemonikey derives deterministic PGP key sets from a 128 bit seed, and moves between that
//! seed (plus the key creation time) and a 15 word recovery phrase. The phrase together with the
//! user ID used at generation time is enough to regenerate the exact same keys.

pub mod armor;
mod bits;
pub mod dictionary;
pub mod error;
pub mod key;
pub mod keypair;
pub mod keyset;
pub mod options;
pub mod params;
pub mod phrase;
#[cfg(feature = "testkit")]
pub mod testkit;

use std::fmt;

use subtle::ConstantTimeEq;
use userspace_rng::random256;
use zeroize::Zeroize;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::key::Mnemonikey;
pub use crate::keyset::{KeyRole, KeySet, KeySetBuilder, SubkeyType};
pub use crate::options::KeyOptions;

/// SEED_SIZE is the number of bytes in a seed.
pub const SEED_SIZE: usize = params::ENTROPY_BIT_COUNT / 8;

/// Seed holds the 128 bits of entropy that every key in a Mnemonikey is derived from. The seed
/// is not human-friendly and carries no checksum of its own; the recovery phrase adds one.
#[derive(Clone, Eq)]
pub struct Seed([u8; SEED_SIZE]);

impl Seed {
    /// from_bytes wraps 16 bytes of entropy, most significant byte first.
    pub fn from_bytes(bytes: [u8; SEED_SIZE]) -> Self {
        Seed(bytes)
    }

    /// from_u128 builds a seed from its integer value.
    pub fn from_u128(value: u128) -> Self {
        Seed(value.to_be_bytes())
    }

    /// random will generate a new random seed using secure userspace entropy from the
    /// userspace-random crate.
    pub fn random() -> Self {
        let mut rand_bytes = random256();
        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(&rand_bytes[..SEED_SIZE]);
        rand_bytes.zeroize();
        Seed(seed)
    }

    /// as_bytes returns the big-endian seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        &self.0
    }

    /// to_u128 returns the integer value of the seed.
    pub fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }
}

// Seeds are secret, so equality runs in constant time.
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// random_seed will generate a new random seed. It is shorthand for [`Seed::random`].
pub fn random_seed() -> Seed {
    Seed::random()
}
