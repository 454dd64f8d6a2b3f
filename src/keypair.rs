#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! keypair contains helper functions for KeySetBuilder implementations that need per-key secrets
//! derived from a seed. The core never calls them itself: key material is only ever produced by a
//! builder. Each key role gets its own 32 byte secret, expanded from the seed with HKDF-SHA256 and
//! a role specific info string, so no two keys in a set share material.

use ed25519_dalek::SigningKey;
use hkdf::Hkdf;
use sha2::Sha256;

use crate::keyset::{KeyRole, SubkeyType};
use crate::Seed;

/// info returns the HKDF info string for a key role.
fn info(role: KeyRole) -> &'static [u8] {
    match role {
        KeyRole::Master => b"mnemonikey master key",
        KeyRole::Subkey(SubkeyType::Encryption) => b"mnemonikey encryption subkey",
        KeyRole::Subkey(SubkeyType::Authentication) => b"mnemonikey authentication subkey",
        KeyRole::Subkey(SubkeyType::Signing) => b"mnemonikey signing subkey",
    }
}

/// role_secret expands the seed into the 32 byte secret for a key role.
pub fn role_secret(seed: &Seed, role: KeyRole) -> [u8; 32] {
    let hk = Hkdf::<Sha256>::new(None, seed.as_bytes());
    let mut secret = [0u8; 32];
    hk.expand(info(role), &mut secret)
        .expect("32 bytes is a valid HKDF-SHA256 output length");
    secret
}

/// keypair_from_seed produces the ed25519 signing key for a key role from a 16 byte seed.
pub fn keypair_from_seed(seed: &Seed, role: KeyRole) -> SigningKey {
    SigningKey::from_bytes(&role_secret(seed, role))
}
