#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! Test-only key set builder.
//!
//! EchoBuilder stands in for a real OpenPGP builder. It derives a real ed25519 public key per
//! role but serializes its inputs in a plain framing instead of OpenPGP packets. Fingerprints
//! hash the role, creation time, user ID, and public key, so they react to the same inputs a
//! real v4 fingerprint does.
//!
//! Enable with `mnemonikey = { ..., features = ["testkit"] }` in `[dev-dependencies]`.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::keypair::keypair_from_seed;
use crate::keyset::{KeyRole, KeySet, KeySetBuilder, SubkeyType};
use crate::options::KeyOptions;
use crate::{Seed, SEED_SIZE};

/// FINGERPRINT_SIZE matches the length of an OpenPGP v4 fingerprint.
pub const FINGERPRINT_SIZE: usize = 20;

/// EchoBuilder derives EchoKeySets.
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoBuilder;

/// EchoKey is one derived key of an EchoKeySet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EchoKey {
    /// role is the role of the key within its set.
    pub role: KeyRole,
    /// public is the ed25519 public key.
    pub public: [u8; 32],
    /// secret is the ed25519 secret key.
    pub secret: [u8; 32],
}

/// EchoKeySet records everything EchoBuilder was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EchoKeySet {
    /// created_at is the creation time passed to the builder.
    pub created_at: DateTime<Utc>,
    /// user_id is the formatted user ID from the key options.
    pub user_id: String,
    /// expiry is the key expiry from the key options.
    pub expiry: Option<DateTime<Utc>>,
    /// keys holds the master key followed by the requested subkeys.
    pub keys: Vec<EchoKey>,
}

impl KeySetBuilder for EchoBuilder {
    type KeySet = EchoKeySet;

    fn derive(
        &self,
        seed: &[u8; SEED_SIZE],
        creation: DateTime<Utc>,
        options: &KeyOptions,
    ) -> anyhow::Result<EchoKeySet> {
        let seed = Seed::from_bytes(*seed);
        let roles = std::iter::once(KeyRole::Master).chain(
            SubkeyType::ALL
                .into_iter()
                .filter(|t| options.wants_subkey(*t))
                .map(KeyRole::from),
        );
        let keys = roles
            .map(|role| {
                let keypair = keypair_from_seed(&seed, role);
                EchoKey {
                    role,
                    public: keypair.verifying_key().to_bytes(),
                    secret: keypair.to_bytes(),
                }
            })
            .collect();

        Ok(EchoKeySet {
            created_at: creation,
            user_id: options.user_id(),
            expiry: options.expiry,
            keys,
        })
    }
}

fn role_tag(role: KeyRole) -> u8 {
    match role {
        KeyRole::Master => 0,
        KeyRole::Subkey(SubkeyType::Encryption) => 1,
        KeyRole::Subkey(SubkeyType::Authentication) => 2,
        KeyRole::Subkey(SubkeyType::Signing) => 3,
    }
}

impl EchoKeySet {
    fn key(&self, role: KeyRole) -> Option<&EchoKey> {
        self.keys.iter().find(|k| k.role == role)
    }

    fn encode(&self, password: Option<&[u8]>, include_master_secret: bool) -> Vec<u8> {
        let mut out = b"echo".to_vec();
        out.extend_from_slice(&self.created_at.timestamp().to_be_bytes());
        out.extend_from_slice(&(self.user_id.len() as u32).to_be_bytes());
        out.extend_from_slice(self.user_id.as_bytes());
        for key in &self.keys {
            out.push(role_tag(key.role));
            out.extend_from_slice(&key.public);
            if key.role == KeyRole::Master && !include_master_secret {
                out.extend_from_slice(&[0u8; 32]);
            } else {
                out.extend_from_slice(&key.secret);
            }
        }
        if let Some(password) = password {
            out.extend_from_slice(&Sha256::digest(password));
        }
        out
    }
}

impl KeySet for EchoKeySet {
    fn fingerprint(&self, role: KeyRole) -> Option<Vec<u8>> {
        let key = self.key(role)?;
        let mut hasher = Sha256::new();
        hasher.update([role_tag(role)]);
        hasher.update(self.created_at.timestamp().to_be_bytes());
        hasher.update(self.user_id.as_bytes());
        hasher.update(key.public);
        Some(hasher.finalize()[..FINGERPRINT_SIZE].to_vec())
    }

    fn encode_packets(&self, password: Option<&[u8]>) -> anyhow::Result<Vec<u8>> {
        Ok(self.encode(password, true))
    }

    fn encode_subkey_packets(&self, password: Option<&[u8]>) -> anyhow::Result<Vec<u8>> {
        Ok(self.encode(password, false))
    }
}
