#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! keyset is the boundary between this crate and whatever constructs the actual OpenPGP packets.
//! A KeySetBuilder turns a seed, a creation time, and key options into a KeySet; a KeySet knows
//! its fingerprints and how to serialize itself.
//!
//! Builders must be fully deterministic in their inputs. The creation time is hashed into every
//! PGP fingerprint, so the same seed with a different creation time or user ID is a different,
//! equally valid looking key.

use chrono::{DateTime, Utc};

use crate::options::KeyOptions;
use crate::SEED_SIZE;

/// SubkeyType is a flavor of subkey: encryption, authentication, or signing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubkeyType {
    /// An encryption subkey.
    Encryption,
    /// An authentication subkey.
    Authentication,
    /// A signing subkey.
    Signing,
}

impl SubkeyType {
    /// ALL lists every subkey type in the order they are attached to a key.
    pub const ALL: [SubkeyType; 3] = [
        SubkeyType::Encryption,
        SubkeyType::Authentication,
        SubkeyType::Signing,
    ];

    /// name returns the lowercase name of the subkey type.
    pub fn name(self) -> &'static str {
        match self {
            SubkeyType::Encryption => "encryption",
            SubkeyType::Authentication => "authentication",
            SubkeyType::Signing => "signing",
        }
    }
}

/// KeyRole identifies one key within a key set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyRole {
    /// The master certification key.
    Master,
    /// One of the subkeys.
    Subkey(SubkeyType),
}

impl From<SubkeyType> for KeyRole {
    fn from(subkey: SubkeyType) -> Self {
        KeyRole::Subkey(subkey)
    }
}

/// KeySet is a derived set of PGP keys.
pub trait KeySet {
    /// fingerprint returns the fingerprint of the key with the given role, or None if the key
    /// set does not contain such a key.
    fn fingerprint(&self, role: KeyRole) -> Option<Vec<u8>>;

    /// encode_packets serializes the whole key set as binary OpenPGP packets, encrypting the
    /// private key material with password if one is given.
    fn encode_packets(&self, password: Option<&[u8]>) -> anyhow::Result<Vec<u8>>;

    /// encode_subkey_packets serializes the subkeys with private key material and the master key
    /// as a private key stub. No master self-certification is included.
    fn encode_subkey_packets(&self, password: Option<&[u8]>) -> anyhow::Result<Vec<u8>>;
}

/// KeySetBuilder derives a KeySet. Identical inputs must always produce identical key material
/// and fingerprints.
pub trait KeySetBuilder {
    /// KeySet is the type of key set this builder produces.
    type KeySet: KeySet;

    /// derive builds the key set for a seed and an already quantized creation time.
    fn derive(
        &self,
        seed: &[u8; SEED_SIZE],
        creation: DateTime<Utc>,
        options: &KeyOptions,
    ) -> anyhow::Result<Self::KeySet>;
}

impl<B: KeySetBuilder + ?Sized> KeySetBuilder for &B {
    type KeySet = B::KeySet;

    fn derive(
        &self,
        seed: &[u8; SEED_SIZE],
        creation: DateTime<Utc>,
        options: &KeyOptions,
    ) -> anyhow::Result<Self::KeySet> {
        (**self).derive(seed, creation, options)
    }
}
