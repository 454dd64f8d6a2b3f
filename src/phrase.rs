#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! phrase implements functions for moving between a seed plus key creation time and a recovery
//! phrase. A phrase is 15 words of 11 bits each. Read from the first word to the last, the 165
//! bits are:
//!
//! ```text
//! [ version (2) | seed (128) | creation offset (30) | checksum (5) ]
//! ```
//!
//! The checksum is the low 5 bits of the CRC32 (IEEE) of everything before it: version, seed, and
//! creation offset, serialized as a 160 bit big-endian integer (20 bytes). For version 0 this is
//! the same as the 158 bit seed and offset left-padded with zeros. The padding position matters:
//! any other convention produces different checksums and silently incompatible phrases.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::bits::{BitReader, BitWriter};
use crate::dictionary::{decode_indices, decode_words, encode_indices, encode_words};
use crate::error::{Error, Result};
use crate::params::{
    creation_from_offset, creation_offset, epoch_start, CHECKSUM_BIT_COUNT, CHECKSUM_MASK,
    CREATION_OFFSET_BIT_COUNT, MNEMONIC_BIT_COUNT, MNEMONIC_SIZE, PAYLOAD_BIT_COUNT,
    VERSION_BIT_COUNT, VERSION_LATEST,
};
use crate::{Seed, SEED_SIZE};

/// checksum computes the phrase checksum of a version, seed, and creation offset.
pub fn checksum(version: u8, seed: &Seed, offset: u64) -> u32 {
    let mut w = BitWriter::new(VERSION_BIT_COUNT + PAYLOAD_BIT_COUNT);
    w.write_bits(u64::from(version), VERSION_BIT_COUNT);
    w.write_bytes(seed.as_bytes());
    w.write_bits(offset, CREATION_OFFSET_BIT_COUNT);
    crc32fast::hash(&w.finish()) & CHECKSUM_MASK
}

/// encode_payload computes the word indices of the phrase for a seed and creation offset.
fn encode_payload(seed: &Seed, offset: u64) -> Vec<u16> {
    let mut w = BitWriter::new(MNEMONIC_BIT_COUNT);
    w.write_bits(u64::from(VERSION_LATEST), VERSION_BIT_COUNT);
    w.write_bytes(seed.as_bytes());
    w.write_bits(offset, CREATION_OFFSET_BIT_COUNT);
    w.write_bits(u64::from(checksum(VERSION_LATEST, seed, offset)), CHECKSUM_BIT_COUNT);
    encode_indices(&w.finish(), MNEMONIC_BIT_COUNT)
}

/// encode_mnemonic converts a seed and key creation time into a recovery phrase. The creation time
/// is rounded down to the epoch increment, so decoding the phrase returns the rounded time.
pub fn encode_mnemonic(seed: &Seed, creation: DateTime<Utc>) -> Result<Vec<&'static str>> {
    let offset = match creation_offset(creation) {
        Some(offset) => offset,
        None if creation < epoch_start() => return Err(Error::CreationTooEarly),
        None => return Err(Error::CreationTooLate),
    };
    encode_words(&encode_payload(seed, offset))
}

/// encode_phrase is encode_mnemonic with the words joined by single spaces.
pub fn encode_phrase(seed: &Seed, creation: DateTime<Utc>) -> Result<String> {
    Ok(encode_mnemonic(seed, creation)?.join(" "))
}

/// decode_mnemonic decodes a recovery phrase into the embedded seed and key creation time.
///
/// The word count is checked before anything else. Nothing decoded from a phrase is returned
/// unless its checksum verifies.
pub fn decode_mnemonic<S: AsRef<str>>(words: &[S]) -> Result<(Seed, DateTime<Utc>)> {
    if words.len() != MNEMONIC_SIZE {
        return Err(Error::invalid_word_count(words.len()));
    }
    let indices = decode_words(words)?;
    let payload = decode_indices(&indices);

    let mut r = BitReader::new(&payload, MNEMONIC_BIT_COUNT);
    let version = r.read_bits(VERSION_BIT_COUNT) as u8;
    let mut seed_bytes = [0u8; SEED_SIZE];
    r.read_bytes(&mut seed_bytes);
    let seed = Seed::from_bytes(seed_bytes);
    let offset = r.read_bits(CREATION_OFFSET_BIT_COUNT);
    let expected_checksum = r.read_bits(CHECKSUM_BIT_COUNT) as u32;

    if checksum(version, &seed, offset) != expected_checksum {
        debug!("recovery phrase checksum mismatch");
        return Err(Error::InvalidChecksum);
    }
    if version != VERSION_LATEST {
        debug!(version, "recovery phrase has unsupported version");
        return Err(Error::UnsupportedVersion(version));
    }

    let creation = creation_from_offset(offset);
    trace!(%creation, "decoded recovery phrase");
    Ok((seed, creation))
}

/// decode_phrase splits a phrase on whitespace and decodes it with decode_mnemonic.
pub fn decode_phrase(phrase: &str) -> Result<(Seed, DateTime<Utc>)> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    decode_mnemonic(&words)
}

/// valid_phrase will return an error if the phrase is not valid.
pub fn valid_phrase(phrase: &str) -> Result<()> {
    decode_phrase(phrase).map(|_| ())
}
