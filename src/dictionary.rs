#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! dictionary moves between words, word indices, and packed bit buffers. The word list is the
//! 2048 word BIP-39 English list, so every word carries 11 bits.

use bip39::Language;

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// LANGUAGE is the word list that recovery phrases are written in.
const LANGUAGE: Language = Language::English;

/// BITS_PER_WORD is the number of bits encoded by a single word.
pub const BITS_PER_WORD: usize = 11;

/// DICTIONARY_SIZE is the number of words in the dictionary.
pub const DICTIONARY_SIZE: usize = 1 << BITS_PER_WORD;

/// word_list returns the full dictionary, ordered by index.
pub fn word_list() -> &'static [&'static str; DICTIONARY_SIZE] {
    LANGUAGE.word_list()
}

/// encode_indices splits the low bit_count bits of a left-padded big-endian buffer into word
/// indices, most significant word first. If bit_count is not a multiple of BITS_PER_WORD the
/// first word is padded with zero bits.
pub fn encode_indices(bytes: &[u8], bit_count: usize) -> Vec<u16> {
    let word_count = (bit_count + BITS_PER_WORD - 1) / BITS_PER_WORD;
    let total_bits = word_count * BITS_PER_WORD;

    let mut source = BitReader::new(bytes, bit_count);
    let mut padded = BitWriter::new(total_bits);
    padded.write_bits(0, total_bits - bit_count);
    while source.remaining() > 0 {
        let width = source.remaining().min(64);
        padded.write_bits(source.read_bits(width), width);
    }
    let padded = padded.finish();

    let mut reader = BitReader::new(&padded, total_bits);
    (0..word_count)
        .map(|_| reader.read_bits(BITS_PER_WORD) as u16)
        .collect()
}

/// decode_indices packs word indices back into a buffer of `indices.len() * BITS_PER_WORD`
/// bits, left-padded to whole bytes. Index bits above BITS_PER_WORD are ignored.
pub fn decode_indices(indices: &[u16]) -> Vec<u8> {
    let mut w = BitWriter::new(indices.len() * BITS_PER_WORD);
    for index in indices {
        w.write_bits(u64::from(*index), BITS_PER_WORD);
    }
    w.finish()
}

/// encode_words converts word indices into dictionary words.
pub fn encode_words(indices: &[u16]) -> Result<Vec<&'static str>> {
    let words = word_list();
    indices
        .iter()
        .map(|&index| {
            words
                .get(usize::from(index))
                .copied()
                .ok_or(Error::IndexOutOfRange(index))
        })
        .collect()
}

/// decode_words converts words into their dictionary indices. Matching ignores case and
/// surrounding whitespace.
pub fn decode_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<u16>> {
    words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            let normalized = word.as_ref().trim().to_lowercase();
            LANGUAGE
                .find_word(&normalized)
                .ok_or_else(|| Error::UnknownWord {
                    position,
                    word: word.as_ref().to_string(),
                })
        })
        .collect()
}
