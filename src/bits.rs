#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! bits implements a fixed-width bit buffer. A buffer of `bit_len` bits is stored big-endian in
//! the minimum number of whole bytes, with the unused high-order bits of the first byte left as
//! zero. Fields are written and read most significant bit first, so leading zero bits in a field
//! are always kept.

/// BitWriter appends bit fields to a fixed-width buffer.
pub struct BitWriter {
    bytes: Vec<u8>,
    cursor: usize,
}

impl BitWriter {
    /// new creates a writer for a buffer of exactly bit_len bits.
    pub fn new(bit_len: usize) -> Self {
        let byte_len = (bit_len + 7) / 8;
        BitWriter {
            bytes: vec![0u8; byte_len],
            cursor: byte_len * 8 - bit_len,
        }
    }

    /// write_bits appends the low `width` bits of value. Higher bits of value are ignored.
    pub fn write_bits(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64);
        debug_assert!(self.cursor + width <= self.bytes.len() * 8);
        for i in (0..width).rev() {
            if (value >> i) & 1 == 1 {
                self.bytes[self.cursor / 8] |= 0x80 >> (self.cursor % 8);
            }
            self.cursor += 1;
        }
    }

    /// write_bytes appends every bit of data.
    pub fn write_bytes(&mut self, data: &[u8]) {
        for byte in data {
            self.write_bits(u64::from(*byte), 8);
        }
    }

    /// finish returns the padded buffer. Bits that were never written stay zero.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// BitReader takes bit fields from a fixed-width buffer in the order a BitWriter wrote them.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// new reads the low bit_len bits of bytes. bit_len must not exceed the buffer size.
    pub fn new(bytes: &'a [u8], bit_len: usize) -> Self {
        debug_assert!(bit_len <= bytes.len() * 8);
        BitReader {
            bytes,
            cursor: bytes.len() * 8 - bit_len,
        }
    }

    /// remaining is the number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.cursor
    }

    /// read_bits takes the next `width` bits as an integer.
    pub fn read_bits(&mut self, width: usize) -> u64 {
        debug_assert!(width <= 64);
        debug_assert!(width <= self.remaining());
        let mut value = 0u64;
        for _ in 0..width {
            let bit = (self.bytes[self.cursor / 8] >> (7 - self.cursor % 8)) & 1;
            value = (value << 1) | u64::from(bit);
            self.cursor += 1;
        }
        value
    }

    /// read_bytes fills dest with the next `dest.len() * 8` bits.
    pub fn read_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.read_bits(8) as u8;
        }
    }
}
