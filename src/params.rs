#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! params defines the bit budget of the recovery phrase and the epoch that key creation times
//! are measured from. None of these values may change without breaking every existing phrase.

use chrono::{DateTime, Duration, Utc};

use crate::dictionary::BITS_PER_WORD;

/// ENTROPY_BIT_COUNT is the number of bits of entropy in the seed used to derive PGP keys.
pub const ENTROPY_BIT_COUNT: usize = 128;

/// CREATION_OFFSET_BIT_COUNT is the number of bits used to represent a key creation offset.
pub const CREATION_OFFSET_BIT_COUNT: usize = 30;

/// CHECKSUM_BIT_COUNT is the number of bits in the recovery payload reserved for the checksum.
pub const CHECKSUM_BIT_COUNT: usize = 5;

/// VERSION_BIT_COUNT is the number of high-order padding bits in the recovery payload. They
/// are reserved for a format version number.
pub const VERSION_BIT_COUNT: usize = 2;

/// VERSION_LATEST is the only payload version this crate knows how to read.
pub const VERSION_LATEST: u8 = 0;

/// PAYLOAD_BIT_COUNT is the size of the seed followed by the creation offset. The checksum
/// covers these bits plus the version field in front of them.
pub const PAYLOAD_BIT_COUNT: usize = ENTROPY_BIT_COUNT + CREATION_OFFSET_BIT_COUNT;

/// CHECKSUMMED_PAYLOAD_BIT_COUNT is the number of meaningful bits encoded in a phrase.
pub const CHECKSUMMED_PAYLOAD_BIT_COUNT: usize = PAYLOAD_BIT_COUNT + CHECKSUM_BIT_COUNT;

/// MNEMONIC_SIZE is the number of words needed to encode the checksummed payload.
pub const MNEMONIC_SIZE: usize =
    (CHECKSUMMED_PAYLOAD_BIT_COUNT + BITS_PER_WORD - 1) / BITS_PER_WORD;

/// MNEMONIC_BIT_COUNT is the total number of bits carried by a phrase, padding included.
pub const MNEMONIC_BIT_COUNT: usize = MNEMONIC_SIZE * BITS_PER_WORD;

/// CHECKSUM_MASK selects the bits of the CRC32 that are kept as the checksum.
pub const CHECKSUM_MASK: u32 = (1 << CHECKSUM_BIT_COUNT) - 1;

/// MAX_CREATION_OFFSET is the largest creation offset that fits in the payload.
pub const MAX_CREATION_OFFSET: u64 = (1 << CREATION_OFFSET_BIT_COUNT) - 1;

/// EPOCH_START_UNIX is midnight UTC on 2023-01-01, in seconds since the unix epoch. Key
/// creation times are encoded as an offset from this instant.
pub const EPOCH_START_UNIX: i64 = 1_672_531_200;

/// EPOCH_INCREMENT_SECONDS is the granularity of encoded key creation times.
pub const EPOCH_INCREMENT_SECONDS: i64 = 1;

const _: () = assert!(MNEMONIC_SIZE == 15);
const _: () = assert!(MNEMONIC_BIT_COUNT - CHECKSUMMED_PAYLOAD_BIT_COUNT == VERSION_BIT_COUNT);
const _: () = assert!(ENTROPY_BIT_COUNT % 8 == 0);

/// epoch_start returns EPOCH_START_UNIX as a UTC timestamp.
pub fn epoch_start() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(EPOCH_START_UNIX, 0).expect("epoch start is in range")
}

/// epoch_increment returns EPOCH_INCREMENT_SECONDS as a duration.
pub fn epoch_increment() -> Duration {
    Duration::seconds(EPOCH_INCREMENT_SECONDS)
}

/// max_creation_time is the farthest point in the future that a recovery phrase can represent
/// a key creation time for.
pub fn max_creation_time() -> DateTime<Utc> {
    creation_from_offset(MAX_CREATION_OFFSET)
}

/// creation_offset returns the number of whole increments between the epoch start and the given
/// time, rounded down. Returns None if the time cannot be represented.
pub fn creation_offset(creation: DateTime<Utc>) -> Option<u64> {
    if creation < epoch_start() || creation > max_creation_time() {
        return None;
    }
    let elapsed = (creation - epoch_start()).num_seconds();
    Some((elapsed / EPOCH_INCREMENT_SECONDS) as u64)
}

/// creation_from_offset is the inverse of creation_offset for already-quantized times. The offset
/// is masked to CREATION_OFFSET_BIT_COUNT bits.
pub fn creation_from_offset(offset: u64) -> DateTime<Utc> {
    let offset = (offset & MAX_CREATION_OFFSET) as i64;
    epoch_start() + Duration::seconds(offset * EPOCH_INCREMENT_SECONDS)
}

/// quantize rounds a representable creation time down to the nearest increment boundary.
pub fn quantize(creation: DateTime<Utc>) -> Option<DateTime<Utc>> {
    creation_offset(creation).map(creation_from_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn check_epoch_start() {
        assert_eq!(epoch_start(), Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn check_max_creation_time() {
        let expected = epoch_start() + Duration::seconds((1i64 << 30) - 1);
        assert_eq!(max_creation_time(), expected);
        assert_eq!(creation_offset(max_creation_time()), Some(MAX_CREATION_OFFSET));
        assert_eq!(creation_offset(max_creation_time() + epoch_increment()), None);
    }

    #[test]
    fn check_creation_offset_floors() {
        assert_eq!(creation_offset(epoch_start()), Some(0));
        assert_eq!(creation_offset(epoch_start() + Duration::milliseconds(999)), Some(0));
        assert_eq!(creation_offset(epoch_start() + Duration::milliseconds(1001)), Some(1));
        assert_eq!(creation_offset(epoch_start() - Duration::nanoseconds(1)), None);

        let time = epoch_start() + Duration::seconds(86_400) + Duration::milliseconds(250);
        assert_eq!(quantize(time), Some(epoch_start() + Duration::seconds(86_400)));
    }
}
