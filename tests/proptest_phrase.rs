use chrono::Duration;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

use mnemonikey::dictionary::word_list;
use mnemonikey::params::{epoch_start, MAX_CREATION_OFFSET, MNEMONIC_SIZE};
use mnemonikey::phrase::{decode_mnemonic, encode_mnemonic};
use mnemonikey::testkit::EchoBuilder;
use mnemonikey::{ErrorKind, KeyOptions, Mnemonikey, Seed};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn phrase_roundtrip(
        seed in any::<u128>(),
        offset in 0..=MAX_CREATION_OFFSET as i64,
        nanos in 0..1_000_000_000i64,
    ) {
        let boundary = epoch_start() + Duration::seconds(offset);
        let creation = boundary + Duration::nanoseconds(nanos);
        // Sub-second precision past the last representable second is out of range.
        prop_assume!(offset < MAX_CREATION_OFFSET as i64 || nanos == 0);

        let words = encode_mnemonic(&Seed::from_u128(seed), creation).unwrap();
        prop_assert_eq!(words.len(), MNEMONIC_SIZE);

        let (decoded_seed, decoded_creation) = decode_mnemonic(&words).unwrap();
        prop_assert_eq!(decoded_seed.to_u128(), seed);
        prop_assert_eq!(decoded_creation, boundary);
    }

    #[test]
    fn mnemonikey_reencodes_to_same_phrase(
        seed in any::<u128>(),
        offset in 0..=MAX_CREATION_OFFSET as i64,
    ) {
        let creation = epoch_start() + Duration::seconds(offset);
        let opts = KeyOptions::new().with_name("prop");
        let mnk = Mnemonikey::new(&EchoBuilder, Seed::from_u128(seed), creation, &opts).unwrap();
        let words = mnk.encode_mnemonic().unwrap();

        let recovered = Mnemonikey::recover(&EchoBuilder, &words, &opts).unwrap();
        prop_assert_eq!(recovered.seed(), mnk.seed());
        prop_assert_eq!(recovered.created_at(), mnk.created_at());
        prop_assert_eq!(recovered.fingerprint(), mnk.fingerprint());
        prop_assert_eq!(recovered.encode_mnemonic().unwrap(), words);
    }

    #[test]
    fn wrong_word_count_never_reaches_checksum(
        seed in any::<u128>(),
        drop_word in any::<bool>(),
    ) {
        let mut words = encode_mnemonic(&Seed::from_u128(seed), epoch_start()).unwrap();
        if drop_word {
            words.pop();
        } else {
            // A word that is not in the dictionary must not change the outcome.
            words.push("notaword");
        }
        let err = decode_mnemonic(&words).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidWordCount);
    }
}

// Moving any one word to its neighbour in the dictionary corrupts the payload, which the
// checksum catches about 31 times out of 32.
#[test]
fn checksum_catches_most_adjacent_word_substitutions() {
    let dictionary = word_list();
    let mut runner = TestRunner::deterministic();
    let strategy = (any::<u128>(), 0..=MAX_CREATION_OFFSET as i64, 0..MNEMONIC_SIZE);

    let mut detected = 0u32;
    let trials = 2000u32;
    for _ in 0..trials {
        let (seed, offset, position) = strategy.new_tree(&mut runner).unwrap().current();
        let creation = epoch_start() + Duration::seconds(offset);
        let words = encode_mnemonic(&Seed::from_u128(seed), creation).unwrap();

        let index = dictionary.iter().position(|w| *w == words[position]).unwrap();
        let mut mutated = words.clone();
        mutated[position] = dictionary[(index + 1) % dictionary.len()];
        match decode_mnemonic(&mutated) {
            Err(e) => {
                // Only a carry out of the first word's seed bits can reach the version field,
                // and then the checksum still has to agree before the version is looked at.
                let carried_into_version = position == 0 && index % 512 == 511;
                assert!(
                    e.kind() == ErrorKind::InvalidChecksum
                        || (carried_into_version && e.kind() == ErrorKind::UnsupportedVersion)
                );
                detected += 1;
            }
            Ok((decoded, decoded_creation)) => {
                // Even an undetected substitution decodes to something other than the original.
                assert!(decoded.to_u128() != seed || decoded_creation != creation);
            }
        }
    }
    assert!(
        detected * 100 >= trials * 90,
        "only {} of {} substitutions detected",
        detected,
        trials
    );
}
