//! Deterministic address fabrication.
//!
//! Output only has to look like an address and stay stable for a seed. The
//! mixing is FNV-1a followed by a xorshift stream and has no cryptographic
//! strength.

use heapless::String;

/// Symbols every generated character is drawn from.
pub const HASH_ALPHABET: &[u8; 16] = b"0123456789abcdef";
/// Longest string [`pseudo_hash`] produces; longer requests are capped.
pub const MAX_HASH_LEN: usize = 64;
/// Capacity of a session seed.
pub const SEED_BYTES: usize = 64;

pub type HashString = String<MAX_HASH_LEN>;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const STREAM_STEP: u32 = 0x9e37_79b9;

/// Mixes `seed` and `tag` into `length` characters of [`HASH_ALPHABET`].
pub fn pseudo_hash(seed: &str, tag: &str, length: usize) -> HashString {
    let mut state = fnv1a(FNV_OFFSET, seed.as_bytes());
    state = fnv1a(state, b":");
    state = fnv1a(state, tag.as_bytes());

    let mut out = HashString::new();
    for position in 0..length.min(MAX_HASH_LEN) {
        state = xorshift32(state ^ (position as u32).wrapping_mul(STREAM_STEP));
        let symbol = HASH_ALPHABET[(state >> 28) as usize];
        let _ = out.push(symbol as char);
    }

    out
}

fn fnv1a(mut hash: u32, bytes: &[u8]) -> u32 {
    for &byte in bytes {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn xorshift32(mut x: u32) -> u32 {
    // Zero is a fixed point.
    if x == 0 {
        x = STREAM_STEP;
    }
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_inputs_give_same_output() {
        let a = pseudo_hash("seed-a", "btc", 36);
        let b = pseudo_hash("seed-a", "btc", 36);
        assert_eq!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn tag_separates_namespaces() {
        assert_ne!(
            pseudo_hash("seed-a", "btc", 40),
            pseudo_hash("seed-a", "eth", 40)
        );
        assert_ne!(
            pseudo_hash("seed-a", "eth", 40),
            pseudo_hash("seed-b", "eth", 40)
        );
    }

    #[test]
    fn length_is_capped() {
        assert_eq!(pseudo_hash("s", "t", 500).len(), MAX_HASH_LEN);
        assert!(pseudo_hash("s", "t", 0).is_empty());
    }

    #[test]
    fn empty_seed_still_produces_varied_output() {
        let out = pseudo_hash("", "", 32);
        let first = out.as_bytes()[0];
        assert!(out.bytes().any(|b| b != first));
    }

    proptest! {
        #[test]
        fn output_is_deterministic_and_in_alphabet(
            seed in ".{0,48}",
            tag in "[a-z]{0,8}",
            length in 0usize..80,
        ) {
            let first = pseudo_hash(&seed, &tag, length);
            let second = pseudo_hash(&seed, &tag, length);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), length.min(MAX_HASH_LEN));
            prop_assert!(first.bytes().all(|b| HASH_ALPHABET.contains(&b)));
        }
    }
}
