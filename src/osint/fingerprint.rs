// src/osint/fingerprint.rs
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// How a target string is turned into a selection seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// `length + first code unit`, both measured in UTF-16 code units.
    /// Matches the values existing clients were built against.
    #[default]
    Legacy,
    /// 32-bit FNV-1a over the UTF-8 bytes of the whole string.
    Fnv1a,
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashStrategy::Legacy => write!(f, "legacy"),
            HashStrategy::Fnv1a => write!(f, "fnv1a"),
        }
    }
}

impl FromStr for HashStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(HashStrategy::Legacy),
            "fnv1a" | "fnv" | "fnv-1a" => Ok(HashStrategy::Fnv1a),
            other => Err(format!("Unknown fingerprint strategy: {}", other)),
        }
    }
}

/// Small deterministic seed derived from a target string.
///
/// Not random and not collision resistant: it only guarantees that the same
/// input always selects the same fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Legacy fingerprint of a single string. `None` for an empty string.
    #[cfg(test)]
    pub fn of(input: &str) -> Option<Self> {
        Self::with_strategy(input, HashStrategy::Legacy)
    }

    pub fn with_strategy(input: &str, strategy: HashStrategy) -> Option<Self> {
        let mut units = input.encode_utf16();
        let first = units.next()?;

        match strategy {
            HashStrategy::Legacy => {
                let length = 1 + units.count() as u64;
                Some(Self(length + u64::from(first)))
            }
            HashStrategy::Fnv1a => Some(Self(u64::from(fnv1a(FNV_OFFSET_BASIS, input.as_bytes())))),
        }
    }

    /// Fingerprint over two strings, used where a report depends on a pair
    /// (file name and file type). Both must be non-empty.
    pub fn of_pair(first: &str, second: &str, strategy: HashStrategy) -> Option<Self> {
        if first.is_empty() || second.is_empty() {
            return None;
        }

        match strategy {
            HashStrategy::Legacy => {
                let length = first.encode_utf16().count() + second.encode_utf16().count();
                Some(Self(length as u64))
            }
            HashStrategy::Fnv1a => {
                let partial = fnv1a(FNV_OFFSET_BASIS, first.as_bytes());
                Some(Self(u64::from(fnv1a(partial, second.as_bytes()))))
            }
        }
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// The seed shifted by `offset`, as used for the i-th pick of a report.
    pub fn offset(self, offset: u64) -> u64 {
        self.0 + offset
    }

    /// Index into a table of `len` entries for the pick at `offset`.
    pub fn index(self, offset: u64, len: usize) -> usize {
        (self.offset(offset) % len as u64) as usize
    }

    /// Entry of a static fixture table for the pick at `offset`.
    /// The table must not be empty.
    pub fn pick<T>(self, offset: u64, table: &[T]) -> &T {
        &table[self.index(offset, table.len())]
    }
}

fn fnv1a(mut hash: u32, bytes: &[u8]) -> u32 {
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_is_length_plus_first_char_code() {
        // 'g' is 103 and "google.com" has 10 characters
        assert_eq!(Fingerprint::of("google.com").map(Fingerprint::value), Some(113));
        assert_eq!(Fingerprint::of("a").map(Fingerprint::value), Some(98));
        assert_eq!(Fingerprint::of("test@test.com").map(Fingerprint::value), Some(13 + 116));
    }

    #[test]
    fn legacy_counts_utf16_code_units() {
        // U+1F600 is a surrogate pair: length 2, first unit 0xD83D
        assert_eq!(Fingerprint::of("😀").map(Fingerprint::value), Some(2 + 0xD83D));
        assert_eq!(Fingerprint::of("é").map(Fingerprint::value), Some(1 + 0xE9));
    }

    #[test]
    fn empty_input_has_no_fingerprint() {
        assert_eq!(Fingerprint::of(""), None);
        assert_eq!(Fingerprint::with_strategy("", HashStrategy::Fnv1a), None);
        assert_eq!(Fingerprint::of_pair("", "jpg", HashStrategy::Legacy), None);
        assert_eq!(Fingerprint::of_pair("photo", "", HashStrategy::Legacy), None);
    }

    #[test]
    fn legacy_collides_on_anagrams_but_fnv_does_not() {
        assert_eq!(Fingerprint::of("ab"), Fingerprint::of("ac"));
        assert_ne!(
            Fingerprint::with_strategy("ab", HashStrategy::Fnv1a),
            Fingerprint::with_strategy("ac", HashStrategy::Fnv1a)
        );
    }

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(
            Fingerprint::with_strategy("a", HashStrategy::Fnv1a).map(Fingerprint::value),
            Some(0xe40c_292c)
        );
        assert_eq!(
            Fingerprint::with_strategy("foobar", HashStrategy::Fnv1a).map(Fingerprint::value),
            Some(0xbf9c_f968)
        );
    }

    #[test]
    fn pair_fingerprint_sums_lengths() {
        let fp = Fingerprint::of_pair("photo.jpg", "jpg", HashStrategy::Legacy);
        assert_eq!(fp.map(Fingerprint::value), Some(12));

        let split = Fingerprint::of_pair("foo", "bar", HashStrategy::Fnv1a);
        assert_eq!(split, Fingerprint::with_strategy("foobar", HashStrategy::Fnv1a));
    }

    #[test]
    fn pick_wraps_around_the_table() {
        let table = ["a", "b", "c"];
        let fp = Fingerprint::of("xy").unwrap(); // 2 + 120 = 122
        assert_eq!(fp.index(0, table.len()), 122 % 3);
        assert_eq!(*fp.pick(1, &table), table[123 % 3]);
    }

    #[test]
    fn strategy_parses_from_config_strings() {
        assert_eq!("legacy".parse::<HashStrategy>(), Ok(HashStrategy::Legacy));
        assert_eq!(" FNV1A ".parse::<HashStrategy>(), Ok(HashStrategy::Fnv1a));
        assert!("md5".parse::<HashStrategy>().is_err());
        assert_eq!(HashStrategy::Fnv1a.to_string(), "fnv1a");
    }
}
