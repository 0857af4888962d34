use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Number of symbols in a generated identifier.
pub const ID_LENGTH: usize = 10;

/// Symbols identifiers are drawn from.
pub const ID_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Opaque identifier of a task.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TaskId(String);

impl TaskId {
    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("task id must not be empty")]
pub struct ParseTaskIdError;

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTaskIdError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl Serialize for TaskId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of fresh task identifiers.
///
/// Generators only promise a low collision probability; the store is the
/// one that checks uniqueness.
pub trait IdGenerator {
    /// Produce the next candidate identifier.
    fn generate(&mut self) -> TaskId;
}

/// Uniformly random alphanumeric identifiers of [`ID_LENGTH`] symbols.
#[derive(Debug, Clone)]
pub struct AlphanumericIds<R = ThreadRng> {
    rng: R,
}

impl AlphanumericIds<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for AlphanumericIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphanumericIds<StdRng> {
    /// Deterministic generator, handy for reproducible tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IdGenerator for AlphanumericIds<R> {
    fn generate(&mut self) -> TaskId {
        let id = (0..ID_LENGTH)
            .map(|_| char::from(ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        TaskId(id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_alphanumeric_and_fixed_length() {
        let mut ids = AlphanumericIds::new();
        for _ in 0..200 {
            let id = ids.generate();
            assert_eq!(id.as_str().len(), ID_LENGTH);
            assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut a = AlphanumericIds::seeded(7);
        let mut b = AlphanumericIds::seeded(7);
        let left: Vec<_> = (0..5).map(|_| a.generate()).collect();
        let right: Vec<_> = (0..5).map(|_| b.generate()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn random_ids_rarely_repeat() {
        let mut ids = AlphanumericIds::seeded(42);
        let seen: HashSet<_> = (0..1_000).map(|_| ids.generate()).collect();
        assert_eq!(seen.len(), 1_000);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<TaskId>(), Err(ParseTaskIdError));
        let id: TaskId = "abc".parse().unwrap();
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn task_id_serializes_as_plain_string() {
        let id: TaskId = "Ab3xYz9Q01".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Ab3xYz9Q01\"");
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<TaskId>("\"\"").is_err());
    }
}
