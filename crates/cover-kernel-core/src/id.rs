//! Identifier generation.
//!
//! Identifiers take the form `<tag>_<millis>_<suffix>` where `suffix` is
//! [`SUFFIX_LEN`] lowercase base-36 characters. Tags are restricted to ASCII
//! alphanumerics so the separator can never appear inside one.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, Result};

/// Separator between identifier components.
pub const ID_SEPARATOR: char = '_';

/// Length of the random base-36 suffix.
pub const SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A validated identifier namespace tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdTag(String);

impl IdTag {
    /// Validate and wrap a tag.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    /// Tag for locally simulated records.
    pub fn demo() -> Self {
        Self("demo".to_string())
    }

    /// Tag for fallback identifiers of chain-backed records.
    pub fn object() -> Self {
        Self("obj".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct GeneratorState {
    rng: StdRng,
    last: Option<String>,
}

/// Generates session-unique record identifiers.
///
/// Consecutive identifiers from the same generator never repeat: when the
/// millisecond and the drawn suffix both match the previous identifier, a new
/// suffix is drawn.
pub struct IdGenerator {
    state: Mutex<GeneratorState>,
}

impl IdGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(GeneratorState { rng, last: None }),
        }
    }

    /// Produce an identifier for `tag` at `millis`.
    pub fn generate(&self, tag: &IdTag, millis: i64) -> String {
        // A poisoned lock only means another caller panicked mid-draw; the
        // rng and last id are still usable.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        loop {
            let suffix = random_suffix(&mut state.rng);
            let id = format!("{tag}{ID_SEPARATOR}{millis}{ID_SEPARATOR}{suffix}");
            if state.last.as_deref() != Some(id.as_str()) {
                state.last = Some(id.clone());
                return id;
            }
        }
    }

    /// Split an identifier into `(tag, millis, suffix)`.
    ///
    /// Returns `None` for strings that were not produced by a generator,
    /// such as transaction digests.
    pub fn split(id: &str) -> Option<(&str, i64, &str)> {
        let mut parts = id.split(ID_SEPARATOR);
        let tag = parts.next()?;
        let millis = parts.next()?;
        let suffix = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        if millis.is_empty() || !millis.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if suffix.len() < 6 || !suffix.bytes().all(|b| BASE36.contains(&b)) {
            return None;
        }
        Some((tag, millis.parse().ok()?, suffix))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

fn random_suffix(rng: &mut StdRng) -> String {
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tag_validation() {
        assert!(IdTag::new("demo").is_ok());
        assert!(IdTag::new("obj2").is_ok());
        assert_eq!(IdTag::new(""), Err(CoreError::InvalidTag(String::new())));
        assert!(IdTag::new("de_mo").is_err());
        assert!(IdTag::new("démo").is_err());
    }

    #[test]
    fn test_generate_shape() {
        let generator = IdGenerator::seeded(7);
        let id = generator.generate(&IdTag::demo(), 1_700_000_000_123);

        let (tag, millis, suffix) = IdGenerator::split(&id).unwrap();
        assert_eq!(tag, "demo");
        assert_eq!(millis, 1_700_000_000_123);
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }

    #[test]
    fn test_same_millisecond_never_repeats() {
        let generator = IdGenerator::seeded(42);
        let tag = IdTag::demo();

        let mut prev = generator.generate(&tag, 1000);
        for _ in 0..1000 {
            let next = generator.generate(&tag, 1000);
            assert_ne!(prev, next);
            prev = next;
        }
    }

    #[test]
    fn test_split_rejects_digests() {
        assert!(IdGenerator::split("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin").is_none());
        assert!(IdGenerator::split("demo_12_ab").is_none());
        assert!(IdGenerator::split("demo_x1_abcdefghi").is_none());
        assert!(IdGenerator::split("demo_1_abcdefghi_extra").is_none());
    }

    proptest! {
        #[test]
        fn test_generated_ids_parse(seed in any::<u64>(), millis in 0i64..=i64::MAX) {
            let generator = IdGenerator::seeded(seed);
            let id = generator.generate(&IdTag::object(), millis);
            let (tag, parsed, _) = IdGenerator::split(&id).unwrap();
            prop_assert_eq!(tag, "obj");
            prop_assert_eq!(parsed, millis);
        }
    }
}
