use alloc::string::{String, ToString};

use crate::*;

/// Storage key the attempt count lives under.
pub const ATTEMPTS_KEY: &str = "slotAttempts";

/// A single durable string slot.
pub trait AttemptSlot {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str) -> Result<()>;
}

/// Parses a stored count the lenient way: leading whitespace and a `+` sign
/// are skipped and the leading run of digits is used. Negative, empty or
/// overflowing values are rejected.
pub fn parse_attempts(raw: &str) -> Option<AttemptCount> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

pub fn encode_attempts(count: AttemptCount) -> String {
    count.to_string()
}

/// In-memory slot, used for tests and headless runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl AttemptSlot for MemorySlot {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) -> Result<()> {
        self.value = Some(value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_attempts("0"), Some(0));
        assert_eq!(parse_attempts("7"), Some(7));
        assert_eq!(parse_attempts("  12"), Some(12));
        assert_eq!(parse_attempts("+4"), Some(4));
    }

    #[test]
    fn uses_leading_digits_only() {
        assert_eq!(parse_attempts("12abc"), Some(12));
        assert_eq!(parse_attempts("3.9"), Some(3));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_attempts(""), None);
        assert_eq!(parse_attempts("abc"), None);
        assert_eq!(parse_attempts("-3"), None);
        assert_eq!(parse_attempts("+"), None);
        assert_eq!(parse_attempts("99999999999999999999"), None);
    }

    #[test]
    fn memory_slot_starts_empty() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.get(), None);
        slot.set(&encode_attempts(5)).unwrap();
        assert_eq!(slot.value(), Some("5"));
    }
}
