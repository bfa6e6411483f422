//! Common types and constants

use std::fmt;
use thiserror::Error;

/// Character set shared by PID and ECDATA (base-32).
///
/// Uppercase letters and digits with the visually confusable `0`, `1`, `I`,
/// and `O` removed. The ordering is part of the vendor's key scheme and must
/// not be regenerated.
pub const ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Per-block additive stride for the PID <-> ECDATA substitution.
pub const BLOCK_STRIDES: [u8; 4] = [7, 1, 2, 17];

/// Per-position additive offset within a 5-symbol block.
pub const POSITION_OFFSETS: [u8; 5] = [23, 1, 2, 1, 0];

/// Symbols per PID/ECDATA block.
pub const SYMBOLS_PER_BLOCK: usize = 5;

/// Blocks per key, in every representation.
pub const BLOCK_COUNT: usize = 4;

/// Decimal digits per PID2 block.
pub const DIGITS_PER_BLOCK: usize = 7;

/// Total length of a hyphenated PID string.
pub const PID_LEN: usize = 23;

/// Total length of an ECDATA string.
pub const ECDATA_LEN: usize = 20;

/// Total length of a hyphenated PID2 string.
pub const PID2_LEN: usize = 31;

/// Decimal range of one PID2 block (10^7).
pub const DECIMAL_BLOCK_MODULUS: u32 = 10_000_000;

/// Look up a character's index in the key alphabet.
pub fn alphabet_index(c: char) -> Option<usize> {
    ALPHABET.find(c)
}

/// The alphabet symbol at `index`. Callers keep `index` below 32.
pub fn alphabet_char(index: usize) -> char {
    ALPHABET.as_bytes()[index] as char
}

/// The three textual representations of a product key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// 23 characters, four 5-symbol groups joined by hyphens.
    Pid,
    /// 20 contiguous symbols, no separators.
    Ecdata,
    /// 31 characters, four 7-digit decimal groups joined by hyphens.
    Pid2,
}

impl KeyFormat {
    pub fn name(self) -> &'static str {
        match self {
            KeyFormat::Pid => "PID",
            KeyFormat::Ecdata => "ECDATA",
            KeyFormat::Pid2 => "PID2",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion errors surfaced to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Structural violation: bad length, misplaced separator, or a character
    /// outside the expected class.
    #[error("format error: {reason}")]
    Format { reason: String },

    /// The PID2 checksum block failed verification on the reverse path.
    #[error("checksum mismatch in PID2 block {block}")]
    Checksum { block: usize },
}

/// Result of one conversion call: the detected input format plus the two
/// representations the caller did not supply. The input's own slot is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub detected: KeyFormat,
    pub pid: Option<String>,
    pub ecdata: Option<String>,
    pub pid2: Option<String>,
}

impl ConversionResult {
    /// The produced representations in PID, ECDATA, PID2 order.
    pub fn outputs(&self) -> Vec<(KeyFormat, &str)> {
        let mut out = Vec::with_capacity(2);
        if let Some(pid) = &self.pid {
            out.push((KeyFormat::Pid, pid.as_str()));
        }
        if let Some(ecdata) = &self.ecdata {
            out.push((KeyFormat::Ecdata, ecdata.as_str()));
        }
        if let Some(pid2) = &self.pid2 {
            out.push((KeyFormat::Pid2, pid2.as_str()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.len(), 32);
        let unique: HashSet<char> = ALPHABET.chars().collect();
        assert_eq!(unique.len(), 32);
        for confusable in ['0', '1', 'I', 'O'] {
            assert!(alphabet_index(confusable).is_none());
        }
    }

    #[test]
    fn test_alphabet_index_round_trip() {
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(alphabet_index(c), Some(i));
            assert_eq!(alphabet_char(i), c);
        }
    }

    #[test]
    fn test_table_dimensions() {
        assert_eq!(BLOCK_STRIDES.len(), BLOCK_COUNT);
        assert_eq!(POSITION_OFFSETS.len(), SYMBOLS_PER_BLOCK);
    }
}
