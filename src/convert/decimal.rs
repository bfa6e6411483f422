//! ECDATA <-> PID2 numeric reinterpretation
//!
//! Each ECDATA block of 5 symbols is read as a base-32 integer (most
//! significant symbol first) and re-expressed as 7 decimal digits, reduced
//! modulo 10^7. The final digit of block 3 is a checksum over the other 27
//! digits, so a PID2 string is self-verifying.
//!
//! The reverse direction reads each decimal block directly as the base-32
//! magnitude; since 10^7 < 32^5 every digit block is representable, which
//! makes PID2 the canonical form: converting a produced PID2 back and forth
//! is always the identity.

use crate::convert::detect::expect_format;
use crate::types::{
    alphabet_char, alphabet_index, ConvertError, KeyFormat, BLOCK_COUNT,
    DECIMAL_BLOCK_MODULUS, DIGITS_PER_BLOCK, ECDATA_LEN, SYMBOLS_PER_BLOCK,
};

/// Digits contributing to the checksum: everything but the final digit of
/// block 3, which carries the checksum itself.
const CHECKSUM_SPAN: usize = 27;

/// Index of the block whose final digit is the checksum.
const CHECKSUM_BLOCK: usize = 3;

/// Convert a 20-symbol ECDATA string to hyphenated PID2 form.
pub fn ecdata_to_pid2(ecdata: &str) -> Result<String, ConvertError> {
    expect_format(ecdata, KeyFormat::Ecdata)?;

    let symbols: Vec<char> = ecdata.chars().collect();
    let mut groups: Vec<String> = Vec::with_capacity(BLOCK_COUNT);
    for block in symbols.chunks(SYMBOLS_PER_BLOCK) {
        let value = block_value(block)?;
        groups.push(format!(
            "{:0width$}",
            value % DECIMAL_BLOCK_MODULUS,
            width = DIGITS_PER_BLOCK
        ));
    }

    let check = checksum_digit(groups.iter().flat_map(|g| g.chars()));
    groups[CHECKSUM_BLOCK].replace_range(DIGITS_PER_BLOCK - 1.., &check.to_string());
    Ok(groups.join("-"))
}

/// Convert a hyphenated PID2 string back to its 20-symbol ECDATA form.
///
/// Verifies the block-3 checksum before touching any magnitude.
pub fn pid2_to_ecdata(pid2: &str) -> Result<String, ConvertError> {
    expect_format(pid2, KeyFormat::Pid2)?;

    let groups: Vec<&str> = pid2.split('-').collect();
    let expected = checksum_digit(groups.iter().flat_map(|g| g.chars()));
    let actual = groups[CHECKSUM_BLOCK]
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(10);
    if actual != expected {
        return Err(ConvertError::Checksum {
            block: CHECKSUM_BLOCK,
        });
    }

    let mut ecdata = String::with_capacity(ECDATA_LEN);
    for group in &groups {
        let value: u32 = group.parse().map_err(|_| ConvertError::Format {
            reason: format!("block '{}' is not a decimal number", group),
        })?;
        // base 32 is 2^5, so the five symbol values are 5-bit fields
        for field in (0..SYMBOLS_PER_BLOCK).rev() {
            ecdata.push(alphabet_char((value as usize >> (5 * field)) & 31));
        }
    }
    Ok(ecdata)
}

/// Read a 5-symbol block as a base-32 integer, most significant symbol first.
fn block_value(block: &[char]) -> Result<u32, ConvertError> {
    block.iter().try_fold(0u32, |acc, &c| {
        let index = alphabet_index(c).ok_or_else(|| ConvertError::Format {
            reason: format!("character '{}' is not in the key alphabet", c),
        })?;
        Ok(acc * 32 + index as u32)
    })
}

/// Sum of the first 27 digits modulo 10.
fn checksum_digit(digits: impl Iterator<Item = char>) -> u32 {
    digits
        .take(CHECKSUM_SPAN)
        .filter_map(|c| c.to_digit(10))
        .sum::<u32>()
        % 10
}
