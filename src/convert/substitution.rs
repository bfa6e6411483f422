//! PID <-> ECDATA symbol substitution
//!
//! Each of the four blocks is transformed independently: a symbol's alphabet
//! index is shifted by the block stride plus a per-position offset, modulo 32.
//! The reverse direction subtracts the same shift, so the two directions are
//! exact inverses.

use crate::convert::detect::expect_format;
use crate::types::{
    alphabet_char, alphabet_index, ConvertError, KeyFormat, BLOCK_COUNT, BLOCK_STRIDES,
    ECDATA_LEN, POSITION_OFFSETS, SYMBOLS_PER_BLOCK,
};

/// Convert a hyphenated PID to its 20-symbol ECDATA form.
pub fn pid_to_ecdata(pid: &str) -> Result<String, ConvertError> {
    expect_format(pid, KeyFormat::Pid)?;

    let mut ecdata = String::with_capacity(ECDATA_LEN);
    for (b, group) in pid.split('-').enumerate() {
        for (p, c) in group.chars().enumerate() {
            ecdata.push(shift_symbol(c, b, p, true)?);
        }
    }
    Ok(ecdata)
}

/// Convert a 20-symbol ECDATA string back to hyphenated PID form.
pub fn ecdata_to_pid(ecdata: &str) -> Result<String, ConvertError> {
    expect_format(ecdata, KeyFormat::Ecdata)?;

    let symbols: Vec<char> = ecdata.chars().collect();
    let mut groups = Vec::with_capacity(BLOCK_COUNT);
    for (b, block) in symbols.chunks(SYMBOLS_PER_BLOCK).enumerate() {
        let mut group = String::with_capacity(SYMBOLS_PER_BLOCK);
        for (p, &c) in block.iter().enumerate() {
            group.push(shift_symbol(c, b, p, false)?);
        }
        groups.push(group);
    }
    Ok(groups.join("-"))
}

/// Shift one symbol by the stride of block `b` and the offset of position `p`.
///
/// Overflow wraps back into the alphabet index range; mod-32 wraparound is the
/// complete range-adjustment policy.
fn shift_symbol(c: char, b: usize, p: usize, forward: bool) -> Result<char, ConvertError> {
    let i = alphabet_index(c).ok_or_else(|| ConvertError::Format {
        reason: format!("character '{}' is not in the key alphabet", c),
    })? as i32;

    let delta = i32::from(BLOCK_STRIDES[b]) + i32::from(POSITION_OFFSETS[p]);
    let shifted = if forward { i + delta } else { i - delta };
    Ok(alphabet_char(shifted.rem_euclid(32) as usize))
}
