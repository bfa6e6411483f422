//! Input format detection

use crate::types::{
    alphabet_index, ConvertError, KeyFormat, ECDATA_LEN, PID2_LEN, PID_LEN,
};

/// Hyphen positions within a PID string.
const PID_HYPHENS: &[usize] = &[5, 11, 17];

/// Hyphen positions within a PID2 string.
const PID2_HYPHENS: &[usize] = &[7, 15, 23];

/// Classify a raw key string as PID, ECDATA, or PID2.
///
/// The input must be pre-trimmed; nothing is stripped here except the hyphens
/// implied by the PID and PID2 layouts. Classification is pure and driven by
/// length first, then by separator positions and character class.
pub fn detect(raw: &str) -> Result<KeyFormat, ConvertError> {
    let chars: Vec<char> = raw.chars().collect();
    match chars.len() {
        PID_LEN => {
            check_layout(&chars, PID_HYPHENS, is_key_symbol, "in the key alphabet")?;
            Ok(KeyFormat::Pid)
        }
        ECDATA_LEN => {
            check_layout(&chars, &[], is_key_symbol, "in the key alphabet")?;
            Ok(KeyFormat::Ecdata)
        }
        PID2_LEN => {
            check_layout(&chars, PID2_HYPHENS, |c| c.is_ascii_digit(), "a decimal digit")?;
            Ok(KeyFormat::Pid2)
        }
        n => Err(ConvertError::Format {
            reason: format!(
                "key must be {} (ECDATA), {} (PID), or {} (PID2) characters long, got {}",
                ECDATA_LEN, PID_LEN, PID2_LEN, n
            ),
        }),
    }
}

/// Require `format` of a key string, for transforms invoked directly.
pub fn expect_format(raw: &str, format: KeyFormat) -> Result<(), ConvertError> {
    let detected = detect(raw)?;
    if detected != format {
        return Err(ConvertError::Format {
            reason: format!("expected a {} key, got {}", format, detected),
        });
    }
    Ok(())
}

fn is_key_symbol(c: char) -> bool {
    alphabet_index(c).is_some()
}

/// Check hyphen placement and the character class of every non-hyphen position.
fn check_layout(
    chars: &[char],
    hyphens: &[usize],
    class: impl Fn(char) -> bool,
    class_name: &str,
) -> Result<(), ConvertError> {
    for (pos, &c) in chars.iter().enumerate() {
        if hyphens.contains(&pos) {
            if c != '-' {
                return Err(ConvertError::Format {
                    reason: format!("expected '-' at position {}, found '{}'", pos, c),
                });
            }
        } else if c == '-' {
            return Err(ConvertError::Format {
                reason: format!("unexpected '-' at position {}", pos),
            });
        } else if !class(c) {
            return Err(ConvertError::Format {
                reason: format!("character '{}' at position {} is not {}", c, pos, class_name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pid() {
        assert_eq!(detect("C6HH9-FA2CY-F8Q44-XWVHR"), Ok(KeyFormat::Pid));
    }

    #[test]
    fn test_detect_ecdata() {
        assert_eq!(detect("AESRG7C5EZ8BU767GG3A"), Ok(KeyFormat::Ecdata));
    }

    #[test]
    fn test_detect_pid2() {
        assert_eq!(detect("8807150-5574047-6613156-5716008"), Ok(KeyFormat::Pid2));
    }

    #[test]
    fn test_detect_rejects_bad_length() {
        for raw in ["", "ABC", "C6HH9-FA2CY-F8Q44-XWVH", "C6HH9-FA2CY-F8Q44-XWVHR2"] {
            let err = detect(raw).unwrap_err();
            assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("characters long")));
        }
    }

    #[test]
    fn test_detect_rejects_misplaced_hyphen() {
        // 23 chars with a hyphen shifted off position 5
        let err = detect("C6HH-9FA2CY-F8Q44-XWVHR").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("position 4")));

        // 20 chars with an embedded hyphen is not ECDATA
        let err = detect("AESRG-C5EZ8U767GG3AA").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("unexpected '-'")));

        // 31 digits with no separators
        let err = detect("8807150557404766131565716008333").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("expected '-'")));
    }

    #[test]
    fn test_detect_rejects_out_of_class_characters() {
        // 'O' and '0' are excluded from the key alphabet
        let err = detect("C6HHO-FA2CY-F8Q44-XWVHR").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("not in the key alphabet")));

        let err = detect("AESRG7C5EZ0BU767GG3A").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("not in the key alphabet")));

        let err = detect("880715A-5574047-6613156-5716008").unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("not a decimal digit")));
    }

    #[test]
    fn test_detect_is_idempotent() {
        for raw in ["C6HH9-FA2CY-F8Q44-XWVHR", "AESRG7C5EZ8BU767GG3A", "not a key"] {
            assert_eq!(detect(raw), detect(raw));
        }
    }

    #[test]
    fn test_expect_format_mismatch() {
        let err = expect_format("AESRG7C5EZ8BU767GG3A", KeyFormat::Pid).unwrap_err();
        assert!(matches!(err, ConvertError::Format { ref reason } if reason.contains("expected a PID")));
    }
}
