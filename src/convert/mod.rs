//! Key conversion engine
//!
//! [`convert`] detects the representation a raw key was supplied in and
//! derives the other two. PID <-> PID2 is always the composition of the two
//! block transforms through ECDATA; there is no separate direct table.

pub mod decimal;
pub mod detect;
pub mod substitution;

pub use decimal::{ecdata_to_pid2, pid2_to_ecdata};
pub use detect::detect;
pub use substitution::{ecdata_to_pid, pid_to_ecdata};

use crate::types::{ConversionResult, ConvertError, KeyFormat};

/// Convert a raw key string into the two representations not supplied.
///
/// Pure dispatch over the detected format; the first failure wins and no
/// partial result is ever returned.
pub fn convert(raw: &str) -> Result<ConversionResult, ConvertError> {
    let detected = detect::detect(raw)?;
    match detected {
        KeyFormat::Pid => {
            let ecdata = substitution::pid_to_ecdata(raw)?;
            let pid2 = decimal::ecdata_to_pid2(&ecdata)?;
            Ok(ConversionResult {
                detected,
                pid: None,
                ecdata: Some(ecdata),
                pid2: Some(pid2),
            })
        }
        KeyFormat::Ecdata => {
            let pid = substitution::ecdata_to_pid(raw)?;
            let pid2 = decimal::ecdata_to_pid2(raw)?;
            Ok(ConversionResult {
                detected,
                pid: Some(pid),
                ecdata: None,
                pid2: Some(pid2),
            })
        }
        KeyFormat::Pid2 => {
            let ecdata = decimal::pid2_to_ecdata(raw)?;
            let pid = substitution::ecdata_to_pid(&ecdata)?;
            Ok(ConversionResult {
                detected,
                pid: Some(pid),
                ecdata: Some(ecdata),
                pid2: None,
            })
        }
    }
}
