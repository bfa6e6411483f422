//! pidconv - Office product key converter
//!
//! Translates a license key among its PID (23-character), ECDATA
//! (20-character), and PID2 (31-character) representations, detecting the
//! supplied format automatically.

mod cli;
mod convert;
mod types;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
