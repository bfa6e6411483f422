//! Command-line interface

use crate::convert::convert;
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "pidconv")]
#[command(version = "1.0.0")]
#[command(
    about = "Convert office product keys between PID, ECDATA, and PID2",
    long_about = "Convert office product keys between PID, ECDATA, and PID2\n\nSupply a key in any of the three representations; the other two are derived.\nRun without arguments to be prompted for a key."
)]
pub struct Cli {
    /// Key to convert (PID, ECDATA, or PID2)
    pub key: Option<String>,

    /// List the supported key formats
    #[arg(long)]
    pub formats: bool,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.formats {
        list_formats();
        return Ok(());
    }

    let raw = match cli.key {
        Some(key) => key,
        None => prompt_key()?,
    };
    let key = raw.trim();
    if key.is_empty() {
        anyhow::bail!("no key provided");
    }

    let result = convert(key)?;

    println!("Input: {} ({})", key, result.detected);
    for (format, value) in result.outputs() {
        println!("{}: {}", format, value);
    }
    Ok(())
}

fn prompt_key() -> anyhow::Result<String> {
    print!("Enter a key to convert: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn list_formats() {
    println!("\nSupported key formats:\n");
    println!("  PID      XXXXX-XXXXX-XXXXX-XXXXX          23 characters, 3 hyphens");
    println!("  ECDATA   XXXXXXXXXXXXXXXXXXXX             20 characters, no hyphens");
    println!("  PID2     NNNNNNN-NNNNNNN-NNNNNNN-NNNNNNN  31 characters, 3 hyphens");
    println!();
}
