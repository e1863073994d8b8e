//! Command-line argument parsing for quill.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and methods for parsing them.

use std::path::PathBuf;

/// Command-line interface configuration.
#[derive(Debug, Default)]
pub struct Cli {
    /// File(s) to open
    pub files: Vec<PathBuf>,

    /// Disable syntax highlighting regardless of file extension
    pub plain: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Returns a `Cli` struct populated with parsed arguments.
    /// Returns an error on unknown flags.
    pub fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        Self::parse_from(std::env::args().skip(1))
    }

    fn parse_from(args: impl Iterator<Item = String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut cli = Self::default();

        for arg in args {
            match arg.as_str() {
                "-p" | "--plain" => cli.plain = true,
                "-h" | "--help" => {
                    println!("quill - a small syntax-highlighting editor core");
                    println!();
                    println!("Usage: quill [OPTIONS] <FILE>");
                    println!();
                    println!("Options:");
                    println!("  -h, --help   Show this help message");
                    println!("  -p, --plain  Disable syntax highlighting");
                    std::process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown flag: {}. Use --help for usage.", arg).into());
                }
                _ => {
                    // Positional arguments are files
                    cli.files.push(PathBuf::from(arg));
                }
            }
        }

        Ok(cli)
    }
}
