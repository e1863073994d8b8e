//! quill - the editing-buffer and syntax-highlighting core of a small
//! terminal text editor.
//!
//! This is the main entry point. It parses CLI arguments, loads the named
//! file into a document (echoing each rendered line to stdout), and reports
//! the selected syntax profile on stderr.

mod cli;

use quill::core::document::Document;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse()?;

    let path = match cli.files.as_slice() {
        [path] => path,
        _ => return Err("Usage: quill [OPTIONS] <FILE>".into()),
    };

    let document = if cli.plain {
        Document::open_plain(path)?
    } else {
        Document::open(path)?
    };

    if let Some(profile) = document.profile() {
        eprintln!("syntax profile: {}", profile.name);
    }
    eprintln!("{}: {} lines", document.display_name(), document.len());

    Ok(())
}
