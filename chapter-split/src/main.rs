use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chapter-split",
    about = "Group tab-delimited verse records into one line per chapter",
    long_about = "Reads verse records (fields: id, book, chapter, verse, text) from \
standard input or a file, groups consecutive records sharing the same (book, chapter) \
key, and writes one tab-separated line per chapter to standard output. Input must \
already be ordered by book and chapter."
)]
#[command(version)]
struct Args {
    /// Input file (defaults to standard input)
    file: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Read the whole input into memory, from a file or stdin.
fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read standard input")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = read_input(args.file.as_ref())?;

    if args.debug {
        let source = args
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string());
        eprintln!("Input: {} ({} bytes)", source, input.len());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut group_count = 0usize;
    for chapter in verses::chapters(&input) {
        let chapter = chapter.context("Malformed input")?;
        writeln!(out, "{}\t{}", chapter.id, chapter.text)
            .context("Failed to write to standard output")?;
        // Flush per line so chapters written before a later parse failure
        // stay emitted.
        out.flush().context("Failed to write to standard output")?;
        group_count += 1;
    }

    if args.debug {
        eprintln!("Chapters: {}", group_count);
    }

    Ok(())
}
