//! Tinytidy - clean rich-text editor HTML before it is persisted.
//!
//! # Usage
//!
//! ```bash
//! tinytidy page.html
//! tinytidy --write content/*.html
//! tinytidy --check content/*.html
//! echo '<p><br/></p>' | tinytidy
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tinytidy::clean::normalize;

/// Clean rich-text editor HTML fragments
#[derive(Parser, Debug)]
#[command(name = "tinytidy", version, about, long_about = None)]
struct Cli {
    /// HTML fragment files to clean (reads stdin when none are given)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(short, long)]
    write: bool,

    /// Print nothing; fail if any input would change
    #[arg(long, conflicts_with = "write")]
    check: bool,
}

fn clean_stdin(check: bool) -> Result<()> {
    let mut html = String::new();
    std::io::stdin()
        .read_to_string(&mut html)
        .context("Failed to read stdin")?;
    let cleaned = normalize(&html);
    if check {
        if cleaned != html {
            anyhow::bail!("stdin needs cleaning");
        }
    } else {
        print!("{cleaned}");
    }
    Ok(())
}

fn clean_files(cli: &Cli) -> Result<()> {
    let mut dirty = 0usize;
    for path in &cli.files {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let cleaned = normalize(&html);
        let changed = cleaned != html;

        if cli.check {
            if changed {
                println!("{}", path.display());
                dirty += 1;
            }
        } else if cli.write {
            if changed {
                fs::write(path, &cleaned)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    removed = html.len() - cleaned.len(),
                    "cleaned"
                );
            }
        } else {
            print!("{cleaned}");
        }
    }
    if dirty > 0 {
        anyhow::bail!("{dirty} file(s) need cleaning");
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        if cli.write {
            anyhow::bail!("--write needs file arguments, stdin goes to stdout");
        }
        return clean_stdin(cli.check);
    }

    clean_files(&cli)
}
