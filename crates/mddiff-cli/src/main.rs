#![forbid(unsafe_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};

use mddiff_core::block_diff::block_diff;
use mddiff_core::line_diff::line_diff;
use mddiff_core::render;

#[derive(Parser)]
#[command(name = "mddiff", about = "Markdown-aware diffs from the CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Line-by-line diff with word-level detail on replacement pairs.
    Lines {
        /// Old file. Use `-` to read from stdin.
        old: PathBuf,
        /// New file. Use `-` to read from stdin.
        new: PathBuf,
        /// Two-column view instead of the unified view.
        #[arg(long)]
        side_by_side: bool,
        /// Emit the raw diff entries as JSON.
        #[arg(long, conflicts_with = "side_by_side")]
        json: bool,
    },
    /// Block-structured Markdown diff, rendered as kind-tagged HTML
    /// containers.
    Blocks {
        /// Old file. Use `-` to read from stdin.
        old: PathBuf,
        /// New file. Use `-` to read from stdin.
        new: PathBuf,
        /// Interleave adjacent removed/added runs pairwise.
        #[arg(long)]
        paired: bool,
        /// Emit the raw diff result as JSON.
        #[arg(long, conflicts_with = "paired")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Lines {
            old,
            new,
            side_by_side,
            json,
        } => {
            let old = read_input(&old)?;
            let new = read_input(&new)?;
            let entries = line_diff(&old, &new);

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if side_by_side {
                print!("{}", render::side_by_side(&entries));
            } else {
                print!("{}", render::unified(&entries));
            }
        }
        Command::Blocks {
            old,
            new,
            paired,
            json,
        } => {
            let old = read_input(&old)?;
            let new = read_input(&new)?;
            let outcome = block_diff(&old, &new);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if paired {
                print!("{}", render::block_html_paired(&outcome));
            } else {
                print!("{}", render::block_html(&outcome));
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        use std::io::Read as _;

        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read markdown from stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path)
        .with_context(|| format!("failed to read markdown from {}", path.display()))
}
