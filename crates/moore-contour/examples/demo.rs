//! Example: trace a text-grid image in the terminal.
//!
//! Reads a grid where each line is a row and `1` marks foreground, draws it,
//! traces the first region, then draws only the traced outline.
//!
//! Run from the workspace root:
//!   cargo run -p moore-contour --example demo -- --help
//!   cargo run -p moore-contour --example demo -- --input data/blob.txt

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use moore_contour::{RenderStyle, TextGridFormat, parse_text_grid, render_text_grid, trace_with_stats};

#[derive(Parser, Debug)]
#[command(about = "Draw a text-grid image and its Moore-neighborhood outline")]
struct Args {
    /// Text grid, one row per line
    #[arg(long, default_value = "data/blob.txt")]
    input: String,

    /// Character marking foreground cells
    #[arg(long, default_value_t = '1')]
    foreground: char,

    /// Pause between the two drawings, in milliseconds
    #[arg(long, default_value_t = 0)]
    pause_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;
    let image = parse_text_grid(
        &text,
        &TextGridFormat {
            foreground: args.foreground,
        },
    )
    .with_context(|| format!("parsing {}", args.input))?;

    let style = RenderStyle::default();
    print!("{}", render_text_grid(&image, &style));
    std::thread::sleep(Duration::from_millis(args.pause_ms));

    let (outline, stats) = trace_with_stats(&image).context("tracing outline")?;

    println!();
    print!("{}", render_text_grid(&outline.to_mask(), &style));
    println!(
        "{} boundary pixels, {} probes, stop: {:?}",
        outline.len(),
        stats.probes,
        stats.stop
    );
    Ok(())
}
