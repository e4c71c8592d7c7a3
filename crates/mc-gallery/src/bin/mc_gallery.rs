use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::GrayImage;
use log::info;
use mc_core::{
    BinarizeConfig, Grid, Image, Point2i, RenderStyle, TextGridFormat, binarize_u8,
    parse_text_grid, render_text_grid,
};
use mc_trace::{Outline, StopReason, TraceStats, trace_with_stats};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "mc_gallery")]
#[command(about = "Trace region outlines in text-grid and image fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Text grid, one row per line
    #[command(name = "text")]
    Text(TextArgs),
    /// Grayscale or color image, binarized by threshold
    #[command(name = "image")]
    Image(ImageArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    /// Optional truth json with the expected outline points
    #[arg(long)]
    truth: Option<PathBuf>,
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct TextArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = '1')]
    foreground: char,
    /// Do not print the grids to stdout
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Args, Debug, Clone)]
struct ImageArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 128)]
    threshold: u8,
    /// Treat dark pixels as foreground
    #[arg(long, default_value_t = false)]
    invert: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TruthEnvelope {
    case: String,
    width: usize,
    height: usize,
    #[serde(default)]
    notes: Option<String>,
    points: Vec<[isize; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct OutlineDto {
    width: usize,
    height: usize,
    /// Walk order, starting with the start pixel.
    points: Vec<[isize; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct TruthCheck {
    expected: usize,
    missing: usize,
    extra: usize,
}

#[derive(Debug, Clone, Serialize)]
struct MetaTrace {
    source: &'static str,
    foreground_rule: String,
    boundary_pixels: usize,
    probes: usize,
    accepted: usize,
    stop: &'static str,
    truth: Option<TruthCheck>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Text(args) => run_text(args),
        Command::Image(args) => run_image(args),
    }
}

fn run_text(args: TextArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "text")?;
    let text = fs::read_to_string(&args.common.input)
        .with_context(|| format!("reading {}", args.common.input.display()))?;
    let grid = parse_text_grid(
        &text,
        &TextGridFormat {
            foreground: args.foreground,
        },
    )
    .with_context(|| format!("parsing text grid {}", args.common.input.display()))?;

    let (outline, stats) = trace_with_stats(&grid).context("tracing outline")?;
    let truth = check_truth(&args.common, "text", &grid, &outline)?;

    let style = RenderStyle::default();
    let rendered = render_text_grid(&outline.to_mask(), &style);
    if !args.quiet {
        print!("{}", render_text_grid(&grid, &style));
        println!();
        print!("{rendered}");
    }
    fs::write(case_dir.join("outline.txt"), &rendered)
        .with_context(|| format!("writing {}", case_dir.join("outline.txt").display()))?;

    write_outputs(
        &case_dir,
        &outline,
        MetaTrace {
            source: "text",
            foreground_rule: format!("cell == '{}'", args.foreground),
            boundary_pixels: outline.len(),
            probes: stats.probes,
            accepted: stats.accepted,
            stop: stop_name(stats.stop),
            truth,
        },
    )?;

    report(&case_dir, &outline, &stats);
    Ok(())
}

fn run_image(args: ImageArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "image")?;
    let gray = load_input_u8(&args.common.input)?;
    let cfg = BinarizeConfig {
        threshold: args.threshold,
        invert: args.invert,
    };
    let grid = binarize_u8(&gray.as_view(), &cfg);

    let (outline, stats) = trace_with_stats(&grid).context("tracing outline")?;
    let truth = check_truth(&args.common, "image", &grid, &outline)?;

    save_mask(case_dir.join("binary.png"), &grid)?;
    save_mask(case_dir.join("outline.png"), &outline.to_mask())?;

    let rule = if cfg.invert { "<" } else { ">=" };
    write_outputs(
        &case_dir,
        &outline,
        MetaTrace {
            source: "image",
            foreground_rule: format!("luma {rule} {}", cfg.threshold),
            boundary_pixels: outline.len(),
            probes: stats.probes,
            accepted: stats.accepted,
            stop: stop_name(stats.stop),
            truth,
        },
    )?;

    report(&case_dir, &outline, &stats);
    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;
    if let Some(truth) = &common.truth {
        ensure_file_exists(truth, "truth")?;
    }

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;
    Ok(case_dir)
}

fn check_truth<G: Grid>(
    common: &CommonArgs,
    case_name: &str,
    grid: &G,
    outline: &Outline,
) -> Result<Option<TruthCheck>> {
    let Some(path) = &common.truth else {
        return Ok(None);
    };

    let truth: TruthEnvelope =
        read_json(path).with_context(|| format!("reading truth json at {}", path.display()))?;
    if truth.case != case_name {
        bail!(
            "truth case mismatch: expected '{}', got '{}'.",
            case_name,
            truth.case
        );
    }
    if truth.width != grid.width() || truth.height != grid.height() {
        bail!(
            "truth dimensions ({}, {}) do not match input dimensions ({}, {}).",
            truth.width,
            truth.height,
            grid.width(),
            grid.height()
        );
    }

    let expected: HashSet<Point2i> = truth
        .points
        .iter()
        .map(|&[x, y]| Point2i::new(x, y))
        .collect();
    let missing = expected.iter().filter(|&&p| !outline.contains(p)).count();
    let extra = outline.iter().filter(|p| !expected.contains(p)).count();

    Ok(Some(TruthCheck {
        expected: expected.len(),
        missing,
        extra,
    }))
}

fn write_outputs(case_dir: &Path, outline: &Outline, meta: MetaTrace) -> Result<()> {
    write_json(
        case_dir.join("outline.json"),
        &OutlineDto {
            width: outline.width(),
            height: outline.height(),
            points: outline.iter().map(|p| [p.x, p.y]).collect(),
        },
    )?;
    write_json(case_dir.join("meta.json"), &meta)
}

fn report(case_dir: &Path, outline: &Outline, stats: &TraceStats) {
    info!(
        "traced {} boundary pixels in {} probes ({})",
        outline.len(),
        stats.probes,
        stop_name(stats.stop)
    );
    println!("results written to {}", case_dir.display());
}

fn stop_name(stop: StopReason) -> &'static str {
    match stop {
        StopReason::NoForeground => "no_foreground",
        StopReason::ScanEntry => "scan_entry",
        StopReason::FirstEntry => "first_entry",
        StopReason::IsolatedPixel => "isolated_pixel",
    }
}

fn load_input_u8(path: &Path) -> Result<Image<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing mc-core image from {}", path.display()))
}

fn save_mask(path: PathBuf, mask: &Image<bool>) -> Result<()> {
    let data = mask.data().iter().map(|&v| if v { 255 } else { 0 }).collect();
    let gray = GrayImage::from_raw(mask.width() as u32, mask.height() as u32, data)
        .context("constructing GrayImage from mask")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
