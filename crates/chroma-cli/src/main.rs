//! chroma - command-line driver for the chroma color engine
//!
//! Composes picker colors, plots them in CIE xy, and runs the
//! wide-gamut highlight filter over raw frames.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chroma_core::{Frame, Gamut, Hsb};
use chroma_color::{Chromaticity, DiagramMapping, hsb_to_rgb, to_chromaticity};
use chroma_ops::{FrameFilterPipeline, count_out_of_gamut};

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color conversion and wide-gamut highlighting")]
#[command(long_about = "
Drives the chroma color engine from the command line.

Examples:
  chroma color --hue 90 --saturation 1.0       # Compose and plot a picker color
  chroma color --hue 0 --wide-gamut            # The Display P3 red primary
  chroma sweep --steps 12                      # Walk the hue wheel
  chroma filter in.raw -W 1920 -H 1080 -o out.raw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a color from wheel and slider values and plot it
    Color(ColorArgs),

    /// Print a table of colors around the hue wheel
    Sweep(SweepArgs),

    /// Run the gamut-highlight filter over a raw RGBA32F frame
    Filter(FilterArgs),
}

#[derive(Args)]
struct ColorArgs {
    /// Wheel angle in degrees, counter-clockwise from 3 o'clock
    #[arg(long, default_value = "0")]
    hue: f32,

    /// Saturation slider position, 0 to 1
    #[arg(long, default_value = "1")]
    saturation: f32,

    /// Brightness, 0 to 1
    #[arg(long, default_value = "1")]
    brightness: f32,

    /// Compose in Display P3 instead of sRGB
    #[arg(long)]
    wide_gamut: bool,
}

#[derive(Args)]
struct SweepArgs {
    /// Number of hue steps around the wheel
    #[arg(long, default_value = "12")]
    steps: u32,

    /// Compose in Display P3 instead of sRGB
    #[arg(long)]
    wide_gamut: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// Input file: raw little-endian RGBA f32, row-major
    input: PathBuf,

    /// Frame width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Frame height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Output file (same raw format); omit to only report counts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat the input as alpha-premultiplied
    #[arg(long)]
    premultiplied: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Color(args) => cmd_color(args),
        Commands::Sweep(args) => cmd_sweep(args),
        Commands::Filter(args) => cmd_filter(args),
    }
}

fn cmd_color(args: ColorArgs) -> Result<()> {
    let gamut = Gamut::from_wide(args.wide_gamut);
    let hsb = Hsb::from_wheel_angle(args.hue, args.saturation, args.brightness);
    let rgb = hsb_to_rgb(hsb, gamut);
    let xy = to_chromaticity(rgb);

    println!("gamut:        {}", gamut);
    println!(
        "hsb:          h={:.4} s={:.4} b={:.4}",
        hsb.h, hsb.s, hsb.b
    );
    println!(
        "rgb:          ({:.4}, {:.4}, {:.4})",
        rgb.r, rgb.g, rgb.b
    );
    let [r8, g8, b8] = rgb.components_u8();
    println!("rgb (8-bit):  ({r8}, {g8}, {b8})");
    println!("hex:          0x{:06X}", rgb.to_hex());
    print_chromaticity(xy);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> Result<()> {
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }
    let gamut = Gamut::from_wide(args.wide_gamut);

    println!("{:>8} {:>24} {:>10} {:>8} {:>8}", "hue", "rgb", "hex", "x", "y");
    for i in 0..args.steps {
        let h = i as f32 / args.steps as f32;
        let rgb = hsb_to_rgb(Hsb::new(h, 1.0, 1.0, 1.0), gamut);
        let xy = to_chromaticity(rgb);
        println!(
            "{:>8.4} ({:>6.3}, {:>6.3}, {:>6.3})   0x{:06X} {:>8.4} {:>8.4}",
            h, rgb.r, rgb.g, rgb.b, rgb.to_hex(), xy.x, xy.y
        );
    }
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    if bytes.len() % 4 != 0 {
        bail!(
            "{}: length {} is not a whole number of f32 values",
            args.input.display(),
            bytes.len()
        );
    }
    let data: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    debug!(
        width = args.width,
        height = args.height,
        values = data.len(),
        "read raw frame"
    );

    let pipeline = FrameFilterPipeline::new();
    let frame = Frame::from_data(args.width, args.height, data, args.premultiplied)
        .context("building frame from raw input")?;

    let out_of_gamut = count_out_of_gamut(&frame);
    let total = frame.pixel_count();
    println!(
        "{} of {} pixels outside sRGB ({:.2}%)",
        out_of_gamut,
        total,
        out_of_gamut as f64 / total as f64 * 100.0
    );

    let filtered = pipeline.process(&frame).context("filtering frame")?;

    if let Some(path) = args.output {
        let out_bytes: Vec<u8> = filtered
            .data()
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        fs::write(&path, out_bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn print_chromaticity(xy: Chromaticity) {
    println!("chromaticity: x={:.4} y={:.4} z={:.4}", xy.x, xy.y, xy.z());
    // Position on a 1000x1000 rendering of the CIE diagram image
    let (px, py) = DiagramMapping::new(1000.0, 1000.0).position(xy);
    println!("diagram px:   ({px:.1}, {py:.1}) in a 1000x1000 view");
}
