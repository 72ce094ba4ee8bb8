use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use bezier_raster::{CurveSession, RasterConfig, Rasterizer, Surface};
use clap::Parser;
use log::info;

/// Render a cubic bezier curve and save it as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Control points as x0,y0,x1,y1,x2,y2,x3,y3
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_value = "100,500,300,100,500,700,700,300"
    )]
    points: Vec<f64>,

    /// Surface width in pixels
    #[arg(long, default_value_t = 700)]
    width: usize,

    /// Surface height in pixels
    #[arg(long, default_value_t = 700)]
    height: usize,

    /// Replace the de Casteljau pass by its anti-aliased version
    #[arg(long)]
    antialias: bool,

    /// JSON file overriding the rasterizer's defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the image
    #[arg(long, default_value = "bezier_curve.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<RasterConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RasterConfig::default(),
    };
    let rasterizer = Rasterizer::new(config);

    if args.points.len() % 2 != 0 {
        bail!("--points needs an even number of coordinates, got {}", args.points.len());
    }
    let mut session = CurveSession::new();
    for xy in args.points.chunks(2) {
        session.push(xy[0], xy[1]);
    }
    if !session.is_complete() {
        bail!("a cubic curve needs 4 control points, got {}", session.points().len());
    }

    let mut surface = Surface::new(args.width, args.height);
    rasterizer.control_points(session.points(), &mut surface);
    let naive = rasterizer.naive(session.points(), &mut surface)?;
    info!("bernstein pass: {} samples, {} clamped", naive.samples, naive.clamped);
    if args.antialias {
        let stats = rasterizer.antialiased(session.points(), &mut surface)?;
        info!(
            "anti-aliased pass: {} samples, {} pixels filtered",
            stats.pass.samples, stats.filter.pixels
        );
    } else {
        let stats = rasterizer.decasteljau(session.points(), &mut surface)?;
        info!("de casteljau pass: {} samples, {} clamped", stats.samples, stats.clamped);
    }

    let (width, height) = (u32::try_from(surface.width())?, u32::try_from(surface.height())?);
    let image = image::RgbImage::from_raw(width, height, surface.to_rgb_bytes())
        .context("surface size doesn't match its pixel data")?;
    image
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("saved {}", args.output.display());
    Ok(())
}
