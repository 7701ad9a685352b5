// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Headless front end: load, replay drags and nudges, write the wallpaper pair.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use image::{DynamicImage, Rgba};

use duoscope::app::CropSession;
use duoscope::app::document::{FsCodec, ImageCodec, output_paths};
use duoscope::app::interaction::Frame;
use duoscope::app::message::{DragGesture, InputEvent, KeyEvent};
use duoscope::app::view::RasterSurface;
use duoscope::config::AppConfig;
use duoscope::constant::{DEFAULT_OUTPUT_EXT, DEFAULT_OUTPUT_STEM, DRAG_STEP_MS, DRAG_STEPS};
use duoscope::domain::layout::{Monitor, MonitorLayout, StaticMonitors, parse_dimensions};

#[derive(Parser, Debug)]
#[command(
    name = "duoscope",
    version,
    about = "Crop one image into a matched wallpaper pair for two monitors"
)]
struct Cli {
    /// Source image.
    image: PathBuf,

    /// Monitor size as WIDTHxHEIGHT, once per monitor, left to right.
    #[arg(long = "monitor", value_name = "WxH")]
    monitors: Vec<Monitor>,

    /// Size of the simulated view the crop is edited in.
    #[arg(long, value_name = "WxH", value_parser = parse_dimensions, default_value = "1000x600")]
    viewport: (u32, u32),

    /// Base output path; `_left` and `_right` are appended to the stem.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pointer drag in view coordinates, `x1,y1:x2,y2`. Repeatable.
    #[arg(long = "drag", value_name = "FROM:TO")]
    drags: Vec<DragGesture>,

    /// Arrow-key nudge such as `left` or `shift+down`. Repeatable.
    #[arg(long = "nudge", value_name = "KEY")]
    nudges: Vec<KeyEvent>,

    /// Write a snapshot of the crop view to this file.
    #[arg(long, value_name = "FILE")]
    overlay: Option<PathBuf>,

    /// Write the two preview thumbnails using this base path.
    #[arg(long, value_name = "FILE")]
    previews: Option<PathBuf>,

    /// Minimum crop width in view pixels.
    #[arg(long)]
    min_width: Option<f64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::default();
    if let Some(min_width) = cli.min_width {
        config.min_width = min_width;
    }

    let provider = if cli.monitors.is_empty() {
        StaticMonitors::default()
    } else {
        StaticMonitors(cli.monitors)
    };
    let layout = MonitorLayout::from_provider(&provider).context("Invalid monitor layout")?;
    log::info!(
        "Layout {}x{} (ratio {:.4}, shares {:.3?}), viewport {}x{}",
        layout.total_width(),
        layout.total_height(),
        layout.target_aspect_ratio(),
        layout.split_ratios(),
        cli.viewport.0,
        cli.viewport.1
    );

    let output = cli
        .output
        .unwrap_or_else(|| default_output(&config, &cli.image));

    let mut session = CropSession::new(config, layout, FsCodec, cli.viewport);
    session.load(&cli.image)?;

    let mut clock = Instant::now();
    for gesture in &cli.drags {
        let frames = session.replay_drag(gesture, clock);
        log::debug!("Drag {gesture:?} released {frames} frames");
        clock += Duration::from_millis(u64::from(DRAG_STEPS + 2) * DRAG_STEP_MS);
    }
    for key in cli.nudges {
        session.handle(InputEvent::Key(key));
    }
    if let Some(rect) = session.crop_rect() {
        log::info!(
            "Crop rectangle {:.1},{:.1} {:.1}x{:.1}",
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }

    if let Some(path) = &cli.overlay {
        let (width, height) = cli.viewport;
        let white = Rgba([255, 255, 255, 255]);
        let mut surface = RasterSurface::new(width, height, white, white);
        session.render(&mut surface, Frame { refresh_preview: true });
        FsCodec
            .encode(&DynamicImage::ImageRgba8(surface.into_image()), path)
            .context("Failed to write overlay snapshot")?;
        log::info!("Overlay written to {}", path.display());
    }

    if let Some(base) = &cli.previews {
        session.refresh_previews();
        let pair = session
            .previews()
            .context("Crop cannot be previewed at this viewport size")?;
        let paths = output_paths(base);
        for (image, path) in [(&pair.left, &paths.left), (&pair.right, &paths.right)] {
            FsCodec
                .encode(&DynamicImage::ImageRgba8(image.clone()), path)
                .with_context(|| format!("Failed to write preview {}", path.display()))?;
        }
        log::info!(
            "Previews written to {} and {}",
            paths.left.display(),
            paths.right.display()
        );
    }

    session.save(&output)?;
    Ok(())
}

/// `<output dir>/<image stem>.png`, falling back to the working directory.
fn default_output(config: &AppConfig, image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_OUTPUT_STEM);
    let dir = config.default_output_dir.clone().unwrap_or_default();
    dir.join(format!("{stem}.{DEFAULT_OUTPUT_EXT}"))
}
