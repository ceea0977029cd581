use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use quanta_cerebra::{
    interpolate_with, parse_frames, render, AppConfig, InterpolationMode, LayoutMode, LoopMode,
    PlaybackController, RenderOptions,
};

/// Play brain activity snapshots as terminal bar charts
#[derive(Parser, Debug)]
#[command(name = "quanta-cerebra", version, about)]
struct Cli {
    /// Brain activity file
    #[arg(default_value = "sample_input.json")]
    input: PathBuf,

    /// Configuration file (key = value lines, or TOML with the `toml` feature)
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,

    /// Frames per original pair; defaults to smoothing_window_size
    #[arg(short, long)]
    factor: Option<usize>,

    /// Playback speed
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Repeat until interrupted
    #[arg(long = "loop")]
    repeat: bool,

    /// Force colored bars
    #[arg(long)]
    color: bool,

    /// Only show top-level regions
    #[arg(long)]
    flat: bool,

    /// Blend subregions too when interpolating
    #[arg(long)]
    recursive: bool,
}

fn print_config(config: &AppConfig, factor: usize) {
    println!("--- Configuration Settings ---");
    println!("  Enable Color: {}", config.enable_color);
    println!("  Smoothing Window: {}", config.smoothing_window_size);
    println!("  Interpolation Factor: {}", factor);
    println!("  Layout Mode: {:?}", config.layout_mode);
    println!("----------------------------");
    println!();
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if cli.color {
        config.enable_color = true;
    }
    if cli.flat {
        config.layout_mode = LayoutMode::Flat;
    }
    let factor = cli.factor.unwrap_or_else(|| config.interpolation_factor());
    print_config(&config, factor);

    let frames = {
        let source = std::fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to open input file {}", cli.input.display()))?;
        parse_frames(&source)
    };
    log::info!("read {} frames from {}", frames.len(), cli.input.display());

    let mode = if cli.recursive {
        InterpolationMode::Recursive
    } else {
        InterpolationMode::TopLevel
    };
    let frames = interpolate_with(frames, factor, mode);
    let rendered = render(&frames, &RenderOptions::from(&config));

    if rendered.is_empty() {
        log::warn!("no frames found in {}", cli.input.display());
        return Ok(());
    }

    let mut playback = PlaybackController::new(cli.fps);
    playback.set_frame_count(rendered.len());
    if cli.repeat {
        playback.set_loop_mode(LoopMode::Loop);
    }
    playback.play();

    let mut out = io::stdout().lock();
    loop {
        writeln!(out, "{}", rendered[playback.current_frame()])?;
        out.flush()?;
        if !playback.tick() {
            break;
        }
        thread::sleep(playback.interval());
    }

    Ok(())
}
