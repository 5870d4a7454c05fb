// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stewart platform CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use stewart::cli::{leg_summary, Reporter, StateDump};
use stewart::{AsciiPlotter, Frame, PlatformConfig, PngPlotter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stewart")]
#[command(about = "Stewart platform geometry - attachment points and leg lengths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ./stewart.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the attachment points of a single frame
    Frame {
        /// Ring radius
        #[arg(short, long, default_value = "1.5")]
        radius: f64,

        /// Angle of attachment point 0, in degrees
        #[arg(short, long, default_value = "90", allow_negative_numbers = true)]
        phase: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Assemble the configured platform and print its legs
    Legs {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Dump the full state of both frames and the platform as JSON
    Dump,

    /// Plot the base and moving frames
    Plot {
        /// Output directory for PNG files
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Draw in the terminal instead of writing PNG files
        #[arg(long)]
        ascii: bool,
    },

    /// Write the effective configuration to a TOML file
    InitConfig {
        /// Destination file
        #[arg(default_value = "stewart.toml")]
        path: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);
    if let Err(ref e) = result {
        Reporter::report_error(&format!("{e:#}"));
        std::process::exit(1);
    }
    result
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(verbose, rust_log.as_deref()))
        .init();
}

/// `RUST_LOG` when set and valid, otherwise warnings only; `--verbose` raises
/// everything to debug.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PlatformConfig> {
    match path {
        Some(path) => {
            let mut config = PlatformConfig::from_file(path)?;
            config.apply_env_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => PlatformConfig::load(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Frame { radius, phase, json }) => frame_command(*radius, *phase, *json),
        Some(Commands::Legs { json }) => legs_command(&load_config(cli.config.as_ref())?, *json),
        Some(Commands::Dump) => dump_command(&load_config(cli.config.as_ref())?),
        Some(Commands::Plot { out, ascii }) => {
            plot_command(&load_config(cli.config.as_ref())?, out.as_ref(), *ascii)
        }
        Some(Commands::InitConfig { path }) => {
            load_config(cli.config.as_ref())?.save(path)?;
            Reporter::success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        Some(Commands::Version) => {
            println!("stewart v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => reference_command(&load_config(cli.config.as_ref())?),
    }
}

/// Build both frames, show them, then assemble and report the platform
fn reference_command(config: &PlatformConfig) -> Result<()> {
    let platform = config.build_platform()?;
    Reporter::report_frame("base", platform.base_frame());
    Reporter::report_frame("moving", platform.moving_frame());
    Reporter::report_platform(&platform);
    Ok(())
}

fn frame_command(radius: f64, phase: f64, json: bool) -> Result<()> {
    let frame = Frame::try_new(radius, phase)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        Reporter::report_frame("frame", &frame);
    }
    Ok(())
}

fn legs_command(config: &PlatformConfig, json: bool) -> Result<()> {
    let platform = config.build_platform()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&leg_summary(&platform))?);
    } else {
        Reporter::report_platform(&platform);
    }
    Ok(())
}

fn dump_command(config: &PlatformConfig) -> Result<()> {
    let platform = config.build_platform()?;
    println!("{}", StateDump::new(&platform).to_pretty_json()?);
    Ok(())
}

fn plot_command(config: &PlatformConfig, out: Option<&PathBuf>, ascii: bool) -> Result<()> {
    let platform = config.build_platform()?;

    if ascii {
        let stdout = io::stdout();
        let mut plotter = AsciiPlotter::new(stdout.lock(), config.plot.ascii_cells);
        return platform.plot(&mut plotter);
    }

    let dir = out.cloned().unwrap_or_else(|| config.plot.output_dir.clone());
    let mut plotter = PngPlotter::new(dir.clone(), config.plot.image_size);
    platform
        .plot(&mut plotter)
        .with_context(|| format!("Failed to plot into {}", dir.display()))?;

    for path in plotter.written() {
        Reporter::report_info(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
