//! Joystick Pad - interactive demo and event replay tool
//!
//! Opens an egui window hosting the joystick by default; `--simulate` replays
//! recorded pointer events headlessly and `--check-config` validates a config.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joystick_pad::config::{ConfigWatcher, JoystickConfig};
use joystick_pad::pad::JoystickPad;
use joystick_pad::simulate::{simulate_file, SimulationStep};
use joystick_pad::visualizer;

/// Joystick Pad - on-screen joystick geometry with dead zone and guide lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "joystick.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Replay pointer events from a CSV file (phase,x,y) instead of opening a window
    #[arg(long, value_name = "CSV")]
    simulate: Option<String>,

    /// Widget width used by --simulate
    #[arg(long, default_value = "200")]
    width: f32,

    /// Widget height used by --simulate
    #[arg(long, default_value = "200")]
    height: f32,

    /// Print --simulate results as JSON lines
    #[arg(long)]
    json: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    check_config: bool,

    /// Disable configuration hot-reload in the demo window
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Configuration file: {}", args.config);
    let config = JoystickConfig::load_or_default(&args.config).await?;

    if args.check_config {
        return check_config(&config, args.width, args.height);
    }

    if let Some(events) = &args.simulate {
        let steps = simulate_file(events, &config, args.width, args.height).await?;
        print_steps(&steps, args.json)?;
        return Ok(());
    }

    let watcher = if args.no_watch || !Path::new(&args.config).exists() {
        None
    } else {
        match ConfigWatcher::new(args.config.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!("Hot reload disabled: {:#}", e);
                None
            }
        }
    };

    visualizer::run_demo(&config, watcher)?;

    info!("Joystick Pad shutdown complete");
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}

fn check_config(config: &JoystickConfig, width: f32, height: f32) -> Result<()> {
    let mut pad = JoystickPad::with_config(config).context("Invalid joystick config")?;
    pad.on_size_changed(width, height)
        .with_context(|| format!("Invalid layout {}x{}", width, height))?;

    println!("\n{}", "=== Joystick Configuration ===".bold().cyan());
    println!("  panel_scale:      {}", config.panel_scale.to_string().green());
    println!("  inner_area_scale: {}", config.inner_area_scale.to_string().green());
    println!("  joystick_scale:   {}", config.joystick_scale.to_string().green());

    if let Some(geometry) = pad.geometry() {
        println!("\n{} {}x{}", "Geometry at".bold(), width, height);
        println!(
            "  center:           ({:.1}, {:.1})",
            geometry.center().x,
            geometry.center().y
        );
        println!("  panel radius:     {:.1}", geometry.panel_radius());
        println!("  dead zone radius: {:.1}", geometry.dead_zone_radius());
    }

    let segments = pad.guide_segments();
    if segments.is_empty() {
        println!("\n{}", "No guide lines".dimmed());
    } else {
        println!("\n{}", "Guide lines:".bold());
        for (angle, segment) in config.guide_angles.iter().flatten().zip(segments) {
            println!(
                "  {:>4}° -> ({:.1}, {:.1})",
                angle, segment.end.x, segment.end.y
            );
        }
    }

    println!("\n{}", "Configuration OK".green().bold());
    Ok(())
}

fn print_steps(steps: &[SimulationStep], json: bool) -> Result<()> {
    for step in steps {
        if json {
            println!(
                "{}",
                serde_json::to_string(step).context("Failed to serialize step")?
            );
            continue;
        }

        let phase = format!("{:?}", step.phase).to_lowercase();
        match step.signal {
            Some(signal) => {
                let power = format!("{:.3}", signal.power);
                let power = if signal.power > 0.0 { power.green() } else { power.dimmed() };
                println!(
                    "{:>5} {:<7} ({:7.1}, {:7.1}) angle={:>3} power={}",
                    step.line,
                    phase,
                    step.x,
                    step.y,
                    signal.angle_degrees.to_string().cyan(),
                    power
                );
            }
            None => {
                println!(
                    "{:>5} {:<7} ({:7.1}, {:7.1}) {}",
                    step.line,
                    phase,
                    step.x,
                    step.y,
                    "dropped".yellow()
                );
            }
        }
    }
    Ok(())
}
