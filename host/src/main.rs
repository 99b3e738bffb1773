use std::path::PathBuf;

use clap::Parser;
use splash_host::init::{self, HostOptions};
use splash_shared::load_config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// RON file with the item, arrow and weapon switches
    #[arg(short, long, default_value = "water_physics.ron")]
    config: PathBuf,

    /// Frames to simulate, 0 runs until interrupted
    #[arg(short, long, default_value_t = 400)]
    frames: u32,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() {
    let args = Args::parse();

    if !(1.0..=1000.0).contains(&args.fps) {
        eprintln!("Error: fps must be between 1 and 1000 (inclusive).");
        eprintln!("Got: {}", args.fps);
        std::process::exit(1);
    }

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", args.config.display());
            std::process::exit(1);
        }
    };

    init::init(
        config,
        HostOptions {
            fps: args.fps,
            max_frames: (args.frames > 0).then_some(args.frames),
            seed: args.seed,
        },
    );
}
