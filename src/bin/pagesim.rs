//! `pagesim` - Simulate page-replacement policies from the command line.
//!
//! **Usage:**
//! ```text
//! pagesim [--refs <LIST>] [--random] [--seed <N>] [--frames <N>]
//!         [--policy fifo|lru|optimal|all] [--grid] [-v]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::common::config::{DEFAULT_FRAMES, DEFAULT_REFERENCE_STRING};
use pagesim::reference::{generate, parse_frame_count, parse_input, GeneratorConfig};
use pagesim::report::{render_comparison, render_comparison_grids, render_grid, render_single};
use pagesim::{compare_all, simulate, PolicyKind};

/// Simulate FIFO, LRU and Optimal page replacement over a reference string.
#[derive(Parser)]
#[command(name = "pagesim", version, about)]
struct Args {
    /// Comma-separated page references.
    #[arg(long, default_value = DEFAULT_REFERENCE_STRING)]
    refs: String,

    /// Ignore --refs and generate a random reference string.
    #[arg(long)]
    random: bool,

    /// Seed for --random (default: from entropy).
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Number of frames.
    #[arg(long, default_value_t = DEFAULT_FRAMES.to_string())]
    frames: String,

    /// Policy to run: fifo, lru, optimal, or all.
    #[arg(long, default_value = "all")]
    policy: String,

    /// Also print the page-by-step residency grid (one per policy with `all`).
    #[arg(long)]
    grid: bool,

    /// Log simulation details (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (refs, frames) = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let frames = parse_frame_count(&args.frames).context("invalid frame count")?;
        (generate(&mut rng, &GeneratorConfig::default()), frames)
    } else {
        parse_input(&args.refs, &args.frames).context("invalid input")?
    };

    if args.policy.trim().eq_ignore_ascii_case("all") {
        let comparison = compare_all(&refs, frames);
        print!("{}", render_comparison(&refs, frames, &comparison));
        if args.grid {
            println!();
            print!("{}", render_comparison_grids(&comparison));
        }
        return Ok(());
    }

    let policy: PolicyKind = args.policy.parse().context("invalid --policy")?;
    let result = simulate(policy, &refs, frames);
    print!("{}", render_single(&refs, frames, &result));
    println!("Trace checksum: {:08x}", result.checksum());

    if args.grid {
        println!();
        print!("{}", render_grid(&result));
    }

    Ok(())
}
