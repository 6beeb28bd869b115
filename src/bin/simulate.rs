//! roll-tally: estimate the distribution of rolls needed to reach a target.
//!
//! Rolls a die repeatedly, tallies how many rolls each trial needed for its
//! cumulative sum to reach the target, and prints the histogram as CSV on
//! stdout. Timing and progress go to stderr so the CSV stream stays clean.

use std::io::{self, Write};

use roll_tally::config::{
    SimulationConfig, DEFAULT_DICE_SIDES, DEFAULT_NUM_TRIALS, DEFAULT_TARGET_SCORE,
};
use roll_tally::simulation::{save_summary, simulate, summarize, write_csv};

fn print_usage() {
    println!("Usage: roll-tally [--sides N] [--target N] [--trials N] [--seed S] [--stats PATH]");
    println!();
    println!("Options:");
    println!("  --sides N     Die face count (default: {})", DEFAULT_DICE_SIDES);
    println!(
        "  --target N    Cumulative score a trial must reach (default: {})",
        DEFAULT_TARGET_SCORE
    );
    println!(
        "  --trials N    Number of trials to simulate (default: {})",
        DEFAULT_NUM_TRIALS
    );
    println!("  --seed S      RNG seed (default: drawn from OS entropy)");
    println!("  --stats PATH  Also write a JSON summary to PATH");
}

fn parse_args() -> (SimulationConfig, Option<u64>, Option<String>) {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimulationConfig::default();
    let mut seed: Option<u64> = None;
    let mut stats: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sides" => {
                i += 1;
                if i < args.len() {
                    config.dice_sides = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --sides value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--target" => {
                i += 1;
                if i < args.len() {
                    config.target_score = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --target value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    config.num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--stats" => {
                i += 1;
                if i < args.len() {
                    stats = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: roll-tally [--sides N] [--target N] [--trials N] [--seed S] [--stats PATH]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, seed, stats)
}

fn main() {
    let (config, seed_arg, stats_path) = parse_args();

    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        std::process::exit(1);
    }

    // Reproducible runs opt in with --seed; otherwise seed from entropy.
    let seed = seed_arg.unwrap_or_else(rand::random);

    eprintln!(
        "Rolling a d{} to {} ({} trials, seed {})...",
        config.dice_sides, config.target_score, config.num_trials, seed
    );

    let result = simulate(&config, seed);

    let elapsed_ms = result.elapsed.as_secs_f64() * 1000.0;
    let per_trial_ns = result.elapsed.as_secs_f64() * 1e9 / config.num_trials as f64;
    let throughput = config.num_trials as f64 / result.elapsed.as_secs_f64();
    eprintln!("  Elapsed:     {:.1} ms", elapsed_ms);
    eprintln!("  Per trial:   {:.0} ns", per_trial_ns);
    eprintln!("  Throughput:  {:.0} trials/sec", throughput);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(err) = write_csv(&result.tally, &mut out).and_then(|()| out.flush()) {
        eprintln!("Failed to write results: {}", err);
        std::process::exit(1);
    }

    if let Some(path) = stats_path {
        let summary = summarize(&result.tally, &config, seed);
        if let Err(err) = save_summary(&summary, &path) {
            eprintln!("Failed to write {}: {}", path, err);
            std::process::exit(1);
        }
        eprintln!("  Summary:     {}", path);
    }
}
