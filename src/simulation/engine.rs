//! The trial loop and its roll sources.
//!
//! [`run_trials`] drives the roll/accumulate/evict loop over one continuous
//! stream of rolls. The remainder left in the window after a trial completes
//! serves as the opening rolls of the next trial (legitimate because rolls
//! are i.i.d.), giving O(1) amortized work per roll. The price is that
//! eviction must loop: one roll can push the sum past the target by more than
//! the single value about to leave the front.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::config::SimulationConfig;

use super::statistics::RollTally;
use super::window::RollWindow;

// ── Roll sources ────────────────────────────────────────────────────

/// A stream of die rolls. The trial loop only ever asks for the next roll,
/// so tests can substitute a scripted sequence for the RNG-backed die.
pub trait RollSource {
    /// The next roll, in `[1, sides]` for whatever die this models.
    fn roll(&mut self) -> u32;
}

/// A fair die backed by [`SmallRng`].
pub struct Die {
    sides: u32,
    rng: SmallRng,
}

impl Die {
    /// A `sides`-faced die seeded with `seed`.
    pub fn new(sides: u32, seed: u64) -> Self {
        Self {
            sides,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RollSource for Die {
    #[inline(always)]
    fn roll(&mut self) -> u32 {
        self.rng.random_range(1..=self.sides)
    }
}

// ── Trial loop ──────────────────────────────────────────────────────

/// Run exactly `config.num_trials` trials, drawing rolls from `source`.
///
/// Callers are expected to have validated `config` first; see
/// [`SimulationConfig::validate`]. No I/O happens here.
pub fn run_trials<S: RollSource>(config: &SimulationConfig, source: &mut S) -> RollTally {
    // Expected window length: target / mean roll = 2 * target / (sides + 1).
    let hint = (config.target_score / (u64::from(config.dice_sides) + 1) * 2 + 4).min(4096);
    let mut window = RollWindow::with_capacity(hint as usize);
    let mut tally = RollTally::new();

    while tally.num_trials() < config.num_trials {
        debug_assert!(
            window.sum() < config.target_score,
            "window sum {} not below target {} before a roll",
            window.sum(),
            config.target_score
        );

        window.push(source.roll());

        // One roll can overshoot by more than the front value it frees up,
        // completing several trials in a row. Stop mid-burst once the
        // requested trial count is reached so the tally totals exactly.
        while window.sum() >= config.target_score && tally.num_trials() < config.num_trials {
            tally.record(window.len() as u64);
            window.evict_front();
        }
    }

    tally
}

/// Outcome of [`simulate`]: the tally plus wall-clock time spent rolling.
pub struct SimulationResult {
    pub tally: RollTally,
    pub elapsed: Duration,
}

/// Build a [`Die`] from the config and run the full set of trials.
pub fn simulate(config: &SimulationConfig, seed: u64) -> SimulationResult {
    let mut die = Die::new(config.dice_sides, seed);
    let start = Instant::now();
    let tally = run_trials(config, &mut die);
    SimulationResult {
        tally,
        elapsed: start.elapsed(),
    }
}
