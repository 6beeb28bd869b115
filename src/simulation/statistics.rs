//! Roll-count tally and reporting.
//!
//! [`RollTally`] is the histogram the trial loop fills in. This module also
//! derives count-weighted summary statistics from it and writes the two
//! output formats: the CSV table on stdout and an optional JSON summary file.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::config::SimulationConfig;

// ── Tally ───────────────────────────────────────────────────────────

/// Histogram of roll-count → number of trials completing with that count.
///
/// Keys iterate in ascending order; a roll-count that never occurred has no
/// entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RollTally {
    counts: BTreeMap<u64, u64>,
    trials: u64,
}

impl RollTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed trial that took `roll_count` rolls.
    #[inline]
    pub fn record(&mut self, roll_count: u64) {
        *self.counts.entry(roll_count).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Number of trials recorded so far.
    #[inline]
    pub fn num_trials(&self) -> u64 {
        self.trials
    }

    /// `(roll_count, occurrences)` pairs in ascending roll-count order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&rolls, &count)| (rolls, count))
    }

    /// Occurrences recorded for `roll_count` (0 if absent).
    pub fn count_for(&self, roll_count: u64) -> u64 {
        self.counts.get(&roll_count).copied().unwrap_or(0)
    }

    /// Smallest roll-count observed.
    pub fn min_roll_count(&self) -> Option<u64> {
        self.counts.keys().next().copied()
    }

    /// Largest roll-count observed.
    pub fn max_roll_count(&self) -> Option<u64> {
        self.counts.keys().next_back().copied()
    }
}

// ── CSV output ──────────────────────────────────────────────────────

/// Write the tally as CSV: a quoted two-column header, then one
/// `<roll-count>,<count>` row per observed roll-count, ascending.
pub fn write_csv<W: Write>(tally: &RollTally, out: &mut W) -> io::Result<()> {
    writeln!(out, "\"Number of rolls\",\"Count\"")?;
    for (rolls, count) in tally.iter() {
        writeln!(out, "{},{}", rolls, count)?;
    }
    Ok(())
}

// ── Summary statistics ──────────────────────────────────────────────

/// One `(roll-count, occurrences)` histogram entry.
#[derive(Serialize)]
pub struct TallyEntry {
    pub rolls: u64,
    pub count: u64,
}

/// Count-weighted summary of a finished run.
#[derive(Serialize)]
pub struct TallySummary {
    pub num_trials: u64,
    pub seed: u64,
    pub dice_sides: u32,
    pub target_score: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
    pub median: u64,
    pub distribution: Vec<TallyEntry>,
}

/// Derive summary statistics from a tally.
pub fn summarize(tally: &RollTally, config: &SimulationConfig, seed: u64) -> TallySummary {
    let n = tally.num_trials();
    let nf = n as f64;

    let mut mean = 0.0;
    let mut variance = 0.0;
    let mut median = 0;
    if n > 0 {
        let sum: f64 = tally
            .iter()
            .map(|(rolls, count)| rolls as f64 * count as f64)
            .sum();
        mean = sum / nf;
        variance = tally
            .iter()
            .map(|(rolls, count)| count as f64 * (rolls as f64 - mean).powi(2))
            .sum::<f64>()
            / nf;

        // Count-weighted median: first key whose cumulative count reaches n/2.
        let half = n.div_ceil(2);
        let mut cumulative = 0u64;
        for (rolls, count) in tally.iter() {
            cumulative += count;
            if cumulative >= half {
                median = rolls;
                break;
            }
        }
    }

    TallySummary {
        num_trials: n,
        seed,
        dice_sides: config.dice_sides,
        target_score: config.target_score,
        mean,
        std_dev: variance.sqrt(),
        min: tally.min_roll_count().unwrap_or(0),
        max: tally.max_roll_count().unwrap_or(0),
        median,
        distribution: tally
            .iter()
            .map(|(rolls, count)| TallyEntry { rolls, count })
            .collect(),
    }
}

/// Save a summary as pretty-printed JSON, creating parent directories.
pub fn save_summary(summary: &TallySummary, path: &str) -> io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary).expect("Failed to serialize summary");
    std::fs::write(path, json)
}
