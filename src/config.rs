//! Simulation configuration.
//!
//! All knobs are passed explicitly into the simulator; there is no
//! process-wide mutable state. Invalid values are rejected up front with a
//! [`ConfigError`] before any rolling starts.

use std::error::Error;
use std::fmt;

/// Die face count used when none is given on the command line.
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// Target score used when none is given on the command line.
pub const DEFAULT_TARGET_SCORE: u64 = 120;

/// Trial count used when none is given on the command line.
pub const DEFAULT_NUM_TRIALS: u64 = 1_000_000;

/// Configuration for one simulation run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Faces on the die; rolls are uniform in `[1, dice_sides]`.
    pub dice_sides: u32,
    /// Cumulative sum a trial must reach or exceed.
    pub target_score: u64,
    /// Number of completed trials to record.
    pub num_trials: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dice_sides: DEFAULT_DICE_SIDES,
            target_score: DEFAULT_TARGET_SCORE,
            num_trials: DEFAULT_NUM_TRIALS,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations the trial loop cannot run with. All three values
    /// must be positive; `target_score` smaller than a single roll is legal
    /// and simply yields roll-count-1 trials.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_sides < 1 {
            return Err(ConfigError::DiceSides(self.dice_sides));
        }
        if self.target_score < 1 {
            return Err(ConfigError::TargetScore(self.target_score));
        }
        if self.num_trials < 1 {
            return Err(ConfigError::NumTrials(self.num_trials));
        }
        Ok(())
    }
}

/// A rejected configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    DiceSides(u32),
    TargetScore(u64),
    NumTrials(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DiceSides(n) => write!(f, "dice must have at least 1 side (got {})", n),
            ConfigError::TargetScore(n) => write!(f, "target score must be positive (got {})", n),
            ConfigError::NumTrials(n) => write!(f, "trial count must be positive (got {})", n),
        }
    }
}

impl Error for ConfigError {}
