//! # roll-tally — how many rolls does it take to reach a score?
//!
//! Estimates, by repeated simulation, the distribution of the number of die
//! rolls needed for a cumulative sum to reach a target score, and reports the
//! result as a roll-count histogram in CSV form.
//!
//! ## Algorithm
//!
//! Rolls form one continuous stream. A sliding window holds the rolls
//! contributing to the current trial; each time the window's sum reaches the
//! target, the window length is tallied as one completed trial and the oldest
//! roll is evicted from the front. Because rolls are i.i.d., the tail left in
//! the window is a valid opening for the next trial, so the whole run costs
//! O(1) amortized work per roll instead of restarting every trial from
//! scratch. A single overshooting roll can complete several trials in a row,
//! which is why eviction is a loop rather than a single check.
//!
//! | Concern | Module |
//! |---------|--------|
//! | Configuration & validation | [`config`] |
//! | Trial loop & roll sources | [`simulation::engine`] |
//! | Window bookkeeping | [`simulation::window`] |
//! | Tally, summary stats, CSV/JSON output | [`simulation::statistics`] |

pub mod config;
pub mod simulation;
