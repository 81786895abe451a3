//! Singles round-robin: 1v1, opponent repeats minimized.
//!
//! # Algorithm
//!
//! The candidate pool is every unordered pair of roster names. Target
//! `⌊n·k/2⌋` matches, bounded by `target * attempt_factor` passes. Each
//! pass re-sorts the pool by how often the pair has met (stable, so ties
//! keep their previous order), places the first pair whose players are
//! both below `k`, and starts over. A pass that finds nobody stops the run.
//!
//! One placement per sort keeps the choice as fair as possible.
//!
//! # Complexity
//! O(target · n² log n).

use rand::Rng;
use tracing::debug;

use super::ledger::{GamesPlayed, PairLedger};
use super::{MatchScheduler, DEFAULT_ATTEMPT_FACTOR};
use crate::error::ScheduleError;
use crate::models::{Match, Mode, Player, Schedule};
use crate::validation::check_mode_requirements;

/// Greedy singles round-robin generator. Uses no randomness.
#[derive(Debug, Clone, Copy)]
pub struct SinglesRoundRobinScheduler {
    attempt_factor: usize,
}

impl SinglesRoundRobinScheduler {
    /// Creates the scheduler with the default attempt budget.
    pub fn new() -> Self {
        Self {
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
        }
    }

    /// Sets the attempt budget multiplier.
    pub fn with_attempt_factor(mut self, factor: usize) -> Self {
        self.attempt_factor = factor;
        self
    }

    /// Generates without a random source.
    pub fn generate_fixed(&self, roster: &[Player], k: u32) -> Result<Schedule, ScheduleError> {
        check_mode_requirements(roster, Mode::SinglesRoundRobin, k)?;

        let target = roster.len() * k as usize / 2;
        let mut attempts_left = target * self.attempt_factor;
        let mut games = GamesPlayed::new(k);
        let mut opponents: PairLedger<&str> = PairLedger::new();
        let mut schedule = Schedule::new();

        let mut pool: Vec<(&str, &str)> = Vec::new();
        for (i, a) in roster.iter().enumerate() {
            for b in &roster[i + 1..] {
                pool.push((a.name.as_str(), b.name.as_str()));
            }
        }

        while schedule.len() < target && attempts_left > 0 {
            attempts_left -= 1;

            pool.sort_by_key(|(a, b)| opponents.get(a, b));
            let Some(&(a, b)) = pool
                .iter()
                .find(|(a, b)| games.has_capacity(a) && games.has_capacity(b))
            else {
                debug!(
                    matches = schedule.len(),
                    target, "singles found no eligible pair"
                );
                break;
            };

            games.record(a);
            games.record(b);
            opponents.increment(&a, &b);
            schedule.push(Match::singles(a, b));
        }

        Ok(schedule)
    }
}

impl Default for SinglesRoundRobinScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScheduler for SinglesRoundRobinScheduler {
    fn mode(&self) -> Mode {
        Mode::SinglesRoundRobin
    }

    fn generate<R: Rng>(
        &self,
        roster: &[Player],
        k: u32,
        _rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        self.generate_fixed(roster, k)
    }
}
