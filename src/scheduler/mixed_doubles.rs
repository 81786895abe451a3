//! Mixed doubles: each team is one man and one woman.
//!
//! # Algorithm
//!
//! Target `⌊m·k/2⌋` matches (the male count is the basis), bounded by an
//! attempt budget of `target * attempt_factor`. Each attempt:
//!
//! 1. Pools of men and women still below `k` games, least-played first.
//! 2. Stop if either pool has fewer than two players.
//! 3. Draw two men and two women uniformly from the pools.
//! 4. Compare the two possible team splits by existing partnership count;
//!    take the lower, or flip a coin on a tie.
//! 5. Record the match, both partnerships and four games.
//!
//! Players of unspecified gender are never scheduled in this mode.

use std::cmp::Ordering;

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::ledger::{GamesPlayed, PairLedger};
use super::{MatchScheduler, DEFAULT_ATTEMPT_FACTOR};
use crate::error::ScheduleError;
use crate::models::{Gender, Match, Mode, Player, Schedule};
use crate::validation::check_mode_requirements;

/// Greedy mixed-doubles generator.
#[derive(Debug, Clone, Copy)]
pub struct MixedDoublesScheduler {
    attempt_factor: usize,
}

impl MixedDoublesScheduler {
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
}

impl Default for MixedDoublesScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScheduler for MixedDoublesScheduler {
    fn mode(&self) -> Mode {
        Mode::Mixed
    }

    fn generate<R: Rng>(
        &self,
        roster: &[Player],
        k: u32,
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        check_mode_requirements(roster, Mode::Mixed, k)?;

        let males = names_of(roster, Gender::Male);
        let females = names_of(roster, Gender::Female);

        let target = males.len() * k as usize / 2;
        let mut attempts_left = target * self.attempt_factor;
        let mut games = GamesPlayed::new(k);
        let mut partners: PairLedger<&str> = PairLedger::new();
        let mut schedule = Schedule::new();

        while schedule.len() < target && attempts_left > 0 {
            attempts_left -= 1;

            let eligible_males = eligible(&males, &games);
            let eligible_females = eligible(&females, &games);
            let (Some([m1, m2]), Some([f1, f2])) = (
                draw_two(&eligible_males, rng),
                draw_two(&eligible_females, rng),
            ) else {
                debug!(
                    matches = schedule.len(),
                    target,
                    males = eligible_males.len(),
                    females = eligible_females.len(),
                    "mixed doubles ran out of eligible players"
                );
                break;
            };

            let straight = partners.get(&m1, &f1) + partners.get(&m2, &f2);
            let crossed = partners.get(&m1, &f2) + partners.get(&m2, &f1);
            let (f1, f2) = if prefer_crossed(straight, crossed, rng) {
                (f2, f1)
            } else {
                (f1, f2)
            };

            partners.increment(&m1, &f1);
            partners.increment(&m2, &f2);
            for name in [m1, m2, f1, f2] {
                games.record(name);
            }
            schedule.push(Match::doubles([m1, f1], [m2, f2]));
        }

        if schedule.len() < target && attempts_left == 0 {
            debug!(
                matches = schedule.len(),
                target, "mixed doubles attempt budget exhausted"
            );
        }

        Ok(schedule)
    }
}

fn names_of(roster: &[Player], gender: Gender) -> Vec<&str> {
    roster
        .iter()
        .filter(|p| p.gender == gender)
        .map(|p| p.name.as_str())
        .collect()
}

/// Players below the cap, least-played first (stable on ties).
fn eligible<'a>(pool: &[&'a str], games: &GamesPlayed<'_>) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = pool
        .iter()
        .copied()
        .filter(|name| games.has_capacity(name))
        .collect();
    out.sort_by_key(|name| games.get(name));
    out
}

/// Whether the crossed split wins: strictly cheaper, or a coin flip on a tie.
fn prefer_crossed<R: Rng>(straight: u32, crossed: u32, rng: &mut R) -> bool {
    match straight.cmp(&crossed) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => rng.random_bool(0.5),
    }
}

/// Draws two distinct names uniformly; `None` if the pool holds fewer.
fn draw_two<'a, R: Rng>(pool: &[&'a str], rng: &mut R) -> Option<[&'a str; 2]> {
    if pool.len() < 2 {
        return None;
    }
    let mut picked = pool.choose_multiple(rng, 2).copied();
    Some([picked.next()?, picked.next()?])
}
