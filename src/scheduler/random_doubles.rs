//! Random doubles: any four players, teammate repeats minimized.
//!
//! # Algorithm
//!
//! Repeated until `⌊n·k/4⌋` matches exist:
//!
//! 1. Collect players still below `k` games (roster order). Stop if fewer
//!    than four remain.
//! 2. Score every unordered pair of them by how often they have already
//!    been teammates; stable-sort ascending.
//! 3. Search for the two disjoint pairs with the lowest combined score,
//!    pruning once a pair alone scores at least the best total, and
//!    stopping outright at a total of zero.
//! 4. Put the winning pairs on court, flipping a coin for which is team 1.
//! 5. Count one game for each of the four and one partnership per team.
//!
//! Opponents are not recorded; only teammates count toward repeats.
//!
//! # Complexity
//! O(p⁴) per match where p = players still below `k`.

use rand::Rng;
use tracing::debug;

use super::ledger::{GamesPlayed, PairLedger};
use super::MatchScheduler;
use crate::error::ScheduleError;
use crate::models::{Match, Mode, Player, Schedule};
use crate::validation::check_mode_requirements;

/// Greedy random-doubles generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDoublesScheduler;

#[derive(Debug, Clone, Copy)]
struct ScoredPair<'a> {
    a: &'a str,
    b: &'a str,
    score: u32,
}

impl<'a> ScoredPair<'a> {
    fn shares_player(&self, other: &ScoredPair<'_>) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    fn names(&self) -> [&'a str; 2] {
        [self.a, self.b]
    }
}

impl RandomDoublesScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl MatchScheduler for RandomDoublesScheduler {
    fn mode(&self) -> Mode {
        Mode::RandomDoubles
    }

    fn generate<R: Rng>(
        &self,
        roster: &[Player],
        k: u32,
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        check_mode_requirements(roster, Mode::RandomDoubles, k)?;

        let target = roster.len() * k as usize / 4;
        let mut games = GamesPlayed::new(k);
        let mut partners: PairLedger<&str> = PairLedger::new();
        let mut schedule = Schedule::new();

        while schedule.len() < target {
            let available: Vec<&str> = roster
                .iter()
                .map(|p| p.name.as_str())
                .filter(|name| games.has_capacity(name))
                .collect();
            if available.len() < 4 {
                debug!(
                    matches = schedule.len(),
                    target,
                    available = available.len(),
                    "random doubles ran out of players"
                );
                break;
            }

            let Some((first, second)) = best_disjoint_pairs(&available, &partners) else {
                debug!(
                    matches = schedule.len(),
                    target, "random doubles found no disjoint pairs"
                );
                break;
            };

            let (team1, team2) = if rng.random_bool(0.5) {
                (second, first)
            } else {
                (first, second)
            };

            for name in team1.into_iter().chain(team2) {
                games.record(name);
            }
            partners.increment(&team1[0], &team1[1]);
            partners.increment(&team2[0], &team2[1]);
            schedule.push(Match::doubles(team1, team2));
        }

        Ok(schedule)
    }
}

/// Finds the two player-disjoint pairs with the lowest combined partnership
/// count. Returns `None` when no two pairs are disjoint.
fn best_disjoint_pairs<'a>(
    available: &[&'a str],
    partners: &PairLedger<&'a str>,
) -> Option<([&'a str; 2], [&'a str; 2])> {
    let mut pairs = Vec::with_capacity(available.len() * available.len().saturating_sub(1) / 2);
    for (i, &a) in available.iter().enumerate() {
        for &b in &available[i + 1..] {
            pairs.push(ScoredPair {
                a,
                b,
                score: partners.get(&a, &b),
            });
        }
    }
    // Stable: equal scores keep enumeration order.
    pairs.sort_by_key(|p| p.score);

    let mut best: Option<(usize, usize, u32)> = None;
    'search: for (i, first) in pairs.iter().enumerate() {
        if let Some((_, _, best_total)) = best {
            // Scores ascend, so no later pair can do better either.
            if first.score >= best_total {
                break;
            }
        }
        for (j, second) in pairs.iter().enumerate().skip(i + 1) {
            if first.shares_player(second) {
                continue;
            }
            let total = first.score + second.score;
            if best.map_or(true, |(_, _, t)| total < t) {
                best = Some((i, j, total));
                if total == 0 {
                    break 'search;
                }
            }
        }
    }

    best.map(|(i, j, _)| (pairs[i].names(), pairs[j].names()))
}
