//! Schedule quality metrics.
//!
//! Summarizes how close a generated schedule came to the ideal: everyone
//! eligible playing exactly `k` games with no pairing repeated.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Expected matches | `⌊n·k/4⌋`, `⌊m·k/2⌋` or `⌊n·k/2⌋` by mode |
//! | Shortfall | Eligible players with fewer than `k` games |
//! | Repeated pairings | Pairs teamed (doubles) or opposed (singles) more than once |
//! | Max pair count | Most times any single pair was teamed/opposed |

use std::collections::HashMap;

use super::ledger::PairLedger;
use crate::models::{Gender, Mode, Player, RosterComposition, Schedule};

/// Schedule quality indicators.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Games per eligible player (mixed doubles ignores unspecified gender).
    pub games_by_player: HashMap<String, u32>,
    /// Matches the mode aims for.
    pub expected_matches: usize,
    /// Matches actually generated.
    pub actual_matches: usize,
    /// Eligible players below `k`, in roster order.
    pub shortfall: Vec<String>,
    /// Distinct pairs that met more than once.
    pub repeated_pairings: usize,
    /// Largest count for any single pair.
    pub max_pair_count: u32,
}

impl ScheduleStats {
    /// Computes statistics for a schedule generated from `roster`.
    ///
    /// # Arguments
    /// * `schedule` - The generated schedule.
    /// * `roster` - The roster it was generated from.
    /// * `mode` - Mode used; decides which pairs count and who is eligible.
    /// * `k` - Target games per player.
    pub fn calculate(schedule: &Schedule, roster: &[Player], mode: Mode, k: u32) -> Self {
        let comp = RosterComposition::of(roster);
        let expected_matches = match mode {
            Mode::RandomDoubles => comp.players * k as usize / 4,
            Mode::Mixed => comp.males * k as usize / 2,
            Mode::SinglesRoundRobin => comp.players * k as usize / 2,
        };

        let eligible: Vec<&Player> = roster
            .iter()
            .filter(|p| mode != Mode::Mixed || p.gender != Gender::Unspecified)
            .collect();

        let mut games_by_player: HashMap<String, u32> =
            eligible.iter().map(|p| (p.name.clone(), 0)).collect();
        let mut pairs: PairLedger<&str> = PairLedger::new();

        for m in schedule {
            for name in m.players() {
                if let Some(count) = games_by_player.get_mut(name) {
                    *count += 1;
                }
            }
            if mode.is_doubles() {
                for team in [&m.team1, &m.team2] {
                    if let [a, b] = team.as_slice() {
                        pairs.increment(&a.as_str(), &b.as_str());
                    }
                }
            } else if let (Some(a), Some(b)) = (m.team1.first(), m.team2.first()) {
                pairs.increment(&a.as_str(), &b.as_str());
            }
        }

        let shortfall = eligible
            .iter()
            .filter(|p| games_by_player.get(&p.name).copied().unwrap_or(0) < k)
            .map(|p| p.name.clone())
            .collect();

        Self {
            games_by_player,
            expected_matches,
            actual_matches: schedule.len(),
            shortfall,
            repeated_pairings: pairs.iter().filter(|(_, c)| *c > 1).count(),
            max_pair_count: pairs.max_count(),
        }
    }

    /// Whether the schedule reached its match target.
    pub fn is_complete(&self) -> bool {
        self.actual_matches >= self.expected_matches
    }

    /// Whether every eligible player got exactly `k` games.
    pub fn is_balanced(&self) -> bool {
        self.shortfall.is_empty()
    }

    /// Whether no pair was teamed/opposed more than `max_repeats` times.
    pub fn meets_thresholds(&self, max_repeats: u32) -> bool {
        self.max_pair_count <= max_repeats
    }
}
