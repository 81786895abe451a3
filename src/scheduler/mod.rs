//! Greedy match schedulers and schedule statistics.
//!
//! One scheduler per mode, each owning a fresh [`PairLedger`] and
//! [`GamesPlayed`] counter for the duration of a single run.
//!
//! # Algorithms
//!
//! - [`RandomDoublesScheduler`]: exhaustive search for the two disjoint
//!   pairs with the fewest prior partnerships.
//! - [`MixedDoublesScheduler`]: random draw of two men and two women, then
//!   the cheaper of the two possible team splits.
//! - [`SinglesRoundRobinScheduler`]: least-met pair first, re-sorted after
//!   every placement.
//!
//! None is optimal; each stops early rather than fail when no valid next
//! match exists.

mod ledger;
mod matchmaker;
mod mixed_doubles;
mod random_doubles;
mod singles;
mod stats;

pub use ledger::{GamesPlayed, PairLedger};
pub use matchmaker::Matchmaker;
pub use mixed_doubles::MixedDoublesScheduler;
pub use random_doubles::RandomDoublesScheduler;
pub use singles::SinglesRoundRobinScheduler;
pub use stats::ScheduleStats;

use rand::Rng;

use crate::error::ScheduleError;
use crate::models::{Mode, Player, Schedule};

/// Default attempt budget multiplier for budgeted schedulers.
pub const DEFAULT_ATTEMPT_FACTOR: usize = 5;

/// A mode-specific match generator.
///
/// Implementations check their own preconditions (roster size, gender
/// counts, parity) and return a possibly short schedule otherwise.
pub trait MatchScheduler {
    /// Mode this scheduler serves.
    fn mode(&self) -> Mode;

    /// Generates matches so that no player exceeds `k` games.
    ///
    /// All random decisions draw from `rng`.
    fn generate<R: Rng>(
        &self,
        roster: &[Player],
        k: u32,
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError>;
}

/// Feasible games-per-player counts with the default configuration.
pub fn list_feasible_k(roster: &[Player], mode: Mode) -> Result<Vec<u32>, ScheduleError> {
    Matchmaker::new().feasible_k(roster, mode)
}

/// Generates a schedule with the default configuration.
pub fn generate_schedule<R: Rng>(
    roster: &[Player],
    mode: Mode,
    k: u32,
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    Matchmaker::new().generate(roster, mode, k, rng)
}
