//! Mode dispatcher.
//!
//! Validates the roster, then hands it to the one scheduler that serves the
//! requested mode. Schedulers share nothing, so each call starts from an
//! empty ledger.

use rand::Rng;
use tracing::debug;

use super::{
    MatchScheduler, MixedDoublesScheduler, RandomDoublesScheduler, SinglesRoundRobinScheduler,
};
use crate::config::MatchupConfig;
use crate::error::ScheduleError;
use crate::feasibility::feasible_k;
use crate::models::{Mode, Player, RosterComposition, Schedule};
use crate::validation::validate_roster;

/// Configurable entry point for feasibility and schedule generation.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_matchup::models::{Mode, Player};
/// use u_matchup::scheduler::Matchmaker;
///
/// let roster: Vec<Player> = ["Ann", "Bo", "Cy", "Di"].into_iter().map(Player::new).collect();
/// let matchmaker = Matchmaker::new();
///
/// let ks = matchmaker.feasible_k(&roster, Mode::SinglesRoundRobin).unwrap();
/// assert_eq!(ks[0], 3);
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let schedule = matchmaker
///     .generate(&roster, Mode::SinglesRoundRobin, 3, &mut rng)
///     .unwrap();
/// assert_eq!(schedule.len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matchmaker {
    config: MatchupConfig,
}

impl Matchmaker {
    /// Creates a matchmaker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: MatchupConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &MatchupConfig {
        &self.config
    }

    /// Ascending feasible games-per-player counts for `roster` in `mode`,
    /// up to the configured `max_k`.
    pub fn feasible_k(&self, roster: &[Player], mode: Mode) -> Result<Vec<u32>, ScheduleError> {
        validate_roster(roster).map_err(ScheduleError::InvalidRoster)?;
        Ok(feasible_k(
            RosterComposition::of(roster),
            mode,
            self.config.max_k,
        ))
    }

    /// Generates a schedule in which each player plays at most `k` games.
    ///
    /// A schedule shorter than the target is a successful result; errors
    /// are only returned for rosters rejected before scheduling starts.
    pub fn generate<R: Rng>(
        &self,
        roster: &[Player],
        mode: Mode,
        k: u32,
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        validate_roster(roster).map_err(ScheduleError::InvalidRoster)?;

        let factor = self.config.attempt_factor;
        let schedule = match mode {
            Mode::RandomDoubles => RandomDoublesScheduler::new().generate(roster, k, rng),
            Mode::Mixed => MixedDoublesScheduler::new()
                .with_attempt_factor(factor)
                .generate(roster, k, rng),
            Mode::SinglesRoundRobin => SinglesRoundRobinScheduler::new()
                .with_attempt_factor(factor)
                .generate(roster, k, rng),
        }?;

        debug!(
            %mode,
            k,
            players = roster.len(),
            matches = schedule.len(),
            "schedule generated"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn roster(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("p{i}"))).collect()
    }

    #[test]
    fn test_dispatch_by_mode() {
        let mm = Matchmaker::new();
        let mut rng = SmallRng::seed_from_u64(1);

        let doubles = mm.generate(&roster(8), Mode::RandomDoubles, 1, &mut rng).unwrap();
        assert!(doubles.iter().all(|m| m.team1.len() == 2));

        let singles = mm
            .generate(&roster(4), Mode::SinglesRoundRobin, 3, &mut rng)
            .unwrap();
        assert!(singles.iter().all(|m| m.team1.len() == 1));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut players = roster(6);
        players.push(Player::new("p0"));
        let mut rng = SmallRng::seed_from_u64(0);

        let err = Matchmaker::new()
            .generate(&players, Mode::RandomDoubles, 4, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRoster(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::DuplicateName
        );

        assert!(Matchmaker::new()
            .feasible_k(&players, Mode::RandomDoubles)
            .is_err());
    }

    #[test]
    fn test_precondition_error_passes_through() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = Matchmaker::new()
            .generate(&roster(5), Mode::Mixed, 2, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Precondition(_)));
    }

    #[test]
    fn test_config_max_k() {
        let mm = Matchmaker::new().with_config(MatchupConfig::default().with_max_k(6));
        let ks = mm.feasible_k(&roster(6), Mode::RandomDoubles).unwrap();
        assert_eq!(ks, vec![2, 4, 6]);
        assert_eq!(mm.config().max_k, 6);
    }

    #[test]
    fn test_config_attempt_factor_reaches_schedulers() {
        let mm = Matchmaker::new().with_config(MatchupConfig::default().with_attempt_factor(0));
        let mut rng = SmallRng::seed_from_u64(0);
        let schedule = mm
            .generate(&roster(4), Mode::SinglesRoundRobin, 3, &mut rng)
            .unwrap();
        assert!(schedule.is_empty());
    }
}
