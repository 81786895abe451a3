//! Session modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session pairs players into matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// 2v2, any players, teammate repeats minimized.
    RandomDoubles,
    /// 2v2, one man and one woman per team.
    Mixed,
    /// 1v1, opponent repeats minimized.
    #[serde(alias = "singles_robin")]
    SinglesRoundRobin,
}

impl Mode {
    /// Players per team.
    pub fn team_size(&self) -> usize {
        match self {
            Mode::RandomDoubles | Mode::Mixed => 2,
            Mode::SinglesRoundRobin => 1,
        }
    }

    /// Smallest roster the scheduler for this mode accepts.
    pub fn min_players(&self) -> usize {
        self.team_size() * 2
    }

    /// Whether the mode plays two-per-side.
    pub fn is_doubles(&self) -> bool {
        self.team_size() == 2
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::RandomDoubles => "random_doubles",
            Mode::Mixed => "mixed",
            Mode::SinglesRoundRobin => "singles_round_robin",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let m: Mode = serde_json::from_str(r#""random_doubles""#).unwrap();
        assert_eq!(m, Mode::RandomDoubles);
        let m: Mode = serde_json::from_str(r#""singles_round_robin""#).unwrap();
        assert_eq!(m, Mode::SinglesRoundRobin);
        assert_eq!(serde_json::to_string(&Mode::Mixed).unwrap(), r#""mixed""#);
    }

    #[test]
    fn test_legacy_singles_alias() {
        let m: Mode = serde_json::from_str(r#""singles_robin""#).unwrap();
        assert_eq!(m, Mode::SinglesRoundRobin);
    }

    #[test]
    fn test_min_players() {
        assert_eq!(Mode::RandomDoubles.min_players(), 4);
        assert_eq!(Mode::Mixed.min_players(), 4);
        assert_eq!(Mode::SinglesRoundRobin.min_players(), 2);
    }
}
