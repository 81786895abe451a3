//! Schedule (solution) model.
//!
//! A schedule is the ordered list of matches produced by one scheduler run.
//! Matches appear in generation order; nothing re-sorts them afterwards.

use serde::{Deserialize, Serialize};

/// One game: two teams of equal size (1 for singles, 2 for doubles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// First side, by player name.
    pub team1: Vec<String>,
    /// Second side, same arity as `team1`.
    pub team2: Vec<String>,
}

impl Match {
    /// Creates a singles match.
    pub fn singles(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            team1: vec![a.into()],
            team2: vec![b.into()],
        }
    }

    /// Creates a doubles match from two teams.
    pub fn doubles(team1: [&str; 2], team2: [&str; 2]) -> Self {
        Self {
            team1: team1.iter().map(|s| s.to_string()).collect(),
            team2: team2.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// All names on court, team1 first.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.team1.iter().chain(self.team2.iter()).map(String::as_str)
    }

    /// Whether the named player takes part.
    pub fn involves(&self, name: &str) -> bool {
        self.players().any(|p| p == name)
    }

    /// Whether the match is structurally sound: equal non-empty arity of at
    /// most two, and no name appearing twice on court.
    pub fn is_well_formed(&self) -> bool {
        let arity = self.team1.len();
        if arity == 0 || arity > 2 || self.team2.len() != arity {
            return false;
        }
        let names: Vec<&str> = self.players().collect();
        names
            .iter()
            .enumerate()
            .all(|(i, a)| names[i + 1..].iter().all(|b| a != b))
    }
}

/// The output of one scheduler run.
///
/// Read-only once returned: only the schedulers in this crate append to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    matches: Vec<Match>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Matches in generation order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Iterates over matches in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Consumes the schedule, returning its matches.
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match was generated.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches the named player appears in.
    pub fn games_for(&self, name: &str) -> usize {
        self.matches.iter().filter(|m| m.involves(name)).count()
    }

    /// Matches involving the named player.
    pub fn matches_for(&self, name: &str) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.involves(name)).collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
