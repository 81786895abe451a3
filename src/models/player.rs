//! Player model.
//!
//! A player is identified by name alone. Gender is only consulted by the
//! mixed-doubles scheduler and the feasibility calculator.

use serde::{Deserialize, Serialize};

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique identity within a roster.
    pub name: String,
    /// Declared gender. Unknown values deserialize to `Unspecified`.
    #[serde(default)]
    pub gender: Gender,
}

/// Player gender as used by mixed doubles.
///
/// Wire form is `"M"`, `"F"` or anything else for unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// `"M"`.
    Male,
    /// `"F"`.
    Female,
    /// Not declared, or any other value.
    #[default]
    Unspecified,
}

impl Gender {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unspecified => "unspecified",
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.as_str() {
            "M" => Gender::Male,
            "F" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.as_str().to_string()
    }
}

impl Player {
    /// Creates a player with unspecified gender.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: Gender::Unspecified,
        }
    }

    /// Creates a male player.
    pub fn male(name: impl Into<String>) -> Self {
        Self::new(name).with_gender(Gender::Male)
    }

    /// Creates a female player.
    pub fn female(name: impl Into<String>) -> Self {
        Self::new(name).with_gender(Gender::Female)
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

/// Head counts of a roster, as consumed by the feasibility calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterComposition {
    /// Total number of players.
    pub players: usize,
    /// Players declared `M`.
    pub males: usize,
    /// Players declared `F`.
    pub females: usize,
}

impl RosterComposition {
    /// Counts a roster.
    pub fn of(roster: &[Player]) -> Self {
        roster.iter().fold(Self::default(), |mut acc, p| {
            acc.players += 1;
            match p.gender {
                Gender::Male => acc.males += 1,
                Gender::Female => acc.females += 1,
                Gender::Unspecified => {}
            }
            acc
        })
    }
}
