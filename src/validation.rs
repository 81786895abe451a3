//! Input validation for match generation.
//!
//! Checks a roster before any scheduling work begins. Detects:
//! - Blank player names
//! - Duplicate player names (names are the identity key, so two entries
//!   with one name would silently share counters)
//! - Rosters too small for the requested mode
//! - Mixed doubles without two players of each gender
//! - Singles requests whose total player-slots cannot be split into pairs
//! - A zero games target

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Mode, Player, RosterComposition};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A player has an empty or whitespace-only name.
    BlankName,
    /// Two players share the same name.
    DuplicateName,
    /// Fewer players than the mode needs for a single match.
    RosterTooSmall,
    /// Mixed doubles needs at least two men and two women.
    GenderShortfall,
    /// `players * k` is odd, so singles matches cannot cover every slot.
    OddSlotTotal,
    /// The games target must be at least one.
    ZeroGames,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates roster structure.
///
/// Checks:
/// 1. Every name is non-blank
/// 2. No name appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Player]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, player) in roster.iter().enumerate() {
        if player.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Player at position {idx} has a blank name"),
            ));
            continue;
        }
        if !seen.insert(player.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate player name: {}", player.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the preconditions a scheduler enforces for its mode.
///
/// Narrower than feasibility: a `k` that does not divide evenly still
/// schedules (producing a short result) unless the mode names it as a hard
/// precondition.
pub fn check_mode_requirements(
    roster: &[Player],
    mode: Mode,
    k: u32,
) -> Result<(), ValidationError> {
    if k == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::ZeroGames,
            "Games per player must be at least 1",
        ));
    }

    let comp = RosterComposition::of(roster);
    match mode {
        Mode::RandomDoubles | Mode::SinglesRoundRobin if comp.players < mode.min_players() => {
            Err(ValidationError::new(
                ValidationErrorKind::RosterTooSmall,
                format!(
                    "{mode} needs at least {} players, got {}",
                    mode.min_players(),
                    comp.players
                ),
            ))
        }
        Mode::Mixed if comp.males < 2 || comp.females < 2 => Err(ValidationError::new(
            ValidationErrorKind::GenderShortfall,
            format!(
                "mixed doubles needs at least 2 men and 2 women, got {} and {}",
                comp.males, comp.females
            ),
        )),
        Mode::SinglesRoundRobin if (comp.players as u64 * k as u64) % 2 != 0 => {
            Err(ValidationError::new(
                ValidationErrorKind::OddSlotTotal,
                format!(
                    "players ({}) times games per player ({k}) must be even for singles",
                    comp.players
                ),
            ))
        }
        _ => Ok(()),
    }
}
