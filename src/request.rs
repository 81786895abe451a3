//! JSON request/response contract.
//!
//! Transport-free handlers for the two operations a front end calls:
//! listing the feasible `k` values for a roster, and generating a schedule.
//! Bodies are plain JSON; a transport maps [`RequestError::status_code`]
//! and [`ErrorBody`] onto its own response type.
//!
//! ```json
//! {"players": [{"name": "Ann", "gender": "F"}, {"name": "Bo", "gender": "M"}],
//!  "mode": "singles_round_robin", "k": 1}
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ScheduleError;
use crate::models::{Match, Mode, Player};
use crate::scheduler::Matchmaker;

/// Request-layer failure. Every variant is a client error.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not valid JSON for the request type.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Players, mode or a non-zero `k` is missing.
    #[error("Missing parameters")]
    MissingParameters,
    /// Fewer players than the mode's request minimum.
    #[error("at least {min} players are required")]
    RosterTooSmall {
        /// Minimum roster size for the requested mode.
        min: usize,
    },
    /// The scheduler rejected the roster.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl RequestError {
    /// HTTP status a transport should answer with.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// JSON error body for this failure.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Error response shape: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Body of a feasible-`k` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KOptionsRequest {
    /// Roster; gender counts are derived from it.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Requested mode.
    pub mode: Mode,
}

impl KOptionsRequest {
    /// Parses a JSON body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Feasible `k` values, ascending.
    pub fn handle(&self, matchmaker: &Matchmaker) -> Result<Vec<u32>, RequestError> {
        Ok(matchmaker.feasible_k(&self.players, self.mode)?)
    }
}

/// Body of a schedule generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Roster in entry order.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Requested mode.
    #[serde(default)]
    pub mode: Option<Mode>,
    /// Games per player; zero counts as missing.
    #[serde(default)]
    pub k: Option<u32>,
}

/// Successful generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Matches in generation order.
    pub matches: Vec<Match>,
    /// The roster the matches were generated from.
    pub players: Vec<Player>,
}

impl GenerateRequest {
    /// Parses a JSON body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Checks parameters and roster minimums, then generates.
    pub fn handle<R: Rng>(
        self,
        matchmaker: &Matchmaker,
        rng: &mut R,
    ) -> Result<GenerateResponse, RequestError> {
        let (Some(mode), Some(k)) = (self.mode, self.k.filter(|&k| k > 0)) else {
            return Err(RequestError::MissingParameters);
        };
        if self.players.is_empty() {
            return Err(RequestError::MissingParameters);
        }

        let config = matchmaker.config();
        let min = match mode {
            Mode::SinglesRoundRobin => config.min_singles_roster,
            Mode::RandomDoubles | Mode::Mixed => config.min_doubles_roster,
        };
        if self.players.len() < min {
            return Err(RequestError::RosterTooSmall { min });
        }

        let schedule = matchmaker.generate(&self.players, mode, k, rng)?;
        Ok(GenerateResponse {
            matches: schedule.into_matches(),
            players: self.players,
        })
    }
}
