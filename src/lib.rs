//! Match generation for racket-sport sessions.
//!
//! Assigns a roster of players to matches (random doubles, mixed doubles,
//! singles round-robin) so that each player plays a target number of games
//! `k` while repeated teammates or opponents are kept to a minimum.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `Gender`, `Mode`, `Match`, `Schedule`
//! - **`feasibility`**: Which `k` values divide evenly for a roster and mode
//! - **`scheduler`**: Greedy per-mode schedulers, the `Matchmaker`
//!   dispatcher, pairing ledger and schedule statistics
//! - **`validation`**: Roster and per-mode precondition checks
//! - **`request`**: JSON request/response contract for the two operations
//! - **`history`**: JSON-file store of generated schedules
//! - **`config`**: Tunable constants, loadable from TOML
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_matchup::{generate_schedule, list_feasible_k};
//! use u_matchup::models::{Mode, Player};
//!
//! let roster: Vec<Player> = (1..=8).map(|i| Player::new(format!("P{i}"))).collect();
//! let ks = list_feasible_k(&roster, Mode::RandomDoubles).unwrap();
//! assert!(ks.contains(&2));
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let schedule = generate_schedule(&roster, Mode::RandomDoubles, 2, &mut rng).unwrap();
//! assert_eq!(schedule.len(), 4);
//! ```
//!
//! Every random decision draws from the caller's `rand::Rng`, so a seeded
//! generator reproduces a schedule exactly.

pub mod config;
pub mod error;
pub mod feasibility;
pub mod history;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use scheduler::{generate_schedule, list_feasible_k};
