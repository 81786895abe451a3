//! Matchup domain models.
//!
//! Provides the data types shared by the feasibility calculator, the
//! schedulers, the request layer and the history store.
//!
//! # Domain Mappings
//!
//! | u-matchup | Badminton club | Tennis ladder | Table tennis |
//! |-----------|----------------|---------------|--------------|
//! | Player | Member | Ladder entrant | Player |
//! | Match | Court game | Fixture | Table game |
//! | Schedule | Session draw | Round list | Evening plan |

mod mode;
mod player;
mod schedule;

pub use mode::Mode;
pub use player::{Gender, Player, RosterComposition};
pub use schedule::{Match, Schedule};
