//! Feasible games-per-player counts.
//!
//! A `k` is feasible when the total number of player-slots divides evenly
//! into matches:
//!
//! | Mode | Minimum roster | Condition on k |
//! |------|----------------|----------------|
//! | random doubles | 4 players | `n·k ≡ 0 (mod 4)` |
//! | mixed | 2 men, 2 women | `m·k` and `f·k` both even |
//! | singles round-robin | 2 players | multiple of `n − 1` |
//!
//! An empty result means no `k` works; it is not an error.

use crate::models::{Mode, RosterComposition};

/// Default upper bound on `k`.
pub const DEFAULT_MAX_K: u32 = 20;

/// Returns the ascending feasible `k` values in `1..=max_k`.
///
/// # Example
/// ```
/// use u_matchup::feasibility::feasible_k;
/// use u_matchup::models::{Mode, RosterComposition};
///
/// let comp = RosterComposition { players: 6, males: 0, females: 0 };
/// assert_eq!(feasible_k(comp, Mode::RandomDoubles, 8), vec![2, 4, 6, 8]);
/// ```
pub fn feasible_k(comp: RosterComposition, mode: Mode, max_k: u32) -> Vec<u32> {
    let n = comp.players as u64;
    let m = comp.males as u64;
    let f = comp.females as u64;

    match mode {
        Mode::RandomDoubles => {
            if n < 4 {
                return Vec::new();
            }
            (1..=max_k).filter(|&k| (n * k as u64) % 4 == 0).collect()
        }
        Mode::Mixed => {
            if m < 2 || f < 2 {
                return Vec::new();
            }
            (1..=max_k)
                .filter(|&k| (m * k as u64) % 2 == 0 && (f * k as u64) % 2 == 0)
                .collect()
        }
        Mode::SinglesRoundRobin => {
            if n < 2 {
                return Vec::new();
            }
            // One full cycle costs each player n-1 games.
            let step = (n - 1).min(u32::MAX as u64) as u32;
            (1..=max_k).filter(|k| k % step == 0).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> RosterComposition {
        RosterComposition {
            players: n,
            males: 0,
            females: 0,
        }
    }

    fn mixed(m: usize, f: usize) -> RosterComposition {
        RosterComposition {
            players: m + f,
            males: m,
            females: f,
        }
    }

    #[test]
    fn test_random_doubles_eight_players_all_k() {
        let ks = feasible_k(players(8), Mode::RandomDoubles, DEFAULT_MAX_K);
        assert_eq!(ks, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_doubles_three_players_none() {
        assert!(feasible_k(players(3), Mode::RandomDoubles, DEFAULT_MAX_K).is_empty());
    }

    #[test]
    fn test_random_doubles_five_players() {
        // 5k divisible by 4 only when k is a multiple of 4
        let ks = feasible_k(players(5), Mode::RandomDoubles, DEFAULT_MAX_K);
        assert_eq!(ks, vec![4, 8, 12, 16, 20]);
    }

    #[test]
    fn test_mixed_three_men_two_women() {
        let ks = feasible_k(mixed(3, 2), Mode::Mixed, DEFAULT_MAX_K);
        assert_eq!(ks, (2..=20).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_mixed_even_counts_all_k() {
        let ks = feasible_k(mixed(4, 2), Mode::Mixed, DEFAULT_MAX_K);
        assert_eq!(ks.len(), 20);
    }

    #[test]
    fn test_mixed_gender_shortfall() {
        assert!(feasible_k(mixed(5, 1), Mode::Mixed, DEFAULT_MAX_K).is_empty());
        assert!(feasible_k(mixed(1, 5), Mode::Mixed, DEFAULT_MAX_K).is_empty());
    }

    #[test]
    fn test_singles_multiples_of_cycle() {
        let ks = feasible_k(players(4), Mode::SinglesRoundRobin, DEFAULT_MAX_K);
        assert_eq!(ks, vec![3, 6, 9, 12, 15, 18]);

        let ks = feasible_k(players(2), Mode::SinglesRoundRobin, 5);
        assert_eq!(ks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_singles_cycle_longer_than_bound() {
        assert!(feasible_k(players(30), Mode::SinglesRoundRobin, DEFAULT_MAX_K).is_empty());
    }

    #[test]
    fn test_singles_too_small() {
        assert!(feasible_k(players(1), Mode::SinglesRoundRobin, DEFAULT_MAX_K).is_empty());
        assert!(feasible_k(players(0), Mode::SinglesRoundRobin, DEFAULT_MAX_K).is_empty());
    }

    #[test]
    fn test_zero_bound() {
        assert!(feasible_k(players(8), Mode::RandomDoubles, 0).is_empty());
    }
}
