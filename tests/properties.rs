//! Invariants that hold for every roster, mode and seed.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_matchup::feasibility::feasible_k;
use u_matchup::models::{Gender, Mode, Player, RosterComposition};
use u_matchup::scheduler::{Matchmaker, ScheduleStats};

fn roster(genders: &[u8]) -> Vec<Player> {
    genders
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let gender = match g % 3 {
                0 => Gender::Male,
                1 => Gender::Female,
                _ => Gender::Unspecified,
            };
            Player::new(format!("player{i}")).with_gender(gender)
        })
        .collect()
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::RandomDoubles),
        Just(Mode::Mixed),
        Just(Mode::SinglesRoundRobin),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn games_never_exceed_k(
        genders in prop::collection::vec(0u8..3, 2..14),
        mode in mode_strategy(),
        k in 1u32..7,
        seed in any::<u64>(),
    ) {
        let players = roster(&genders);
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(schedule) = Matchmaker::new().generate(&players, mode, k, &mut rng) {
            for p in &players {
                prop_assert!(schedule.games_for(&p.name) <= k as usize);
            }
            let stats = ScheduleStats::calculate(&schedule, &players, mode, k);
            prop_assert!(stats.actual_matches <= stats.expected_matches);
        }
    }

    #[test]
    fn matches_are_well_formed(
        genders in prop::collection::vec(0u8..3, 2..14),
        mode in mode_strategy(),
        k in 1u32..7,
        seed in any::<u64>(),
    ) {
        let players = roster(&genders);
        let names: HashSet<&str> = players.iter().map(|p| p.name.as_str()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(schedule) = Matchmaker::new().generate(&players, mode, k, &mut rng) {
            for m in &schedule {
                prop_assert!(m.is_well_formed());
                prop_assert_eq!(m.team1.len(), mode.team_size());
                prop_assert_eq!(m.team2.len(), mode.team_size());
                prop_assert!(m.players().all(|n| names.contains(n)));
            }
        }
    }

    #[test]
    fn mixed_teams_pair_a_man_with_a_woman(
        genders in prop::collection::vec(0u8..3, 4..14),
        k in 1u32..7,
        seed in any::<u64>(),
    ) {
        let players = roster(&genders);
        let gender_of = |name: &str| {
            players.iter().find(|p| p.name == name).map(|p| p.gender)
        };
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(schedule) = Matchmaker::new().generate(&players, Mode::Mixed, k, &mut rng) {
            for m in &schedule {
                for team in [&m.team1, &m.team2] {
                    prop_assert_eq!(gender_of(team[0].as_str()), Some(Gender::Male));
                    prop_assert_eq!(gender_of(team[1].as_str()), Some(Gender::Female));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_schedule(
        genders in prop::collection::vec(0u8..3, 2..12),
        mode in mode_strategy(),
        k in 1u32..5,
        seed in any::<u64>(),
    ) {
        let players = roster(&genders);
        let mm = Matchmaker::new();
        let a = mm.generate(&players, mode, k, &mut SmallRng::seed_from_u64(seed));
        let b = mm.generate(&players, mode, k, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn feasible_k_divides_evenly(
        genders in prop::collection::vec(0u8..3, 0..16),
        mode in mode_strategy(),
    ) {
        let comp = RosterComposition::of(&roster(&genders));
        for k in feasible_k(comp, mode, 20) {
            prop_assert!((1..=20).contains(&k));
            match mode {
                Mode::RandomDoubles => prop_assert_eq!(comp.players * k as usize % 4, 0),
                Mode::Mixed => {
                    prop_assert_eq!(comp.males * k as usize % 2, 0);
                    prop_assert_eq!(comp.females * k as usize % 2, 0);
                }
                Mode::SinglesRoundRobin => {
                    prop_assert_eq!(comp.players * k as usize % 2, 0);
                    prop_assert!(k as usize >= comp.players.saturating_sub(1));
                }
            }
        }
    }
}
