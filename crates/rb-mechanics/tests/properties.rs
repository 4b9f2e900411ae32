//! Property tests over every ability combination and small unit counts.

use proptest::prelude::*;
use rb_mechanics::{
    AbilityConfig, AttackerAbilities, BattleConfig, DefenderAbilities, IgnoreUse, face_pairs,
    resolve_battle, resolve_scenario,
};

fn abilities_from_bits(bits: u8) -> AbilityConfig {
    let bit = |n: u8| bits & (1 << n) != 0;
    AbilityConfig {
        attacker: AttackerAbilities {
            extra_hit: bit(0),
            ignore_first_hit: bit(1),
            foil_ambush: bit(2),
        },
        defender: DefenderAbilities {
            guerrilla_war: bit(3),
            ignore_first_hit: bit(4),
            ambush: bit(5),
        },
    }
}

fn arb_config() -> impl Strategy<Value = BattleConfig> {
    (0u32..=10, 0u32..=10, 0u8..64).prop_map(|(attackers, defenders, bits)| {
        BattleConfig::new(attackers, defenders).with_abilities(abilities_from_bits(bits))
    })
}

proptest! {
    #[test]
    fn matrix_always_sums_to_144(cfg in arb_config()) {
        let result = resolve_battle(&cfg);
        prop_assert_eq!(result.matrix.total(), 144);
        prop_assert_eq!(result.total_scenarios, 144);
        prop_assert_eq!(result.matrix.size(), cfg.loss_cap() as usize + 1);
    }

    #[test]
    fn resolution_is_idempotent(cfg in arb_config()) {
        prop_assert_eq!(resolve_battle(&cfg), resolve_battle(&cfg));
    }

    #[test]
    fn losses_bounded_by_units(cfg in arb_config()) {
        for faces in face_pairs() {
            let out = resolve_scenario(&cfg, faces);
            prop_assert!(out.attacker_loss <= cfg.attacker_units);
            prop_assert!(out.defender_loss <= cfg.defender_units);
        }
        let result = resolve_battle(&cfg);
        prop_assert!(result.expected_attacker_loss <= f64::from(cfg.attacker_units));
        prop_assert!(result.expected_defender_loss <= f64::from(cfg.defender_units));
    }

    #[test]
    fn attacker_ignore_saves_at_most_one(cfg in arb_config()) {
        let mut with = cfg;
        with.abilities.attacker.ignore_first_hit = true;
        let mut without = cfg;
        without.abilities.attacker.ignore_first_hit = false;

        for faces in face_pairs() {
            let a = resolve_scenario(&with, faces);
            let b = resolve_scenario(&without, faces);
            prop_assert!(a.attacker_loss <= b.attacker_loss);
            prop_assert!(b.attacker_loss - a.attacker_loss <= 1);
        }
    }

    #[test]
    fn ambush_spends_ignore_before_dice(cfg in arb_config()) {
        let mut cfg = cfg;
        cfg.abilities.attacker.ignore_first_hit = true;
        for faces in face_pairs() {
            let out = resolve_scenario(&cfg, faces);
            if cfg.abilities.ambush_triggered() {
                prop_assert_eq!(out.attacker_ignore, IgnoreUse::Ambush);
            } else {
                prop_assert_ne!(out.attacker_ignore, IgnoreUse::Ambush);
            }
        }
    }

    #[test]
    fn empty_armies_lose_nothing(bits in 0u8..64) {
        let cfg = BattleConfig::new(0, 0).with_abilities(abilities_from_bits(bits));
        let result = resolve_battle(&cfg);
        prop_assert_eq!(result.matrix.get(0, 0), 144);
        prop_assert_eq!(result.expected_attacker_loss, 0.0);
        prop_assert_eq!(result.expected_defender_loss, 0.0);
    }
}

#[test]
fn ignore_reduction_with_ambush_and_dice_damage() {
    // Both ambush and dice hit the attacker; the ability still saves exactly one.
    let base = BattleConfig::new(5, 5).with_defender(DefenderAbilities {
        ambush: true,
        ..Default::default()
    });
    let mut with_ignore = base;
    with_ignore.abilities.attacker.ignore_first_hit = true;

    for faces in face_pairs() {
        let a = resolve_scenario(&with_ignore, faces);
        let b = resolve_scenario(&base, faces);
        assert_eq!(b.attacker_loss - a.attacker_loss, 1, "faces {faces}");
    }
}
