use super::*;
use pretty_assertions::assert_eq;

fn unit() -> Unit {
    Unit::new(1, PlayerId::new(1), Location::new(0, 0), 3)
}

#[test]
fn fresh_unit_can_act_once_per_turn() {
    let mut u = unit();
    u.on_new_turn();
    assert!(u.can_act());
    assert!(u.try_act());
    assert!(!u.can_act());
    assert!(!u.try_act());

    u.on_new_turn();
    assert!(u.try_act());
    assert_eq!(u.turn(), 2);
}

#[test]
fn spawn_resolves_after_three_own_turns() {
    let mut u = unit();
    u.on_new_turn();
    assert!(u.try_act());
    u.set_spawn(3);

    assert_eq!(u.on_new_turn(), TurnStart::default());
    assert!(!u.can_act());
    assert_eq!(u.on_new_turn(), TurnStart::default());
    assert!(!u.can_act());

    let start = u.on_new_turn();
    assert!(start.spawn_ready);
    assert_eq!(start.charge_damage, None);
    assert!(u.can_act());
}

#[test]
fn charge_of_two_turns_lands_six_damage() {
    let mut u = unit();
    u.on_new_turn();
    u.begin_charge(2);

    assert_eq!(u.on_new_turn().charge_damage, None);
    assert!(!u.can_act());
    assert_eq!(u.on_new_turn().charge_damage, Some(6));
    assert!(u.can_act());

    // Strength resets once the hit lands.
    u.begin_charge(1);
    assert_eq!(u.on_new_turn().charge_damage, Some(3));
}

#[test]
fn charge_damage_grows_triangularly() {
    assert_eq!(charge_damage(0), 1);
    assert_eq!(charge_damage(1), 3);
    assert_eq!(charge_damage(2), 6);
    assert_eq!(charge_damage(3), 10);
}

#[test]
fn defend_blocks_exactly_one_attack() {
    let mut u = unit();
    u.defend();
    assert_eq!(u.damage(5), Damage::Blocked);
    assert_eq!(u.hp(), 3);
    assert_eq!(u.damage(1), Damage::Wounded { hp: 2 });
}

#[test]
fn defense_expires_at_next_own_turn() {
    let mut u = unit();
    u.defend();
    u.on_new_turn();
    assert!(!u.is_defending());
    assert_eq!(u.damage(1), Damage::Wounded { hp: 2 });
}

#[test]
fn damage_kills_at_zero_hp() {
    let mut u = unit();
    assert_eq!(u.damage(2), Damage::Wounded { hp: 1 });
    assert_eq!(u.damage(1), Damage::Killed);

    let mut u = unit();
    assert_eq!(u.damage(10), Damage::Killed);
}

#[test]
fn fortify_has_no_cap() {
    let mut u = unit();
    for _ in 0..5 {
        u.fortify();
    }
    assert_eq!(u.hp(), 8);
}

#[test]
fn env_is_lent_and_restored() {
    let mut u = unit();
    let mut env = u.take_env();
    let name = bot_ir::StringInterner::new().intern("x");
    env.define(name, bot_ir::Value::Int(1));
    u.restore_env(env);
    assert_eq!(u.env().lookup(name), Some(bot_ir::Value::Int(1)));
}
