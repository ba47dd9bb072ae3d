//! Progression driven through real battles: rewards accumulate, level-ups
//! apply their full effect, and the cap freezes growth.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kitchen_clash::battle::{AttackAction, BattleEvent, BattleSession};
use kitchen_clash::character::progression::LEVEL_CAP;
use kitchen_clash::character::{Player, PlayerClass};
use kitchen_clash::enemy::Enemy;

/// A harmless target the test player always one-shots.
fn training_dummy(hp: u32) -> Enemy {
    Enemy::new("Practice Potato", hp, 0, 1, &["Stare", "Wobble"])
}

fn overwhelming_player() -> Player {
    let mut player = Player::new("Alex", PlayerClass::SousChef);
    player.set_creativity(1000);
    player
}

fn win_once(player: Player, enemy_hp: u32, seed: u64) -> (Player, Vec<BattleEvent>) {
    let (mut session, _) =
        BattleSession::start(player, training_dummy(enemy_hp), ChaCha8Rng::seed_from_u64(seed));
    let events = session
        .submit_action(AttackAction::Creative)
        .expect("slot 2 is always unlocked");
    assert!(session.is_over());
    (session.finish(), events)
}

#[test]
fn rewards_accumulate_across_battles() {
    let mut player = overwhelming_player();
    // 20 hp dummy at level 1: reward 20/2 + 10 = 20 per win.
    for expected in [20, 40, 60, 80] {
        let (p, _) = win_once(player, 20, expected as u64);
        player = p;
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), expected);
    }
}

#[test]
fn crossing_the_threshold_levels_once_and_heals() {
    let player = overwhelming_player();
    let stamina_before = player.stats().stamina;

    // 1000 hp dummy: reward 500 + 10, far past the level-1 threshold of 100.
    let (player, events) = win_once(player, 1000, 1);

    assert_eq!(player.level(), 2);
    assert_eq!(player.experience(), 0);
    assert_eq!(player.stats().stamina, stamina_before + 1);
    assert_eq!(player.max_hp(), (stamina_before + 1) * 10);
    assert_eq!(player.hp(), player.max_hp());
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::LevelUp { new_level: 2 })));
}

#[test]
fn level_up_event_reports_post_increment_level() {
    let mut player = overwhelming_player();
    player.gain_experience(99);
    let (player, events) = win_once(player, 2, 4);
    assert!(events
        .iter()
        .any(|e| matches!(e, BattleEvent::LevelUp { new_level } if *new_level == player.level())));
}

#[test]
fn progression_freezes_at_the_cap() {
    let mut player = overwhelming_player();
    let mut wins = 0u32;
    while player.level() < LEVEL_CAP {
        let (p, _) = win_once(player, 2000, wins as u64);
        player = p;
        wins += 1;
        assert!(wins < 50, "level cap never reached");
    }

    let stats_at_cap = *player.stats();
    for seed in 0..3u64 {
        let (p, events) = win_once(player, 2000, 100 + seed);
        player = p;
        assert_eq!(player.level(), LEVEL_CAP);
        assert_eq!(*player.stats(), stats_at_cap);
        assert!(!events.iter().any(|e| matches!(e, BattleEvent::LevelUp { .. })));
        // Experience still accumulates past the frozen threshold.
        assert!(events
            .iter()
            .any(|e| matches!(e, BattleEvent::ExperienceGained { .. })));
    }
    assert!(player.experience() >= player.exp_to_level());
}

#[test]
fn battles_start_at_full_hp_but_progress_carries_over() {
    let mut player = overwhelming_player();
    player.gain_experience(50);
    player.take_damage(30);
    let hp_before = player.hp();

    let (mut session, _) =
        BattleSession::start(player, training_dummy(20), ChaCha8Rng::seed_from_u64(6));
    assert_eq!(session.player().hp(), session.player().max_hp());
    assert_ne!(session.player().hp(), hp_before);
    assert_eq!(session.player().experience(), 50);

    session.submit_action(AttackAction::Creative).unwrap();
    let player = session.finish();
    assert_eq!(player.experience(), 50 + 20);
}
