mod common;

use common::{quiet_state, seeded_rng};
use spacewar::compute::tick;
use spacewar::entities::*;
use spacewar::player::*;
use spacewar::SimConfig;

fn hit(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    player_hit(state, &mut events);
    events
}

#[test]
fn hit_costs_a_life_and_respawns() {
    let mut s = quiet_state();
    s.player.rect.move_to(100, 200);

    let events = hit(&mut s);

    assert_eq!(events, vec![GameEvent::PlayHit]);
    assert_eq!(s.player.lives, 2);
    assert!(s.player.invulnerable);
    assert_eq!(s.player.invulnerable_ticks, 80);
    assert!(s.player.visible);
    assert_eq!(s.player.rect.position(), (260, 400));
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn hit_while_invulnerable_is_ignored() {
    let mut s = quiet_state();
    hit(&mut s);
    let events = hit(&mut s);
    assert!(events.is_empty());
    assert_eq!(s.player.lives, 2);
}

#[test]
fn last_life_ends_the_game() {
    let mut s = quiet_state();
    s.player.lives = 1;
    s.score = 42;

    let events = hit(&mut s);

    assert_eq!(s.player.lives, 0);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(
        events,
        vec![GameEvent::PlayHit, GameEvent::GameOver { final_score: 42 }]
    );

    // the game is frozen from here on
    let (after, events) = tick(&s, &mut seeded_rng());
    assert!(events.is_empty());
    assert_eq!(after.frame, s.frame);
    let events = hit(&mut s);
    assert!(events.is_empty());
}

#[test]
fn invulnerability_lasts_eighty_ticks() {
    let mut s = quiet_state();
    hit(&mut s);

    for n in 1..80 {
        let (next, _) = tick(&s, &mut seeded_rng());
        s = next;
        assert!(s.player.invulnerable, "vulnerable too early at tick {}", n);
    }

    // a bullet reaching the ship on the 80th tick passes through
    assert!(s.enemy_bullets.fire(270, 390));
    let (s, events) = tick(&s, &mut seeded_rng());
    assert!(events.is_empty());
    assert_eq!(s.player.lives, 2);
    assert!(s.player.invulnerable);

    // the same bullet, still overlapping, lands on the 81st
    let (s, events) = tick(&s, &mut seeded_rng());
    assert_eq!(events, vec![GameEvent::PlayHit]);
    assert_eq!(s.player.lives, 1);
}

#[test]
fn window_ends_visible_and_vulnerable() {
    let mut s = quiet_state();
    hit(&mut s);
    for _ in 0..81 {
        let (next, _) = tick(&s, &mut seeded_rng());
        s = next;
    }
    assert!(!s.player.invulnerable);
    assert!(s.player.visible);
    assert_eq!(s.player.invulnerable_ticks, 0);
}

#[test]
fn sprite_blinks_while_invulnerable() {
    let mut s = quiet_state();
    hit(&mut s);

    let mut seen = Vec::new();
    for _ in 0..79 {
        let (next, _) = tick(&s, &mut seeded_rng());
        s = next;
        seen.push(s.player.visible);
    }
    assert!(seen.contains(&true));
    assert!(seen.contains(&false));
}

#[test]
fn countdown_is_a_no_op_when_vulnerable() {
    let config = SimConfig::default();
    let mut p = new_player(&config);
    tick_invulnerability(&mut p, &config);
    assert!(!p.invulnerable);
    assert!(p.visible);
    assert_eq!(p.invulnerable_ticks, 0);
}

#[test]
fn enemy_bullet_hits_player_during_tick() {
    let mut s = quiet_state();
    // moves 4 + level px down, into the ship
    assert!(s.enemy_bullets.fire(270, 390));

    let (s, events) = tick(&s, &mut seeded_rng());

    assert_eq!(events, vec![GameEvent::PlayHit]);
    assert_eq!(s.player.lives, 2);
    assert_eq!(s.enemy_bullets.active_count(), 0);
}

#[test]
fn new_player_uses_config() {
    let config = SimConfig {
        starting_lives: 5,
        player_start: (100, 300),
        ..SimConfig::default()
    };
    let p = new_player(&config);
    assert_eq!(p.lives, 5);
    assert_eq!(p.rect.position(), (100, 300));
    assert_eq!((p.rect.w, p.rect.h), (40, 40));
}
