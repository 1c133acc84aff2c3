use spacewar::compute::init_state;
use spacewar::SimConfig;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn empty_json_keeps_defaults() {
    let config = SimConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config =
        SimConfig::from_json_str(r#"{ "starting_lives": 5, "field_width": 800 }"#).unwrap();
    assert_eq!(config.starting_lives, 5);
    assert_eq!(config.field_width, 800);
    assert_eq!(config.field_height, 480);
    assert_eq!(config.munition_pool, 3);
}

#[test]
fn tuple_fields_parse_from_arrays() {
    let config = SimConfig::from_json_str(r#"{ "player_start": [100, 300] }"#).unwrap();
    assert_eq!(config.player_start, (100, 300));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(SimConfig::from_json_str("{ starting_lives: 5 }").is_err());
    assert!(SimConfig::from_json_str(r#"{ "starting_lives": "many" }"#).is_err());
}

#[test]
fn overridden_config_reaches_the_game() {
    let config = SimConfig::from_json_str(
        r#"{ "starting_lives": 1, "munition_pool": 5, "initial_wave_base": 2 }"#,
    )
    .unwrap();
    let s = init_state(config, &mut StdRng::seed_from_u64(1));
    assert_eq!(s.player.lives, 1);
    assert_eq!(s.munitions.capacity(), 5);
    // 2 + 2 * level
    assert_eq!(s.enemies.len(), 4);
}
