//! Boot configuration loading and engine config assembly.

use canvas_boot::core::compute_screen_profile;
use canvas_boot::engine::{BootConfig, EngineConfig};
use canvas_boot::types::ViewportMetrics;

#[test]
fn test_full_json_round_trip() {
    let json = r#"{
        "version": "0.9.1",
        "enable_log": true,
        "on_debug": false,
        "auto_canvas_resize": false,
        "active_pointers": 2
    }"#;

    let config = BootConfig::from_json(json).unwrap();
    assert_eq!(config.version, "0.9.1");
    assert!(config.enable_log);
    assert!(!config.auto_canvas_resize);
    assert_eq!(config.active_pointers, 2);

    let back = serde_json::to_string(&config).unwrap();
    let again = BootConfig::from_json(&back).unwrap();
    assert_eq!(config, again);
}

#[test]
fn test_empty_object_is_all_defaults() {
    let config = BootConfig::from_json("{}").unwrap();
    assert_eq!(config, BootConfig::default());
}

#[test]
fn test_assembled_scale_block_tracks_profile() {
    let config = BootConfig::default();
    let profile = compute_screen_profile(ViewportMetrics::new(414.0, 896.0, 2.0));
    let engine = EngineConfig::assemble(&config, &profile, "Safari/605.1");

    assert_eq!(engine.scale.width, profile.render_width);
    assert_eq!(engine.scale.height, profile.render_height);
    assert_eq!(engine.scale.zoom, profile.zoom_factor);
    assert_eq!(engine.backend, "canvas");
}

#[test]
fn test_session_seed_generation() {
    let seed = canvas_boot::engine::config::session_seed();

    // Hex shape: an epoch-millis prefix (11 hex digits for any date between
    // 2004 and 2527) plus at least one digit of scrambled nanos.
    assert!(seed.len() >= 12, "seed too short: {seed}");
    assert!(seed.len() <= 11 + 16, "seed too long: {seed}");
    assert!(u128::from_str_radix(&seed, 16).is_ok());

    // Distinctness: the nanos component separates calls as soon as the
    // clock advances at all.
    let mut distinct = false;
    for _ in 0..100_000 {
        if canvas_boot::engine::config::session_seed() != seed {
            distinct = true;
            break;
        }
    }
    assert!(distinct, "seed never changed across repeated calls");
}
