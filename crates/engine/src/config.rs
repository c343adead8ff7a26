//! Boot configuration - flags and assembled engine configuration
//!
//! [`BootConfig`] carries the external flags (read-only to the core), and
//! [`EngineConfig`] is the plain-data package handed to the external engine
//! at startup: backend, banner, colors, scale block, session seed.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use canvas_boot_types::{RenderBackend, ScreenProfile};

/// External configuration flags.
///
/// Loaded from JSON (or defaulted); consumed by the surrounding glue, never
/// by the core calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BootConfig {
    pub version: String,
    pub enable_log: bool,
    pub on_debug: bool,
    pub auto_canvas_resize: bool,
    pub active_pointers: u8,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            version: String::from("1.0.0"),
            enable_log: false,
            on_debug: false,
            auto_canvas_resize: true,
            active_pointers: 3,
        }
    }
}

impl BootConfig {
    /// Parse flags from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Scale block of the engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleConfig {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub auto_round: bool,
}

/// The startup package handed to the external engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    pub version: String,
    pub backend: &'static str,
    /// Engine banner suppressed unless logging is enabled.
    pub hide_banner: bool,
    pub background_color: &'static str,
    pub scale: ScaleConfig,
    pub seed: String,
    pub active_pointers: u8,
}

impl EngineConfig {
    /// Assemble the engine configuration from flags, the computed screen
    /// profile, and the host identification string.
    pub fn assemble(config: &BootConfig, profile: &ScreenProfile, user_agent: &str) -> Self {
        Self {
            version: config.version.clone(),
            backend: RenderBackend::detect(user_agent).as_str(),
            hide_banner: !config.enable_log,
            background_color: if config.on_debug { "#74b9ff" } else { "#181818" },
            scale: ScaleConfig {
                width: profile.render_width,
                height: profile.render_height,
                zoom: profile.zoom_factor,
                auto_round: true,
            },
            seed: session_seed(),
            active_pointers: config.active_pointers,
        }
    }
}

/// Session seed string: epoch millis in hex plus a scrambled nanos component.
///
/// The engine only needs a unique-ish string per launch, not cryptographic
/// randomness.
pub fn session_seed() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let millis = now.as_millis() as u64;
    format!("{:x}{:x}", millis, splitmix(now.subsec_nanos() as u64))
}

/// One splitmix64 step, enough to decorrelate the sub-second component.
fn splitmix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e3779b97f4a7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_boot_core::compute_screen_profile;
    use canvas_boot_types::ViewportMetrics;

    #[test]
    fn test_boot_config_defaults() {
        let config = BootConfig::default();
        assert!(config.auto_canvas_resize);
        assert!(!config.enable_log);
        assert!(!config.on_debug);
        assert_eq!(config.active_pointers, 3);
    }

    #[test]
    fn test_boot_config_partial_json() {
        let config = BootConfig::from_json(r#"{"on_debug": true}"#).unwrap();
        assert!(config.on_debug);
        // Unspecified fields keep defaults.
        assert!(config.auto_canvas_resize);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_boot_config_rejects_malformed_json() {
        assert!(BootConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_engine_config_assembly() {
        let config = BootConfig {
            version: String::from("2.3.4"),
            enable_log: false,
            on_debug: false,
            auto_canvas_resize: true,
            active_pointers: 3,
        };
        let profile = compute_screen_profile(ViewportMetrics::new(800.0, 1280.0, 1.0));

        let engine = EngineConfig::assemble(&config, &profile, "Chrome/120.0");
        assert_eq!(engine.version, "2.3.4");
        assert_eq!(engine.backend, "canvas");
        assert!(engine.hide_banner);
        assert_eq!(engine.background_color, "#181818");
        assert_eq!(engine.scale.width, 800);
        assert_eq!(engine.scale.height, 1280);
        assert_eq!(engine.scale.zoom, 1.0);
        assert!(engine.scale.auto_round);
        assert!(!engine.seed.is_empty());
    }

    #[test]
    fn test_debug_flags_flip_colors_and_banner() {
        let config = BootConfig {
            enable_log: true,
            on_debug: true,
            ..BootConfig::default()
        };
        let profile = compute_screen_profile(ViewportMetrics::new(800.0, 1280.0, 1.0));

        let engine = EngineConfig::assemble(&config, &profile, "Firefox/121.0");
        assert!(!engine.hide_banner);
        assert_eq!(engine.background_color, "#74b9ff");
        assert_eq!(engine.backend, "webgl");
    }

    #[test]
    fn test_session_seed_is_hex() {
        let seed = session_seed();
        assert!(!seed.is_empty());
        assert!(seed.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
