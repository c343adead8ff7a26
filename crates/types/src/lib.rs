//! Shared types module - data structures and constants for the boot pipeline
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine glue, host shell).
//!
//! # Display Scaling Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `COMPACT_WIDTH_PX` | 480 | Below this raw width the device counts as compact |
//! | `LANDSCAPE_WIDTH_RATIO` | 0.75 | Landscape width override (portrait play area) |
//! | `MIN_VIEWPORT_PX` | 1.0 | Floor applied to pathological raw dimensions |
//!
//! # Score Cadence Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SCORE_STEP` | 5 | Points granted per completed interval |
//! | `BASE_SCORE_INTERVAL` | 500.0 | Countdown replenished after each grant |
//! | `SCORE_DECAY_RATE` | 0.6 | Elapsed-time multiplier applied to the countdown |
//!
//! # Resize Debounce Windows
//!
//! Raw resize signals are collapsed into one effective signal per quiet
//! period. Touch handhelds report long bursts during orientation changes,
//! so they get a wider window:
//!
//! - `RESIZE_DEBOUNCE_TOUCH_MS`: 380ms on touch handhelds
//! - `RESIZE_DEBOUNCE_DESKTOP_MS`: 50ms everywhere else
//!
//! # Examples
//!
//! ```
//! use canvas_boot_types::{Platform, RenderBackend, ViewportMetrics};
//!
//! let metrics = ViewportMetrics::new(414.0, 896.0, 2.0);
//! assert!(metrics.raw_width < 480.0);
//!
//! let platform = Platform::detect("Mozilla/5.0 (iPhone; CPU iPhone OS 15_0)");
//! assert_eq!(platform, Platform::TouchHandheld);
//! assert_eq!(platform.debounce_window_ms(), 380);
//!
//! let backend = RenderBackend::detect("Mozilla/5.0 Gecko/20100101 Firefox/121.0");
//! assert_eq!(backend, RenderBackend::WebGl);
//! ```

/// Raw width below which a device counts as compact (pixel-ratio scaling kicks in)
pub const COMPACT_WIDTH_PX: f64 = 480.0;

/// Width override ratio on landscape screens (3/4 of height, portrait play area)
pub const LANDSCAPE_WIDTH_RATIO: f64 = 0.75;

/// Floor applied to zero/negative/non-finite raw dimensions before computing
pub const MIN_VIEWPORT_PX: f64 = 1.0;

/// Points granted per completed score interval
pub const BASE_SCORE_STEP: u32 = 5;

/// Countdown value (time units) replenished after each score grant
pub const BASE_SCORE_INTERVAL: f64 = 500.0;

/// Multiplier applied to elapsed time when decrementing the score countdown
pub const SCORE_DECAY_RATE: f64 = 0.6;

/// Debounce window on touch handhelds (orientation changes produce long bursts)
pub const RESIZE_DEBOUNCE_TOUCH_MS: u64 = 380;

/// Debounce window on every other platform
pub const RESIZE_DEBOUNCE_DESKTOP_MS: u64 = 50;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Raw geometric/device description of the display surface.
///
/// A read-only snapshot from the host environment, created fresh on each
/// calculation. Carries no identity; two snapshots with equal fields are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub raw_width: f64,
    pub raw_height: f64,
    pub device_pixel_ratio: f64,
}

impl ViewportMetrics {
    pub fn new(raw_width: f64, raw_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            raw_width,
            raw_height,
            device_pixel_ratio,
        }
    }
}

/// Derived render-target geometry, the immutable result of one calculation.
///
/// Consumed once by the engine viewport at startup and again on every
/// debounced resize. Width and height are always even integers to prevent
/// sub-pixel seams in a tile-based renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProfile {
    pub render_width: u32,
    pub render_height: u32,
    pub zoom_factor: f64,
    pub is_landscape: bool,
}

/// Device class derived from the host's platform identification string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    TouchHandheld,
    Desktop,
}

impl Platform {
    /// Classify a user-agent style identification string.
    ///
    /// Matches the iOS family markers (`iPhone`, `iPod`, `iPad`, `iOS`);
    /// everything else is treated as desktop-class.
    pub fn detect(user_agent: &str) -> Self {
        const MARKERS: [&str; 4] = ["iPhone", "iPod", "iPad", "iOS"];
        if MARKERS.iter().any(|m| user_agent.contains(m)) {
            Platform::TouchHandheld
        } else {
            Platform::Desktop
        }
    }

    /// Debounce window for resize signals on this device class.
    pub fn debounce_window_ms(&self) -> u64 {
        match self {
            Platform::TouchHandheld => RESIZE_DEBOUNCE_TOUCH_MS,
            Platform::Desktop => RESIZE_DEBOUNCE_DESKTOP_MS,
        }
    }
}

/// Rendering backend requested from the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    WebGl,
    Canvas,
}

impl RenderBackend {
    /// Pick a backend from the identification string.
    ///
    /// Firefox (matched case-insensitively) gets WebGL; the canvas path is
    /// the safer default everywhere else.
    pub fn detect(user_agent: &str) -> Self {
        if user_agent.to_lowercase().contains("firefox") {
            RenderBackend::WebGl
        } else {
            RenderBackend::Canvas
        }
    }

    /// Convert to the engine's configuration string
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderBackend::WebGl => "webgl",
            RenderBackend::Canvas => "canvas",
        }
    }
}
