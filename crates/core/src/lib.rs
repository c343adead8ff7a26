//! Core logic module - pure, deterministic, and testable
//!
//! This module contains the two decision-making pieces of the bootstrap.
//! It has **zero dependencies** on I/O, timers, or the external engine,
//! making it:
//!
//! - **Deterministic**: same inputs always produce identical outputs
//! - **Testable**: every branch is reachable from plain unit tests
//! - **Portable**: usable from the terminal demo, a wasm shell, or headless
//!
//! # Module Structure
//!
//! - [`screen`]: viewport metrics to render-target geometry, a pure function
//! - [`progression`]: fixed-cadence score state machine with observers
//!
//! # Example
//!
//! ```
//! use canvas_boot_core::{compute_screen_profile, ScoreProgression};
//! use canvas_boot_types::ViewportMetrics;
//!
//! let profile = compute_screen_profile(ViewportMetrics::new(414.0, 896.0, 2.0));
//! assert_eq!(profile.render_width % 2, 0);
//!
//! let mut progression = ScoreProgression::new();
//! progression.init();
//! progression.update(16.0);
//! ```

pub mod progression;
pub mod screen;

pub use progression::ScoreProgression;
pub use screen::compute_screen_profile;
