//! Resize coordination - debounced viewport reconfiguration
//!
//! Raw resize signals arrive in bursts (window drags, orientation changes).
//! The coordinator collapses each burst into one effective signal, then
//! recomputes the screen profile and pushes it to the engine viewport.
//!
//! The debounce is a single-slot deferred task: each new signal replaces
//! any pending deadline, so at most one effective resize fires per quiet
//! period. Deadlines are plain millisecond timestamps checked from the
//! host's poll loop; there are no timer threads.

use canvas_boot_core::compute_screen_profile;
use canvas_boot_types::{Platform, ScreenProfile, ViewportMetrics};

use crate::viewport::EngineViewport;

/// Single-slot deferred action keyed on a millisecond deadline.
///
/// Scheduling a new deadline atomically replaces (and thereby cancels) any
/// previous pending one.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDebounce {
    window_ms: u64,
    deadline: Option<u64>,
}

impl ResizeDebounce {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline: None,
        }
    }

    /// Record a raw signal at `now_ms`, superseding any pending deadline.
    pub fn signal(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.window_ms));
    }

    /// Whether a deadline is pending.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline once the quiet period has elapsed.
    pub fn fires(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Debounces raw resize signals and re-applies the screen profile.
///
/// Only active when the auto-resize configuration flag is set; a disabled
/// coordinator ignores every signal and never touches the viewport.
pub struct ResizeCoordinator {
    debounce: ResizeDebounce,
    enabled: bool,
}

impl ResizeCoordinator {
    /// Build a coordinator for the detected platform.
    ///
    /// The debounce window is 380ms on touch handhelds and 50ms otherwise.
    pub fn new(platform: Platform, auto_resize: bool) -> Self {
        Self {
            debounce: ResizeDebounce::new(platform.debounce_window_ms()),
            enabled: auto_resize,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a debounced resize is waiting to fire.
    ///
    /// Hosts can skip the metrics snapshot for [`poll`] entirely while
    /// nothing is pending.
    ///
    /// [`poll`]: ResizeCoordinator::poll
    pub fn pending(&self) -> bool {
        self.enabled && self.debounce.pending()
    }

    /// Feed one raw resize signal observed at `now_ms`.
    pub fn signal(&mut self, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.debounce.signal(now_ms);
    }

    /// Poll from the host loop.
    ///
    /// When the quiet period has elapsed since the last raw signal, the
    /// profile is recomputed from the current metrics and applied to the
    /// engine viewport (resize first, then zoom). Returns the applied
    /// profile, or `None` when nothing fired.
    pub fn poll<V: EngineViewport>(
        &mut self,
        now_ms: u64,
        metrics: ViewportMetrics,
        viewport: &mut V,
    ) -> Option<ScreenProfile> {
        if !self.debounce.fires(now_ms) {
            return None;
        }

        let profile = compute_screen_profile(metrics);
        viewport.resize(profile.render_width, profile.render_height);
        viewport.set_zoom(profile.zoom_factor);
        log::debug!(
            "resize applied: {}x{} zoom {:.3} landscape {}",
            profile.render_width,
            profile.render_height,
            profile.zoom_factor,
            profile.is_landscape
        );
        Some(profile)
    }
}
