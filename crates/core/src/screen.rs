//! Screen profile calculator - maps viewport metrics to render geometry
//!
//! This module is pure (no I/O). The calculation is total: every numeric
//! input produces a usable profile, so there is no error type.

use canvas_boot_types::{
    ScreenProfile, ViewportMetrics, COMPACT_WIDTH_PX, LANDSCAPE_WIDTH_RATIO, MIN_VIEWPORT_PX,
};

/// Compute the render-target geometry for the given viewport snapshot.
///
/// Compact devices (raw width under 480) render at native pixel density:
/// both dimensions scale by the device pixel ratio and the engine zoom
/// compensates with its reciprocal, so the canvas occupies the same CSS
/// area while the backing store gains resolution. Wider screens render
/// 1:1 with zoom 1.
///
/// Landscape screens get their width overridden to 3/4 of the height,
/// keeping a portrait-shaped play area regardless of orientation.
///
/// Both output dimensions are rounded up and then bumped to the next even
/// integer. Odd canvas dimensions cause half-pixel sampling on tile edges.
pub fn compute_screen_profile(metrics: ViewportMetrics) -> ScreenProfile {
    let raw_width = sanitize_dimension(metrics.raw_width);
    let raw_height = sanitize_dimension(metrics.raw_height);
    let pixel_ratio = sanitize_ratio(metrics.device_pixel_ratio);

    let compact = raw_width < COMPACT_WIDTH_PX;

    let mut width = if compact { raw_width * pixel_ratio } else { raw_width };
    let height = if compact { raw_height * pixel_ratio } else { raw_height };
    let zoom_factor = if compact { 1.0 / pixel_ratio } else { 1.0 };

    let is_landscape = raw_width > raw_height;
    if is_landscape {
        width = height * LANDSCAPE_WIDTH_RATIO;
    }

    ScreenProfile {
        render_width: to_even(width),
        render_height: to_even(height),
        zoom_factor,
        is_landscape,
    }
}

/// Clamp pathological raw dimensions to a minimum viable size.
///
/// Hosts can briefly report zero-sized viewports (hidden tabs, mid-rotation
/// reflow). Passing those through would size the render surface to nothing,
/// so they are floored instead of rejected.
fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value >= MIN_VIEWPORT_PX {
        value
    } else {
        MIN_VIEWPORT_PX
    }
}

fn sanitize_ratio(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Round up, then bump odd results to the next even integer.
///
/// Capped below `u32::MAX` (itself odd) so the even bump cannot overflow
/// on absurdly large inputs; the cap value is even.
fn to_even(value: f64) -> u32 {
    let mut n = value.ceil().min((u32::MAX - 1) as f64) as u32;
    if n % 2 != 0 {
        n += 1;
    }
    n
}
