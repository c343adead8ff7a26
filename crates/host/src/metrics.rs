//! Viewport metrics sourced from the terminal.
//!
//! A terminal cell approximates an 8x16 pixel block, which is close enough
//! to exercise the compact/wide and portrait/landscape branches of the
//! screen calculator from a real resizable surface.

use canvas_boot_types::ViewportMetrics;

/// Assumed pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Assumed pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Snapshot the current terminal size as viewport metrics.
///
/// Terminals have no pixel-density concept, so the ratio is fixed at 1.0.
/// Falls back to a conventional 80x24 when the size query fails.
pub fn terminal_metrics() -> ViewportMetrics {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    cell_metrics(cols, rows)
}

/// Map a cell grid to pseudo-pixel metrics.
pub fn cell_metrics(cols: u16, rows: u16) -> ViewportMetrics {
    ViewportMetrics::new(
        f64::from(cols) * CELL_WIDTH_PX,
        f64::from(rows) * CELL_HEIGHT_PX,
        1.0,
    )
}
