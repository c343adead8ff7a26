//! Host environment module - terminal stand-in for the browser host
//!
//! The bootstrap's real host is a browser window; for the demo runner the
//! terminal plays that role. This crate owns the raw-mode shell, maps
//! terminal cells to pseudo-pixel viewport metrics, and draws the one-line
//! status banner. Nothing here contains decision logic.

pub mod metrics;
pub mod shell;

pub use metrics::{terminal_metrics, CELL_HEIGHT_PX, CELL_WIDTH_PX};
pub use shell::TermShell;
