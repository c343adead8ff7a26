//! Engine glue module - the seam between the core and the external engine
//!
//! The rendering/game engine is an external collaborator: this crate never
//! renders, it only hands the engine a configuration at startup and viewport
//! geometry afterwards.
//!
//! - [`viewport`]: the one-directional resize/zoom call surface
//! - [`resize`]: debounced resize coordination driving the viewport
//! - [`config`]: boot flags and assembled engine configuration

pub mod config;
pub mod resize;
pub mod viewport;

pub use config::{BootConfig, EngineConfig};
pub use resize::{ResizeCoordinator, ResizeDebounce};
pub use viewport::{EngineViewport, RecordingViewport};
