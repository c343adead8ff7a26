//! Canvas bootstrap (workspace facade crate).
//!
//! This package keeps a single `canvas_boot::{core,engine,host,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use canvas_boot_core as core;
pub use canvas_boot_engine as engine;
pub use canvas_boot_host as host;
pub use canvas_boot_types as types;
