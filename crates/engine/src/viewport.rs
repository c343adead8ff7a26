//! Engine viewport call surface.
//!
//! The external engine owns the render surface; this trait is the narrow,
//! one-directional slice of it that the bootstrap touches.

/// Calls the bootstrap makes against the engine's scale manager.
pub trait EngineViewport {
    /// Resize the render surface to the given target dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Set the engine zoom applied on top of the render surface.
    fn set_zoom(&mut self, zoom: f64);
}

/// A viewport call recorded by [`RecordingViewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCall {
    Resize { width: u32, height: u32 },
    SetZoom { zoom: f64 },
}

/// Test double that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub calls: Vec<ViewportCall>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_resize(&self) -> Option<(u32, u32)> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewportCall::Resize { width, height } => Some((*width, *height)),
            _ => None,
        })
    }

    pub fn last_zoom(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewportCall::SetZoom { zoom } => Some(*zoom),
            _ => None,
        })
    }
}

impl EngineViewport for RecordingViewport {
    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(ViewportCall::Resize { width, height });
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.calls.push(ViewportCall::SetZoom { zoom });
    }
}
