//! Decorative motion: project card tilt and the background blob loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Maximum rotation either side of flat, in degrees
const TILT_RANGE: f32 = 14.0;

/// Card tilt derived from pointer position or focus
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// Raised without rotation (keyboard focus)
    pub lifted: bool,
}

impl Tilt {
    /// Tilt for a pointer at relative position `(px, py)` inside the card,
    /// each in 0.0..=1.0 from the top-left corner.
    pub fn from_pointer(px: f32, py: f32) -> Self {
        let px = px.clamp(0.0, 1.0);
        let py = py.clamp(0.0, 1.0);
        Self {
            rotate_x: (0.5 - py) * TILT_RANGE,
            rotate_y: (px - 0.5) * TILT_RANGE,
            lifted: true,
        }
    }

    /// Focus pop without rotation
    pub fn focused() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            lifted: true,
        }
    }

    pub fn is_flat(&self) -> bool {
        !self.lifted && self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Horizontal shift in cells, -1..=1, leaning toward the pointer
    pub fn shift(&self) -> i16 {
        (self.rotate_y / (TILT_RANGE / 2.0)).round().clamp(-1.0, 1.0) as i16
    }
}

/// Shared flag that ends a repeating task
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Phase advance per frame
const BLOB_STEP: f64 = 0.05;

/// Offset of one blob from its anchor, in page pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobOffset {
    pub dx: f64,
    pub dy: f64,
}

/// Perpetual per-frame blob animation with an explicit stop handle
#[derive(Debug)]
pub struct BlobLoop {
    t: f64,
    count: usize,
    stop: StopHandle,
}

impl BlobLoop {
    pub fn new(count: usize) -> Self {
        Self {
            t: 0.0,
            count,
            stop: StopHandle::default(),
        }
    }

    /// Handle that ends the loop from anywhere
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Advance one frame. Returns false once stopped.
    pub fn frame(&mut self) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        self.t += BLOB_STEP;
        true
    }

    pub fn phase(&self) -> f64 {
        self.t
    }

    /// Current offsets for every blob
    pub fn offsets(&self) -> Vec<BlobOffset> {
        (0..self.count)
            .map(|i| {
                let i = i as f64;
                BlobOffset {
                    dx: (self.t * (0.5 + i * 0.15)).sin() * 12.0,
                    dy: (self.t * (0.4 + i * 0.12)).cos() * 10.0,
                }
            })
            .collect()
    }
}
