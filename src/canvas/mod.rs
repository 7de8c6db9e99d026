//! Decorative canvas animations.
//!
//! Animators never touch a rendering context. Each frame they emit a list of
//! [`DrawCommand`]s in CSS pixels; the wasm side replays the list onto a 2D
//! context scaled by the device pixel ratio.

pub mod automations;
pub mod services;

pub use automations::Automations;
pub use services::Services;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Node {
    pub fn distance(&self, other: &Node) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Drawable area of a canvas: CSS size of its container plus pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Surface {
    pub fn new(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio,
        }
    }

    /// Backing store resolution in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.css_width * self.pixel_ratio).round() as u32,
            (self.css_height * self.pixel_ratio).round() as u32,
        )
    }
}

/// Per-canvas tick counter. Only ever used as a phase for the pulse functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock(u64);

impl FrameClock {
    pub fn tick(&self) -> u64 {
        self.0
    }

    pub fn t(&self) -> f64 {
        self.0 as f64
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Brand amber used by both animations.
    pub fn amber(a: f64) -> Self {
        Self {
            r: 217,
            g: 119,
            b: 6,
            a,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgba,
        width: f64,
        /// Empty for a solid line.
        dash: Vec<f64>,
        dash_offset: f64,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgba,
    },
}

/// A per-frame drawing routine gated on visibility.
pub trait Animator {
    /// Called when the container scrolls into view, before the first frame.
    fn activate(&mut self, surface: &Surface);

    /// Called after the backing store has been resized.
    fn resize(&mut self, _surface: &Surface) {}

    /// Called when the container leaves the viewport and the loop stops.
    fn deactivate(&mut self) {}

    /// Produces one frame and advances the clock.
    fn frame(&mut self, surface: &Surface) -> Vec<DrawCommand>;
}
