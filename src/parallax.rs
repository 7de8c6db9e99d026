/// Vertical offset for shape `index` at scroll position `scroll_y`.
pub fn shape_offset(scroll_y: f64, index: usize, base: f64, increment: f64) -> f64 {
    -scroll_y * (base + index as f64 * increment)
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Scroll-driven parallax for the decorative background shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub base: f64,
    pub increment: f64,
    /// Widths at or below this get no parallax.
    pub breakpoint: f64,
}

impl Parallax {
    pub fn new(base: f64, increment: f64, breakpoint: f64) -> Self {
        Self {
            base,
            increment,
            breakpoint,
        }
    }

    pub fn enabled(&self, viewport_width: f64) -> bool {
        viewport_width > self.breakpoint
    }

    /// Offsets for `count` shapes, or `None` on narrow viewports.
    pub fn offsets(&self, scroll_y: f64, viewport_width: f64, count: usize) -> Option<Vec<f64>> {
        if !self.enabled(viewport_width) {
            return None;
        }
        Some(
            (0..count)
                .map(|i| shape_offset(scroll_y, i, self.base, self.increment))
                .collect(),
        )
    }
}

/// At most one pending frame: scroll events arriving while a frame is
/// scheduled are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
