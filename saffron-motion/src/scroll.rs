//! Read-only model of the page scroll position.
//!
//! The host owns the real scroll position and pushes snapshots into the
//! renderer. Everything in this crate only ever reads a [`Viewport`], so tests
//! and static rendering can substitute a fixed one.

use tracing::trace;

/// Snapshot of the visible part of the document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset from the top of the document.
    pub offset_y: f64,
    pub height: f64,
}

impl Viewport {
    /// Unscrolled page on a typical laptop screen.
    pub const TOP: Viewport = Viewport {
        offset_y: 0.0,
        height: 800.0,
    };

    pub const fn new(offset_y: f64, height: f64) -> Self {
        Self { offset_y, height }
    }

    pub fn bottom(&self) -> f64 {
        self.offset_y + self.height
    }
}

/// Anything that can report the current viewport: the browser window, or a
/// fixed value for tests and prerendering.
pub trait ScrollSource {
    fn viewport(&self) -> Viewport;
}

/// Deterministic source for tests and prerendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScroll(Viewport);

impl FixedScroll {
    pub fn new(viewport: Viewport) -> Self {
        Self(viewport)
    }
}

impl ScrollSource for FixedScroll {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    /// Converts a viewport-relative measurement (as reported by
    /// `getBoundingClientRect`) taken while `viewport` was current.
    pub fn from_client_rect(client_top: f64, height: f64, viewport: Viewport) -> Self {
        Self {
            top: client_top + viewport.offset_y,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// True once any part of `bounds` is inside `viewport`.
pub fn is_in_view(bounds: Bounds, viewport: Viewport) -> bool {
    bounds.top < viewport.bottom() && bounds.bottom() >= viewport.offset_y
}

/// Scroll-into-view latch for one element.
///
/// Holds the element's last measured position and flips to seen the first
/// time that position intersects a viewport. It never flips back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    bounds: Option<Bounds>,
    // Viewport height at measurement time; a resize can move the layout.
    measured_for: Option<f64>,
    seen: bool,
}

impl Reveal {
    /// Waiting for a measurement.
    pub const HIDDEN: Reveal = Reveal {
        bounds: None,
        measured_for: None,
        seen: false,
    };

    /// Already seen, for renders that never receive scroll events.
    pub const SHOWN: Reveal = Reveal {
        bounds: None,
        measured_for: None,
        seen: true,
    };

    pub fn seen(&self) -> bool {
        self.seen
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn measure(&mut self, bounds: Bounds, viewport: Viewport) {
        self.bounds = Some(bounds);
        self.measured_for = Some(viewport.height);
    }

    /// True when the position was measured for a differently sized
    /// viewport and has to be taken again before it can be trusted.
    pub fn is_stale(&self, viewport: Viewport) -> bool {
        !self.seen && matches!(self.measured_for, Some(height) if height != viewport.height)
    }

    /// Checks the measured position against `viewport`. Returns `true` only
    /// on the call that reveals the element.
    pub fn observe(&mut self, viewport: Viewport) -> bool {
        if self.seen {
            return false;
        }
        match self.bounds {
            Some(bounds) if is_in_view(bounds, viewport) => {
                trace!(top = bounds.top, offset_y = viewport.offset_y, "revealed");
                self.seen = true;
                true
            }
            _ => false,
        }
    }
}

/// Coalesces scroll events into at most one sample per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll or resize event. Returns `true` when the
    /// caller should request an animation frame; `false` while one is
    /// already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            trace!("scroll sample already pending");
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback, right before sampling.
    pub fn fire(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scroll_is_deterministic() {
        let source = FixedScroll::new(Viewport::new(250.0, 900.0));
        assert_eq!(source.viewport(), Viewport::new(250.0, 900.0));
        assert_eq!(source.viewport(), source.viewport());
    }

    #[test]
    fn test_bounds_from_client_rect() {
        let bounds = Bounds::from_client_rect(120.0, 300.0, Viewport::new(1000.0, 800.0));
        assert_eq!(bounds.top, 1120.0);
        assert_eq!(bounds.bottom(), 1420.0);
    }

    #[test]
    fn test_in_view_edges() {
        let viewport = Viewport::new(1000.0, 800.0);
        let below = Bounds { top: 1800.0, height: 50.0 };
        let peeking = Bounds { top: 1799.0, height: 50.0 };
        let above = Bounds { top: 900.0, height: 50.0 };
        let spanning = Bounds { top: 0.0, height: 5000.0 };
        assert!(!is_in_view(below, viewport));
        assert!(is_in_view(peeking, viewport));
        assert!(!is_in_view(above, viewport));
        assert!(is_in_view(spanning, viewport));
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.fire();
        assert!(gate.request());
    }

    const PHILOSOPHY_AT: Bounds = Bounds {
        top: 1200.0,
        height: 300.0,
    };

    #[test]
    fn test_reveal_latches_on_first_intersection() {
        let mut reveal = Reveal::HIDDEN;
        // Nothing measured yet: no position, no reveal.
        assert!(!reveal.observe(Viewport::new(5000.0, 800.0)));

        reveal.measure(PHILOSOPHY_AT, Viewport::TOP);
        assert!(!reveal.observe(Viewport::TOP));
        assert!(!reveal.seen());

        assert!(reveal.observe(Viewport::new(500.0, 800.0)));
        assert!(reveal.seen());
        assert!(!reveal.observe(Viewport::new(600.0, 800.0)));
        // Scrolling back up does not hide it again.
        assert!(!reveal.observe(Viewport::TOP));
        assert!(reveal.seen());
    }

    #[test]
    fn test_reveal_goes_stale_on_resize() {
        let mut reveal = Reveal::HIDDEN;
        assert!(!reveal.is_stale(Viewport::TOP));
        reveal.measure(PHILOSOPHY_AT, Viewport::TOP);
        assert!(!reveal.is_stale(Viewport::new(300.0, 800.0)));
        assert!(reveal.is_stale(Viewport::new(0.0, 1400.0)));

        // A narrower window pushed the section further down.
        let moved = Bounds {
            top: 2100.0,
            height: 300.0,
        };
        reveal.measure(moved, Viewport::new(0.0, 1400.0));
        assert!(!reveal.is_stale(Viewport::new(0.0, 1400.0)));
        assert!(!reveal.observe(Viewport::new(500.0, 1400.0)));
        assert!(reveal.observe(Viewport::new(800.0, 1400.0)));
        assert!(!reveal.is_stale(Viewport::TOP));
    }

    #[test]
    fn test_shown_needs_no_measurement() {
        let mut reveal = Reveal::SHOWN;
        assert!(reveal.seen());
        assert!(!reveal.observe(Viewport::TOP));
        assert_eq!(reveal.bounds(), None);
    }
}
