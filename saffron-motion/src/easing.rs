//! Easing curves and spring physics.

/// Timing curve of a tween, mirroring the CSS timing functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Curve applied when a motion declares only a duration.
    pub const STANDARD: Easing = Easing::CubicBezier(0.25, 0.1, 0.35, 1.0);

    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Damped harmonic spring driving a value from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Remaining displacement considered at rest.
pub const SPRING_REST_TOLERANCE: f64 = 0.001;
const SPRING_MAX_SETTLE: f64 = 10.0;
const SPRING_SAMPLE_STEP: f64 = 0.001;

impl Spring {
    /// Spring used for positional gestures such as a hover lift.
    pub const GESTURE: Spring = Spring {
        stiffness: 500.0,
        damping: 25.0,
        mass: 1.0,
    };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Distance still to travel at time `t`, starting at 1 with no velocity.
    fn displacement(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if (zeta - 1.0).abs() < 1e-6 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Seconds until the spring stays within [`SPRING_REST_TOLERANCE`] of rest.
    ///
    /// Scans the whole window at millisecond steps, so callers should hold on
    /// to the result rather than ask again on every render.
    pub fn settle_time(&self) -> f64 {
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t < SPRING_MAX_SETTLE {
            if self.displacement(t).abs() >= SPRING_REST_TOLERANCE {
                last_outside = t;
            }
            t += SPRING_SAMPLE_STEP;
        }
        (last_outside + SPRING_SAMPLE_STEP).min(SPRING_MAX_SETTLE)
    }

    /// Closest CSS timing function for hosts that can only run tweens.
    pub fn css_timing(&self) -> Easing {
        if self.damping_ratio() < 1.0 {
            Easing::CubicBezier(0.34, 1.56, 0.64, 1.0)
        } else {
            Easing::EaseOut
        }
    }
}
