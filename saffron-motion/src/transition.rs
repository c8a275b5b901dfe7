use crate::easing::{Easing, Spring};
use crate::error::{MotionError, Result};

/// How a repeating animation starts its next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the start value.
    Loop,
    /// Play the previous cycle backwards in time, easing included.
    Reverse,
    /// Swap start and end values, still easing forward.
    Mirror,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever(RepeatMode),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    Tween { duration: f64, easing: Easing },
    Spring(Spring),
}

/// Timing of one motion: curve, start delay and repetition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub timing: Timing,
    pub delay: f64,
    pub repeat: Repeat,
}

impl Transition {
    /// Tween used when a motion declares no timing of its own.
    pub const DEFAULT: Transition = Transition::tween(0.3, Easing::STANDARD);

    pub const fn tween(duration: f64, easing: Easing) -> Self {
        Self {
            timing: Timing::Tween { duration, easing },
            delay: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub const fn spring(spring: Spring) -> Self {
        Self {
            timing: Timing::Spring(spring),
            delay: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn repeat_forever(mut self, mode: RepeatMode) -> Self {
        self.repeat = Repeat::Forever(mode);
        self
    }

    /// Length of a single cycle. Springs run until they settle.
    pub fn duration(&self) -> f64 {
        match self.timing {
            Timing::Tween { duration, .. } => duration,
            Timing::Spring(spring) => spring.settle_time(),
        }
    }

    /// Easing of a single cycle as a CSS timing function.
    pub fn easing(&self) -> Easing {
        match self.timing {
            Timing::Tween { easing, .. } => easing,
            Timing::Spring(spring) => spring.css_timing(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.timing {
            Timing::Tween { duration, .. } => check_seconds("duration", duration)?,
            Timing::Spring(spring) => {
                let params = [spring.stiffness, spring.damping, spring.mass];
                if params.iter().any(|p| !p.is_finite() || *p <= 0.0) {
                    return Err(MotionError::NonFinite("spring parameters"));
                }
            }
        }
        check_seconds("delay", self.delay)
    }

    /// CSS `transition` shorthand for one property.
    pub fn css_for(&self, property: &str) -> String {
        format!(
            "{} {}s {} {}s",
            property,
            seconds(self.duration()),
            self.easing().css(),
            seconds(self.delay)
        )
    }

    /// CSS `animation` shorthand for keyframes called `name`.
    ///
    /// Mirrored repeats expect the double-length keyframes produced by
    /// [`crate::looping::LoopConfig::keyframes_css`]; the timing function is
    /// then declared per keyframe and the period covers both directions.
    pub fn animation_css(&self, name: &str) -> String {
        let duration = seconds(self.duration());
        let delay = seconds(self.delay);
        let easing = self.easing().css();
        match self.repeat {
            Repeat::Once => format!("{name} {duration}s {easing} {delay}s 1 normal both"),
            Repeat::Forever(RepeatMode::Loop) => {
                format!("{name} {duration}s {easing} {delay}s infinite normal both")
            }
            Repeat::Forever(RepeatMode::Reverse) => {
                format!("{name} {duration}s {easing} {delay}s infinite alternate both")
            }
            Repeat::Forever(RepeatMode::Mirror) => {
                let period = seconds(self.duration() * 2.0);
                format!("{name} {period}s linear {delay}s infinite normal both")
            }
        }
    }
}

fn check_seconds(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(MotionError::NonFinite(field));
    }
    if value < 0.0 {
        return Err(MotionError::NegativeDuration { field, value });
    }
    Ok(())
}

// Millisecond precision keeps spring durations readable in CSS.
fn seconds(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
