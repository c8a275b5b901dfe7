//! Explicit state machines for entrance and hover motion.
//!
//! Entrance: `Idle -> Entering -> Settled`, one way only.
//! Hover: `RestIdle <-> HoverActive`.
//!
//! The machines hold configuration and phase. Interpolation is left to the
//! host's CSS engine through the declarations returned by `style`.

use crate::error::{MotionError, Result};
use crate::scroll::Reveal;
use crate::transition::Transition;
use crate::visual::VisualState;
use tracing::debug;

/// What starts an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The element's first render.
    Mount,
    /// The element's first intersection with the viewport.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceConfig {
    /// Keyframes name, unique per page.
    pub name: &'static str,
    pub initial: VisualState,
    pub target: VisualState,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl EntranceConfig {
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.name,
            self.initial.css(),
            self.target.css()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    Idle,
    Entering,
    Settled,
}

impl EntrancePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrancePhase::Idle => "idle",
            EntrancePhase::Entering => "entering",
            EntrancePhase::Settled => "settled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceMachine {
    config: EntranceConfig,
    phase: EntrancePhase,
}

impl EntranceMachine {
    /// Mount-triggered entrances begin already `Entering`, since
    /// construction happens on the first render.
    pub fn new(config: EntranceConfig) -> Self {
        let phase = match config.trigger {
            Trigger::Mount => EntrancePhase::Entering,
            Trigger::InView => EntrancePhase::Idle,
        };
        Self { config, phase }
    }

    /// Starts an idle entrance once `reveal` reports its element seen.
    /// Returns whether the phase changed.
    pub fn follow(&mut self, reveal: &Reveal) -> bool {
        reveal.seen() && self.is_idle() && self.start().is_ok()
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == EntrancePhase::Idle
    }

    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            EntrancePhase::Idle => {
                debug!(name = self.config.name, "entrance started");
                self.phase = EntrancePhase::Entering;
                Ok(())
            }
            other => Err(MotionError::InvalidTransition {
                from: other.as_str(),
                event: "start",
            }),
        }
    }

    pub fn finish(&mut self) -> Result<()> {
        match self.phase {
            EntrancePhase::Entering => {
                debug!(name = self.config.name, "entrance settled");
                self.phase = EntrancePhase::Settled;
                Ok(())
            }
            other => Err(MotionError::InvalidTransition {
                from: other.as_str(),
                event: "finish",
            }),
        }
    }

    /// Inline declarations for the current phase. While entering, the
    /// keyframes from [`EntranceConfig::keyframes_css`] drive the values.
    pub fn style(&self) -> String {
        match self.phase {
            EntrancePhase::Idle => self.config.initial.css(),
            EntrancePhase::Entering => format!(
                "{} animation: {};",
                self.config.initial.css(),
                self.config.transition.animation_css(self.config.name)
            )
            .trim_start()
            .to_string(),
            EntrancePhase::Settled => self.config.target.css(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverConfig {
    pub rest: VisualState,
    pub hover: VisualState,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    RestIdle,
    HoverActive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverMachine {
    config: HoverConfig,
    phase: HoverPhase,
    // Spring durations are expensive to find, so the declaration is built once.
    transition_css: String,
}

impl HoverMachine {
    pub fn new(config: HoverConfig) -> Self {
        let transition_css = animated_properties(&config.rest, &config.hover)
            .into_iter()
            .map(|property| config.transition.css_for(property))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            config,
            phase: HoverPhase::RestIdle,
            transition_css,
        }
    }

    /// Value of the CSS `transition` property, shared by both phases.
    pub fn transition_css(&self) -> &str {
        &self.transition_css
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Returns `false` when already hovered; pointers report enter twice
    /// often enough that this is not an error.
    pub fn enter(&mut self) -> bool {
        if self.phase == HoverPhase::HoverActive {
            return false;
        }
        self.phase = HoverPhase::HoverActive;
        true
    }

    pub fn leave(&mut self) -> bool {
        if self.phase == HoverPhase::RestIdle {
            return false;
        }
        self.phase = HoverPhase::RestIdle;
        true
    }

    pub fn current(&self) -> &VisualState {
        match self.phase {
            HoverPhase::RestIdle => &self.config.rest,
            HoverPhase::HoverActive => &self.config.hover,
        }
    }

    pub fn style(&self) -> String {
        let current = self.current().css();
        if self.transition_css.is_empty() {
            current
        } else {
            format!("{} transition: {};", current, self.transition_css)
                .trim_start()
                .to_string()
        }
    }
}

fn animated_properties(a: &VisualState, b: &VisualState) -> Vec<&'static str> {
    let mut properties = Vec::new();
    if a.opacity.is_some() || b.opacity.is_some() {
        properties.push("opacity");
    }
    let moves = |s: &VisualState| s.x.is_some() || s.y.is_some();
    if moves(a) || moves(b) {
        properties.push("transform");
    }
    if a.blur.is_some() || b.blur.is_some() {
        properties.push("filter");
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{Easing, Spring};

    const FADE_IN: EntranceConfig = EntranceConfig {
        name: "fade-in",
        initial: VisualState::NONE.opacity(0.0),
        target: VisualState::NONE.opacity(1.0),
        transition: Transition::tween(2.0, Easing::Linear).with_delay(1.0),
        trigger: Trigger::InView,
    };

    #[test]
    fn test_entrance_happy_path() {
        let mut machine = EntranceMachine::new(FADE_IN);
        assert_eq!(machine.phase(), EntrancePhase::Idle);
        assert_eq!(machine.style(), "opacity: 0;");

        machine.start().unwrap();
        assert_eq!(machine.phase(), EntrancePhase::Entering);
        assert_eq!(
            machine.style(),
            "opacity: 0; animation: fade-in 2s linear 1s 1 normal both;"
        );

        machine.finish().unwrap();
        assert_eq!(machine.phase(), EntrancePhase::Settled);
        assert_eq!(machine.style(), "opacity: 1;");
    }

    #[test]
    fn test_entrance_rejects_out_of_order_events() {
        let mut machine = EntranceMachine::new(FADE_IN);
        assert_eq!(
            machine.finish(),
            Err(MotionError::InvalidTransition {
                from: "idle",
                event: "finish"
            })
        );
        machine.start().unwrap();
        assert!(machine.start().is_err());
        machine.finish().unwrap();
        assert!(machine.start().is_err());
        assert!(machine.finish().is_err());
        assert_eq!(machine.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn test_mount_trigger_begins_entering() {
        let config = EntranceConfig {
            trigger: Trigger::Mount,
            ..FADE_IN
        };
        let mut machine = EntranceMachine::new(config);
        assert_eq!(machine.phase(), EntrancePhase::Entering);
        assert!(!machine.follow(&Reveal::SHOWN));
        assert_eq!(machine.phase(), EntrancePhase::Entering);
    }

    #[test]
    fn test_in_view_entrance_follows_reveal() {
        let mut machine = EntranceMachine::new(FADE_IN);
        assert!(!machine.follow(&Reveal::HIDDEN));
        assert!(machine.is_idle());
        assert!(machine.follow(&Reveal::SHOWN));
        assert_eq!(machine.phase(), EntrancePhase::Entering);
        assert!(!machine.follow(&Reveal::SHOWN));

        machine.finish().unwrap();
        assert!(!machine.follow(&Reveal::SHOWN));
        assert_eq!(machine.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(
            FADE_IN.keyframes_css(),
            "@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }"
        );
    }

    #[test]
    fn test_hover_toggles() {
        let mut machine = HoverMachine::new(HoverConfig {
            rest: VisualState::NONE.y(0.0),
            hover: VisualState::NONE.y(-10.0),
            transition: Transition::spring(Spring::GESTURE),
        });
        assert_eq!(machine.phase(), HoverPhase::RestIdle);
        assert!(!machine.leave());
        assert!(machine.enter());
        assert!(!machine.enter());
        assert_eq!(machine.current().y, Some(-10.0));
        assert!(machine.style().starts_with("transform: translateY(-10px); transition: transform "));
        assert!(machine.leave());
        assert_eq!(machine.phase(), HoverPhase::RestIdle);
        assert_eq!(machine.current().y, Some(0.0));
    }

    #[test]
    fn test_hover_transition_is_fixed_at_construction() {
        let config = HoverConfig {
            rest: VisualState::NONE.y(0.0).opacity(0.8),
            hover: VisualState::NONE.y(-10.0).opacity(1.0),
            transition: Transition::spring(Spring::GESTURE),
        };
        let mut machine = HoverMachine::new(config);
        let expected = format!(
            "{}, {}",
            config.transition.css_for("opacity"),
            config.transition.css_for("transform")
        );
        assert_eq!(machine.transition_css(), expected);

        let resting = machine.style();
        machine.enter();
        let hovered = machine.style();
        assert!(resting.ends_with(&format!("transition: {};", expected)));
        assert!(hovered.ends_with(&format!("transition: {};", expected)));
        assert!(hovered.starts_with("opacity: 1; transform: translateY(-10px);"));
    }
}
