//! Motion configuration of every animated element on the page.

use crate::easing::{Easing, Spring};
use crate::error::Result;
use crate::looping::LoopConfig;
use crate::machine::{EntranceConfig, HoverConfig, Trigger};
use crate::transition::{RepeatMode, Transition};
use crate::visual::VisualState;

/// "Kolkata • Michelin Standard": fade and rise.
pub const HERO_TAGLINE: EntranceConfig = EntranceConfig {
    name: "hero-tagline",
    initial: VisualState::NONE.opacity(0.0).y(20.0),
    target: VisualState::NONE.opacity(1.0).y(0.0),
    transition: Transition::tween(1.5, Easing::EaseInOut).with_delay(0.5),
    trigger: Trigger::Mount,
};

/// Brand headline: blur to sharp.
pub const HERO_TITLE: EntranceConfig = EntranceConfig {
    name: "hero-title",
    initial: VisualState::NONE.opacity(0.0).blur(10.0),
    target: VisualState::NONE.opacity(1.0).blur(0.0),
    transition: Transition::tween(2.0, Easing::EaseOut),
    trigger: Trigger::Mount,
};

pub const HERO_SUBTITLE: EntranceConfig = EntranceConfig {
    name: "hero-subtitle",
    initial: VisualState::NONE.opacity(0.0),
    target: VisualState::NONE.opacity(1.0),
    transition: Transition::tween(2.0, Easing::EaseInOut).with_delay(1.0),
    trigger: Trigger::Mount,
};

pub const PHILOSOPHY_KICKER: EntranceConfig = EntranceConfig {
    name: "philosophy-kicker",
    initial: VisualState::NONE.opacity(0.0),
    target: VisualState::NONE.opacity(1.0),
    transition: Transition::DEFAULT,
    trigger: Trigger::InView,
};

pub const PHILOSOPHY_HEADLINE: EntranceConfig = EntranceConfig {
    name: "philosophy-headline",
    initial: VisualState::NONE.opacity(0.0).y(30.0),
    target: VisualState::NONE.opacity(1.0).y(0.0),
    transition: Transition::tween(1.0, Easing::EaseInOut),
    trigger: Trigger::InView,
};

pub const ENTRANCES: [EntranceConfig; 5] = [
    HERO_TAGLINE,
    HERO_TITLE,
    HERO_SUBTITLE,
    PHILOSOPHY_KICKER,
    PHILOSOPHY_HEADLINE,
];

/// Signature dish card lift.
pub const DISH_LIFT: HoverConfig = HoverConfig {
    rest: VisualState::NONE.y(0.0),
    hover: VisualState::NONE.y(-10.0),
    transition: Transition::spring(Spring::GESTURE),
};

/// Gallery strip drift, started once the strip scrolls into view.
pub const GALLERY_DRIFT: LoopConfig = LoopConfig {
    name: "gallery-drift",
    from: VisualState::NONE.x(0.0),
    to: VisualState::NONE.x(-100.0),
    transition: Transition::tween(20.0, Easing::EaseInOut).repeat_forever(RepeatMode::Mirror),
};

/// Checks every preset's timing. Called once when the page mounts and
/// before a static export.
pub fn validate() -> Result<()> {
    for config in ENTRANCES {
        config.transition.validate()?;
    }
    DISH_LIFT.transition.validate()?;
    GALLERY_DRIFT.transition.validate()
}

/// Every keyframe block the page needs, for the single global style block.
pub fn all_keyframes_css() -> String {
    ENTRANCES
        .iter()
        .map(EntranceConfig::keyframes_css)
        .chain(std::iter::once(GALLERY_DRIFT.keyframes_css()))
        .collect::<Vec<_>>()
        .join("\n")
}
