use crate::transition::{Repeat, RepeatMode, Transition};
use crate::visual::VisualState;

/// Continuous animation between two states, e.g. the gallery drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    pub name: &'static str,
    pub from: VisualState,
    pub to: VisualState,
    pub transition: Transition,
}

impl LoopConfig {
    /// Keyframes matching [`Transition::animation_css`] for this loop.
    ///
    /// CSS `alternate` replays the curve backwards, which is the `Reverse`
    /// mode. A mirrored loop instead runs one forward-eased segment each
    /// way inside a keyframe sequence of twice the cycle length.
    pub fn keyframes_css(&self) -> String {
        let from = self.from.css();
        let to = self.to.css();
        match self.transition.repeat {
            Repeat::Forever(RepeatMode::Mirror) => {
                let easing = self.transition.easing().css();
                format!(
                    "@keyframes {name} {{ \
                     0% {{ {from} animation-timing-function: {easing}; }} \
                     50% {{ {to} animation-timing-function: {easing}; }} \
                     100% {{ {from} }} }}",
                    name = self.name,
                )
            }
            _ => format!(
                "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
                self.name, from, to
            ),
        }
    }

    pub fn animation_css(&self) -> String {
        self.transition.animation_css(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    const DRIFT: LoopConfig = LoopConfig {
        name: "drift",
        from: VisualState::NONE.x(0.0),
        to: VisualState::NONE.x(-100.0),
        transition: Transition::tween(20.0, Easing::EaseIn).repeat_forever(RepeatMode::Mirror),
    };

    #[test]
    fn test_mirror_keyframes_return_to_start() {
        let css = DRIFT.keyframes_css();
        assert_eq!(
            css,
            "@keyframes drift { \
             0% { transform: translateX(0px); animation-timing-function: ease-in; } \
             50% { transform: translateX(-100px); animation-timing-function: ease-in; } \
             100% { transform: translateX(0px); } }"
        );
        assert_eq!(DRIFT.animation_css(), "drift 40s linear 0s infinite normal both");
    }

    #[test]
    fn test_plain_loop_keyframes() {
        let spin = LoopConfig {
            transition: Transition::tween(1.0, Easing::Linear).repeat_forever(RepeatMode::Loop),
            ..DRIFT
        };
        assert_eq!(
            spin.keyframes_css(),
            "@keyframes drift { from { transform: translateX(0px); } to { transform: translateX(-100px); } }"
        );
    }
}
