//! Engine-independent core of The Saffron Tree site.
//!
//! Everything the page shows or animates is plain data here: style tokens,
//! literal content records, the scroll-to-parallax mapping, and motion
//! configuration expressed as small state machines. A host renderer (the
//! Dioxus components in `saffron-site`) only reads these values and turns
//! them into markup.

pub mod content;
pub mod easing;
pub mod error;
pub mod looping;
pub mod machine;
pub mod presets;
pub mod scroll;
pub mod theme;
pub mod transform;
pub mod transition;
pub mod visual;

pub use error::{MotionError, Result};
