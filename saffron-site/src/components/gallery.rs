use crate::hooks::use_in_view;
use dioxus::prelude::*;
use saffron_motion::content::{Section, GALLERY_FRAME_COUNT, GALLERY_IMAGE_ALT, GALLERY_IMAGE_URL};
use saffron_motion::presets::GALLERY_DRIFT;

/// Drifting photo strip. The drift starts once the strip is first seen and
/// then runs for the rest of the page's life.
#[component]
pub fn Gallery() -> Element {
    let in_view = use_in_view();
    let strip_style = if in_view.seen() {
        format!("animation: {};", GALLERY_DRIFT.animation_css())
    } else {
        GALLERY_DRIFT.from.css()
    };

    rsx! {
        section { id: Section::Gallery.id(), class: "py-32 overflow-hidden",
            div {
                class: "flex gap-8 whitespace-nowrap opacity-40 hover:opacity-100 transition-opacity duration-1000",
                style: strip_style,
                onmounted: move |evt: MountedEvent| in_view.measure(evt),
                for frame in 0..GALLERY_FRAME_COUNT {
                    img {
                        key: "{frame}",
                        src: GALLERY_IMAGE_URL,
                        alt: GALLERY_IMAGE_ALT,
                        class: "w-[500px] h-[350px] object-cover flex-shrink-0 grayscale hover:grayscale-0 transition-all duration-700",
                    }
                }
            }
        }
    }
}
