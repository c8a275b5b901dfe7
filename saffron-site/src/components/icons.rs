//! Inline stroke icons, drawn on a 24px grid.

use dioxus::prelude::*;
use saffron_motion::content::SocialLink;

#[component]
pub fn ArrowUpRight(size: u32, #[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            "aria-hidden": "true",
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        }
    }
}

/// Decorative only: the links have no destination yet.
#[component]
pub fn SocialIcon(link: SocialLink, size: u32, #[props(into, default)] class: String) -> Element {
    let glyph = match link {
        SocialLink::Instagram => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", y1: "6.5", x2: "17.51", y2: "6.5" }
        },
        SocialLink::Facebook => rsx! {
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        },
    };

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            "aria-label": link.label(),
            role: "img",
            {glyph}
        }
    }
}
