use dioxus::prelude::*;
use saffron_motion::content::{BRAND_NAME, NAV_SECTIONS};
use saffron_motion::theme::Theme;

#[component]
pub fn Navbar(theme: Theme) -> Element {
    rsx! {
        nav {
            class: "fixed top-0 w-full z-50 flex justify-between items-center px-8 py-6 mix-blend-difference",
            div {
                class: "tracking-[0.3em] text-xl uppercase",
                style: theme.saffron_serif_style(),
                "{BRAND_NAME}"
            }
            div { class: "hidden md:flex gap-8 text-[10px] tracking-[0.4em] uppercase text-white/70",
                for section in NAV_SECTIONS {
                    a {
                        key: "{section.id()}",
                        href: section.anchor(),
                        class: "hover:text-white transition-colors",
                        "{section.nav_label()}"
                    }
                }
            }
        }
    }
}
