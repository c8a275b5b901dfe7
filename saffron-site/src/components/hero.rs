use crate::hooks::{use_entrance, use_viewport};
use dioxus::prelude::*;
use saffron_motion::content::{self, BRAND_NAME, HERO_IMAGE_ALT, HERO_IMAGE_URL};
use saffron_motion::presets;
use saffron_motion::theme::Theme;
use saffron_motion::transform::HERO_PARALLAX;

#[component]
pub fn Hero(theme: Theme) -> Element {
    let viewport = use_viewport();
    let parallax = use_memo(move || HERO_PARALLAX.map(viewport().offset_y));

    let mut tagline = use_entrance(presets::HERO_TAGLINE);
    let mut title = use_entrance(presets::HERO_TITLE);
    let mut subtitle = use_entrance(presets::HERO_SUBTITLE);

    let background_style = format!("transform: translateY({}px);", parallax());
    let tagline_style = format!("{} {}", theme.saffron_text_style(), tagline.style());
    let title_style = format!("{} {}", theme.serif_style(), title.style());
    let subtitle_style = format!("{} {}", theme.serif_style(), subtitle.style());
    // "The Saffron Tree" breaks before its last word.
    let (title_head, title_tail) = BRAND_NAME.rsplit_once(' ').unwrap_or((BRAND_NAME, ""));

    rsx! {
        section {
            class: "relative h-screen w-full overflow-hidden flex items-center justify-center",
            style: theme.background_style(theme.color_ink),
            div {
                class: "absolute inset-0 z-0",
                style: background_style,
                div { class: "absolute inset-0 bg-black/40 z-10" }
                img {
                    src: HERO_IMAGE_URL,
                    alt: HERO_IMAGE_ALT,
                    class: "w-full h-full object-cover grayscale-[0.2] contrast-[1.1]",
                }
            }
            div { class: "relative z-20 text-center space-y-4",
                p {
                    class: "tracking-[0.5em] text-[10px] uppercase",
                    style: tagline_style,
                    onanimationend: move |_| tagline.settle(),
                    {content::HERO_TAGLINE}
                }
                h1 {
                    class: "text-6xl md:text-9xl text-white leading-tight",
                    style: title_style,
                    onanimationend: move |_| title.settle(),
                    "{title_head} "
                    br {}
                    " {title_tail}"
                }
                p {
                    class: "text-white/50 italic text-lg md:text-xl pt-4",
                    style: subtitle_style,
                    onanimationend: move |_| subtitle.settle(),
                    {content::HERO_SUBTITLE}
                }
            }
        }
    }
}
