use crate::hooks::use_entrance;
use dioxus::prelude::*;
use saffron_motion::content::{self, Section};
use saffron_motion::presets;
use saffron_motion::theme::Theme;

#[component]
pub fn Philosophy(theme: Theme) -> Element {
    let mut kicker = use_entrance(presets::PHILOSOPHY_KICKER);
    let mut headline = use_entrance(presets::PHILOSOPHY_HEADLINE);

    let kicker_style = format!("{} {}", theme.saffron_text_style(), kicker.style());
    let headline_style = format!("{} {}", theme.serif_style(), headline.style());
    let rule_style = format!(
        "background: linear-gradient(to bottom, color-mix(in srgb, {} 50%, transparent), transparent);",
        theme.color_saffron
    );
    let [first_line, second_line] = content::PHILOSOPHY_HEADLINE;

    rsx! {
        section {
            id: Section::About.id(),
            class: "py-32 px-8 max-w-5xl mx-auto text-center space-y-12",
            span {
                class: "tracking-[0.4em] uppercase text-[10px]",
                style: kicker_style,
                onmounted: move |evt: MountedEvent| kicker.measure(evt),
                onanimationend: move |_| kicker.settle(),
                {content::PHILOSOPHY_KICKER}
            }
            h2 {
                class: "text-3xl md:text-5xl leading-relaxed",
                style: headline_style,
                onmounted: move |evt: MountedEvent| headline.measure(evt),
                onanimationend: move |_| headline.settle(),
                "{first_line} "
                br {}
                " {second_line}"
            }
            div { class: "w-px h-24 mx-auto", style: rule_style }
        }
    }
}
