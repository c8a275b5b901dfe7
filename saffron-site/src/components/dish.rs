use super::icons::ArrowUpRight;
use crate::hooks::use_hover;
use dioxus::prelude::*;
use saffron_motion::content::DISH_CALL_TO_ACTION;
use saffron_motion::machine::HoverMachine;
use saffron_motion::presets::DISH_LIFT;
use saffron_motion::theme::Theme;

/// Menu card. Props are rendered as given; an empty title is an empty
/// heading and a bad URL is a broken image.
#[component]
pub fn SignatureDish(
    theme: Theme,
    #[props(into)] title: String,
    #[props(into)] description: String,
    #[props(into)] image_url: String,
) -> Element {
    let mut lift = use_hover(DISH_LIFT);
    let card_style = card_style(&theme, &lift.machine().read());

    rsx! {
        div {
            class: "group relative aspect-[4/5] overflow-hidden cursor-pointer",
            style: card_style,
            onmouseenter: move |_| lift.enter(),
            onmouseleave: move |_| lift.leave(),
            img {
                src: "{image_url}",
                alt: "{title}",
                class: "w-full h-full object-cover opacity-60 group-hover:opacity-80 transition-all duration-700 group-hover:scale-110",
            }
            div { class: "absolute inset-0 p-8 flex flex-col justify-end bg-gradient-to-t from-black/80 to-transparent",
                h3 { class: "text-2xl mb-2", style: theme.saffron_serif_style(), "{title}" }
                p { class: "text-white/60 text-sm leading-relaxed tracking-wide", "{description}" }
                div { class: "mt-4 flex items-center text-[10px] text-white tracking-[0.2em] uppercase",
                    "{DISH_CALL_TO_ACTION}"
                    ArrowUpRight { size: 14, class: "ml-2" }
                }
            }
        }
    }
}

fn card_style(theme: &Theme, lift: &HoverMachine) -> String {
    format!(
        "{} {}",
        theme.background_style(theme.color_night),
        lift.style()
    )
}
