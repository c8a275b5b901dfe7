use super::icons::SocialIcon;
use dioxus::prelude::*;
use saffron_motion::content::{CONTACT, SOCIAL_LINKS};
use saffron_motion::theme::Theme;

#[component]
pub fn Footer(theme: Theme) -> Element {
    let heading_style = theme.saffron_text_style();
    let serif_style = theme.serif_style();
    let rule_style = format!(
        "background-color: color-mix(in srgb, {} 30%, transparent);",
        theme.color_saffron
    );
    let [street, city] = CONTACT.address_lines;

    rsx! {
        footer {
            class: "pt-24 pb-12 px-8 border-t border-white/5",
            style: theme.background_style(theme.color_footer),
            div { class: "max-w-7xl mx-auto grid md:grid-cols-3 gap-12 mb-20",
                div { class: "space-y-6",
                    h4 { class: "tracking-[0.3em] uppercase text-xs", style: "{heading_style}", "The Location" }
                    p { class: "text-white/40 leading-loose", style: "{serif_style}",
                        "{street}"
                        br {}
                        "{city}"
                    }
                }
                div { class: "space-y-6 flex flex-col items-center md:items-start",
                    h4 { class: "tracking-[0.3em] uppercase text-xs", style: "{heading_style}", "Reservations" }
                    p { class: "text-white/40", style: "{serif_style}", "{CONTACT.phone}" }
                    p { class: "text-white/40 italic", style: "{serif_style}", "{CONTACT.email}" }
                }
                div { class: "space-y-6 flex flex-col md:items-end",
                    h4 { class: "tracking-[0.3em] uppercase text-xs", style: "{heading_style}", "Social" }
                    div { class: "flex gap-6 text-white/40",
                        for link in SOCIAL_LINKS {
                            SocialIcon {
                                key: "{link.label()}",
                                link,
                                size: 20,
                                class: "hover:text-[var(--saffron)] transition-colors cursor-pointer",
                            }
                        }
                    }
                }
            }
            div { class: "border-t border-white/5 pt-8 flex flex-col md:flex-row justify-between items-center gap-4",
                p { class: "text-[10px] text-white/20 tracking-[0.2em] uppercase", "{CONTACT.copyright}" }
                div { class: "h-[1px] w-24 hidden md:block", style: rule_style }
                p { class: "text-[10px] text-white/20 tracking-[0.2em] uppercase", "{CONTACT.motto}" }
            }
        }
    }
}
