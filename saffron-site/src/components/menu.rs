use super::dish::SignatureDish;
use dioxus::prelude::*;
use saffron_motion::content::{Section, SIGNATURE_DISHES};
use saffron_motion::theme::Theme;

#[component]
pub fn Menu(theme: Theme) -> Element {
    rsx! {
        section { id: Section::Menu.id(), class: "py-20 px-8 max-w-7xl mx-auto",
            div { class: "grid md:grid-cols-3 gap-8",
                for dish in SIGNATURE_DISHES {
                    SignatureDish {
                        key: "{dish.title}",
                        theme,
                        title: dish.title,
                        description: dish.description,
                        image_url: dish.image_url,
                    }
                }
            }
        }
    }
}
