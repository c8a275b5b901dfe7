use crate::components::{Footer, Gallery, Hero, Menu, Navbar, Philosophy};
use dioxus::prelude::*;
use saffron_motion::presets::{self, all_keyframes_css};
use saffron_motion::theme::Theme;
use tracing::warn;

/// The whole page. Expects a scroll feed from [`crate::hooks::use_scroll_feed`]
/// or [`crate::hooks::use_window_scroll`] higher up the tree.
#[component]
pub fn SaffronTree(theme: Theme, #[props(into)] stylesheet: String) -> Element {
    use_hook(|| {
        if let Err(err) = presets::validate() {
            warn!(%err, "motion presets rejected; the browser falls back to its defaults");
        }
    });
    // Injected once; everything else receives `theme` through props.
    let global_css = format!("{}\n{}", theme.global_css(), all_keyframes_css());

    rsx! {
        link { rel: "stylesheet", href: theme.font_import_url }
        link { rel: "stylesheet", href: "{stylesheet}" }
        style { dangerous_inner_html: "{global_css}" }
        div { class: "text-white", style: theme.background_style(theme.color_ink),
            Navbar { theme }
            Hero { theme }
            Philosophy { theme }
            Menu { theme }
            Gallery {}
            Footer { theme }
        }
    }
}
