use dioxus::prelude::*;
use saffron_motion::theme::Theme;
use saffron_site::hooks::{use_render_mode_provider, use_window_scroll, RenderMode};
use saffron_site::SaffronTree;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_render_mode_provider(RenderMode::Interactive);
    use_window_scroll();

    rsx! {
        SaffronTree { theme: Theme::SAFFRON_TREE, stylesheet: TAILWIND_CSS.to_string() }
    }
}
