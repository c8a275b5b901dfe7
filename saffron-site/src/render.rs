//! Server-side rendering of the page to an HTML fragment.

use crate::hooks::{use_render_mode_provider, use_scroll_feed, RenderMode};
use crate::page::SaffronTree;
use dioxus::prelude::*;
use saffron_motion::scroll::{FixedScroll, Viewport};
use saffron_motion::theme::Theme;
use tracing::debug;

#[derive(Props, Clone, PartialEq)]
struct StaticPageProps {
    viewport: Viewport,
    mode: RenderMode,
    stylesheet: String,
}

// Root of the virtual dom, so a plain function rather than a `#[component]`:
// the component macro reports any root it did not mount itself as misuse.
fn static_page(props: StaticPageProps) -> Element {
    use_render_mode_provider(props.mode);
    use_scroll_feed(FixedScroll::new(props.viewport));
    rsx! {
        SaffronTree { theme: Theme::SAFFRON_TREE, stylesheet: props.stylesheet }
    }
}

/// Renders the page as seen from `viewport`. Nothing is fetched: images are
/// only referenced by URL.
pub fn render_page(viewport: Viewport, mode: RenderMode, stylesheet: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        static_page,
        StaticPageProps {
            viewport,
            mode,
            stylesheet: stylesheet.to_string(),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    debug!(offset_y = viewport.offset_y, ?mode, bytes = html.len(), "page rendered");
    html
}
