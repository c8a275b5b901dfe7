//! Hooks binding the motion core to Dioxus signals.

use dioxus::prelude::*;
use saffron_motion::machine::{
    EntranceConfig, EntranceMachine, HoverConfig, HoverMachine, HoverPhase,
};
use saffron_motion::scroll::{Bounds, FixedScroll, Reveal, ScrollSource, Viewport};
use std::rc::Rc;
use tracing::{debug, warn};

/// Page-wide scroll snapshot, provided once at the root.
#[derive(Clone, Copy)]
pub struct ScrollFeed(pub Signal<Viewport>);

/// Whether the tree runs in a browser or is rendered once to HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Interactive,
    /// One-shot render with no scroll events: every entrance plays on load.
    Snapshot,
}

pub fn use_render_mode_provider(mode: RenderMode) -> RenderMode {
    use_context_provider(|| mode)
}

pub fn use_render_mode() -> RenderMode {
    use_hook(|| try_consume_context::<RenderMode>().unwrap_or_default())
}

/// Provides a scroll feed seeded from `source`. Whoever owns the source
/// keeps the signal current; tests and static rendering pass a
/// [`FixedScroll`] and never touch it again.
pub fn use_scroll_feed(source: impl ScrollSource) -> ScrollFeed {
    use_context_provider(move || ScrollFeed(Signal::new(source.viewport())))
}

/// Provides a scroll feed driven by the browser window, sampled at most
/// once per animation frame.
pub fn use_window_scroll() -> ScrollFeed {
    let feed = use_scroll_feed(FixedScroll::new(Viewport::TOP));
    use_hook(move || attach_window_listener(feed.0));
    feed
}

fn use_feed() -> ScrollFeed {
    use_hook(|| {
        try_consume_context::<ScrollFeed>().unwrap_or_else(|| {
            warn!("no scroll feed provided; assuming an unscrolled page");
            ScrollFeed(Signal::new(Viewport::TOP))
        })
    })
}

pub fn use_viewport() -> ReadOnlySignal<Viewport> {
    ReadOnlySignal::new(use_feed().0)
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
struct WindowScroll(web_sys::Window);

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl ScrollSource for WindowScroll {
    fn viewport(&self) -> Viewport {
        let offset_y = self.0.scroll_y().unwrap_or_default();
        let height = self
            .0
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(Viewport::TOP.height);
        Viewport::new(offset_y, height)
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn attach_window_listener(mut viewport: Signal<Viewport>) {
    use saffron_motion::scroll::FrameGate;
    use std::cell::RefCell;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        warn!("no browser window; scroll feed stays at the top");
        return;
    };
    let source = Rc::new(WindowScroll(window.clone()));
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    let on_frame = Closure::<dyn FnMut(f64)>::new({
        let gate = gate.clone();
        let source = source.clone();
        move |_timestamp: f64| {
            gate.borrow_mut().fire();
            viewport.set(source.viewport());
        }
    });

    let on_scroll = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        let source = source.clone();
        move || {
            if !gate.borrow_mut().request() {
                return;
            }
            if let Err(err) = window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                warn!(?err, "requestAnimationFrame failed");
                gate.borrow_mut().fire();
                viewport.set(source.viewport());
            }
        }
    });

    for event in ["scroll", "resize"] {
        if let Err(err) =
            window.add_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref())
        {
            warn!(?err, event, "could not listen for window events");
        }
    }
    viewport.set(source.viewport());
    debug!("window scroll feed attached");

    // The page root lives as long as the page.
    on_scroll.forget();
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn attach_window_listener(_viewport: Signal<Viewport>) {
    debug!("no browser window; scroll feed stays fixed");
}

/// Latches to seen the first time the measured element intersects the
/// viewport. The element is measured again whenever the viewport is
/// resized before that happens.
#[derive(Clone, Copy)]
pub struct InView {
    feed: ScrollFeed,
    reveal: Signal<Reveal>,
    node: Signal<Option<Rc<MountedData>>>,
}

pub fn use_in_view() -> InView {
    let feed = use_feed();
    let mode = use_render_mode();
    let reveal = use_signal(|| match mode {
        RenderMode::Snapshot => Reveal::SHOWN,
        RenderMode::Interactive => Reveal::HIDDEN,
    });
    let node = use_signal(|| None::<Rc<MountedData>>);
    let in_view = InView { feed, reveal, node };

    use_effect(move || {
        let viewport = (feed.0)();
        if reveal.peek().is_stale(viewport) {
            if let Some(node) = node.peek().clone() {
                debug!(height = viewport.height, "viewport resized; measuring again");
                spawn(in_view.take_measurement(node));
            }
        }
        in_view.observe(viewport);
    });

    in_view
}

impl InView {
    pub fn seen(&self) -> bool {
        self.reveal.read().seen()
    }

    fn reveal(&self) -> Reveal {
        *self.reveal.read()
    }

    fn observe(&self, viewport: Viewport) {
        let mut next = *self.reveal.peek();
        if next.observe(viewport) {
            let mut reveal = self.reveal;
            reveal.set(next);
        }
    }

    /// `onmounted` handler recording the element's document position.
    pub async fn measure(self, evt: MountedEvent) {
        let node = evt.data();
        let mut slot = self.node;
        slot.set(Some(node.clone()));
        self.take_measurement(node).await
    }

    async fn take_measurement(self, node: Rc<MountedData>) {
        match node.get_client_rect().await {
            Ok(rect) => {
                let viewport = *self.feed.0.peek();
                let bounds = Bounds::from_client_rect(rect.origin.y, rect.size.height, viewport);
                let mut next = *self.reveal.peek();
                next.measure(bounds, viewport);
                next.observe(viewport);
                let mut reveal = self.reveal;
                reveal.set(next);
            }
            Err(err) => warn!(?err, "could not measure element"),
        }
    }
}

/// An element's entrance animation.
#[derive(Clone, Copy)]
pub struct Entrance {
    machine: Signal<EntranceMachine>,
    in_view: InView,
}

pub fn use_entrance(config: EntranceConfig) -> Entrance {
    let in_view = use_in_view();
    let mut machine = use_signal(|| {
        let mut machine = EntranceMachine::new(config);
        machine.follow(&in_view.reveal.peek());
        machine
    });

    use_effect(move || {
        let reveal = in_view.reveal();
        let mut next = *machine.peek();
        if next.follow(&reveal) {
            machine.set(next);
        }
    });

    Entrance { machine, in_view }
}

impl Entrance {
    pub fn style(&self) -> String {
        self.machine.read().style()
    }

    pub async fn measure(self, evt: MountedEvent) {
        self.in_view.measure(evt).await
    }

    /// `onanimationend` handler.
    pub fn settle(&mut self) {
        if let Err(err) = self.machine.write().finish() {
            debug!(%err, "animation end ignored");
        }
    }
}

#[derive(Clone, Copy)]
pub struct Hover {
    machine: Signal<HoverMachine>,
}

pub fn use_hover(config: HoverConfig) -> Hover {
    let machine = use_signal(|| HoverMachine::new(config));
    Hover { machine }
}

impl Hover {
    pub fn machine(&self) -> ReadOnlySignal<HoverMachine> {
        ReadOnlySignal::new(self.machine)
    }

    pub fn enter(&mut self) {
        if self.machine.peek().phase() != HoverPhase::HoverActive {
            self.machine.write().enter();
        }
    }

    pub fn leave(&mut self) {
        if self.machine.peek().phase() != HoverPhase::RestIdle {
            self.machine.write().leave();
        }
    }
}
