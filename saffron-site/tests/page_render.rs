use saffron_motion::content::{
    GALLERY_FRAME_COUNT, GALLERY_IMAGE_ALT, GALLERY_IMAGE_URL, NAV_SECTIONS, SIGNATURE_DISHES,
};
use saffron_motion::presets::GALLERY_DRIFT;
use saffron_motion::scroll::Viewport;
use saffron_site::hooks::RenderMode;
use saffron_site::render_page;

const STYLESHEET: &str = "/assets/tailwind.css";

fn render_at(offset_y: f64) -> String {
    render_page(
        Viewport::new(offset_y, 800.0),
        RenderMode::Interactive,
        STYLESHEET,
    )
}

// Attribute values may come back HTML-escaped.
fn has_attr(html: &str, name: &str, value: &str) -> bool {
    html.contains(&format!("{}=\"{}\"", name, value))
        || html.contains(&format!("{}=\"{}\"", name, value.replace('&', "&amp;")))
}

#[test]
fn test_static_text_without_network() {
    let html = render_at(0.0);
    for text in [
        "The Saffron Tree",
        "Kolkata • Michelin Standard",
        "Saffron Lobster",
        "Truffle Galouti",
        "The Golden Veil",
    ] {
        assert!(html.contains(text), "missing {:?}", text);
    }
}

#[test]
fn test_dishes_render_title_description_and_exact_image() {
    let html = render_at(0.0);
    for dish in SIGNATURE_DISHES {
        assert!(html.contains(dish.title), "missing title {}", dish.title);
        assert!(
            html.contains(dish.description),
            "missing description for {}",
            dish.title
        );
        assert!(
            has_attr(&html, "src", dish.image_url),
            "missing image for {}",
            dish.title
        );
    }
}

#[test]
fn test_nav_anchors_match_exactly_one_section_each() {
    let html = render_at(0.0);
    for section in NAV_SECTIONS {
        assert!(
            has_attr(&html, "href", section.anchor()),
            "missing link {}",
            section.anchor()
        );
        let id = format!("id=\"{}\"", section.anchor().trim_start_matches('#'));
        assert_eq!(html.matches(&id).count(), 1, "{} should appear once", id);
    }
}

#[test]
fn test_gallery_renders_five_frames() {
    let html = render_at(0.0);
    let alt = format!("alt=\"{}\"", GALLERY_IMAGE_ALT);
    assert_eq!(html.matches(&alt).count(), GALLERY_FRAME_COUNT);
    assert!(has_attr(&html, "src", GALLERY_IMAGE_URL));
    assert_eq!(GALLERY_FRAME_COUNT, 5);
}

#[test]
fn test_gallery_keyframes_mirror_instead_of_jumping() {
    let html = render_at(0.0);
    assert!(html.contains("@keyframes gallery-drift { 0% { transform: translateX(0px);"));
    assert!(html.contains("100% { transform: translateX(0px); } }"));
    assert_eq!(GALLERY_DRIFT.transition.duration(), 20.0);
}

#[test]
fn test_gallery_drift_waits_for_view_when_interactive() {
    let interactive = render_at(0.0);
    assert!(!interactive.contains("animation: gallery-drift"));

    let snapshot = render_page(Viewport::TOP, RenderMode::Snapshot, STYLESHEET);
    assert!(snapshot.contains(&format!("animation: {}", GALLERY_DRIFT.animation_css())));
}

// The hero background is the only element styled by the translation alone.
fn hero_offset(html: &str, px: &str) -> bool {
    has_attr(html, "style", &format!("transform: translateY({}px);", px))
}

#[test]
fn test_hero_parallax_midpoint() {
    assert!(hero_offset(&render_at(0.0), "0"));
    assert!(hero_offset(&render_at(250.0), "100"));
    assert!(hero_offset(&render_at(500.0), "200"));
}

#[test]
fn test_hero_parallax_clamps() {
    let past_domain = render_at(600.0);
    assert!(hero_offset(&past_domain, "200"));
    assert!(!past_domain.contains("translateY(240px)"));

    let overscrolled = render_at(-50.0);
    assert!(hero_offset(&overscrolled, "0"));
    assert!(!overscrolled.contains("translateY(-20px)"));
}

#[test]
fn test_scrolled_render_still_waits_for_measurement() {
    // Far down the page, but nothing has been measured during a one-shot render.
    let html = render_at(1500.0);
    assert!(!html.contains("animation: philosophy-headline"));
    assert!(!html.contains("animation: gallery-drift"));
}

#[test]
fn test_philosophy_kicker_uses_standard_easing() {
    let snapshot = render_page(Viewport::TOP, RenderMode::Snapshot, STYLESHEET);
    assert!(snapshot.contains(
        "animation: philosophy-kicker 0.3s cubic-bezier(0.25, 0.1, 0.35, 1) 0s 1 normal both;"
    ));
}

#[test]
fn test_hero_entrances_start_on_load() {
    let html = render_at(0.0);
    assert!(html.contains("animation: hero-tagline 1.5s ease-in-out 0.5s 1 normal both;"));
    assert!(html.contains("animation: hero-title 2s ease-out 0s 1 normal both;"));
    assert!(html.contains("animation: hero-subtitle 2s ease-in-out 1s 1 normal both;"));
}

#[test]
fn test_philosophy_waits_hidden_until_seen() {
    let html = render_at(0.0);
    assert!(!html.contains("animation: philosophy-headline"));
    assert!(html.contains("opacity: 0; transform: translateY(30px);"));

    let snapshot = render_page(Viewport::TOP, RenderMode::Snapshot, STYLESHEET);
    assert!(snapshot.contains("animation: philosophy-headline 1s"));
}

#[test]
fn test_global_style_injected_once() {
    let html = render_at(0.0);
    assert_eq!(html.matches("--saffron: #D4AF37").count(), 1);
    assert!(has_attr(&html, "href", STYLESHEET));
}
