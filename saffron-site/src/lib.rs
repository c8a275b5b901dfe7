//! The Saffron Tree single-page site.
//!
//! Components are plain Dioxus components; all content, style tokens and
//! motion configuration come from `saffron-motion`.

pub mod components;
pub mod hooks;
pub mod page;
pub mod render;

pub use page::SaffronTree;
pub use render::render_page;
