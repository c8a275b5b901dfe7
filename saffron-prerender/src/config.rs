//! Configuration for a static export

use crate::error::{PrerenderError, Result};
use saffron_motion::scroll::Viewport;
use saffron_site::hooks::RenderMode;
use saffron_site::render_page;
use std::path::PathBuf;

/// How the page itself is rendered, whatever happens to the markup after.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Stylesheet href emitted by the page root
    pub stylesheet: String,
    /// Viewport the page is rendered for
    pub viewport: Viewport,
    pub mode: RenderMode,
}

impl PageConfig {
    pub fn new(stylesheet: String, viewport_height: f64, mode: RenderMode) -> Result<Self> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return Err(PrerenderError::Config(format!(
                "viewport height must be a positive number of pixels, got {}",
                viewport_height
            )));
        }
        if stylesheet.trim().is_empty() {
            return Err(PrerenderError::Config(
                "stylesheet href must not be empty".to_string(),
            ));
        }
        Ok(Self {
            stylesheet,
            viewport: Viewport::new(0.0, viewport_height),
            mode,
        })
    }

    pub fn scrolled_to(mut self, offset_y: f64) -> Self {
        self.viewport.offset_y = offset_y;
        self
    }

    /// The page markup, without a document around it.
    pub fn render(&self) -> String {
        render_page(self.viewport, self.mode, &self.stylesheet)
    }
}

/// Fully resolved export settings: `.env` file, then process environment,
/// then command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PrerenderConfig {
    /// Directory receiving `index.html`
    pub out_dir: PathBuf,
    /// Document `<title>`
    pub title: String,
    pub page: PageConfig,
}

impl PrerenderConfig {
    pub fn new(out_dir: PathBuf, title: String, page: PageConfig) -> Self {
        Self {
            out_dir,
            title,
            page,
        }
    }
}
