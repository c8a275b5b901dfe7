//! Static HTML export

use crate::config::PrerenderConfig;
use crate::error::{PrerenderError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub const INDEX_FILE: &str = "index.html";

/// Full HTML document around the rendered page. The stylesheet and font
/// links come from the page root itself.
pub fn document(config: &PrerenderConfig) -> String {
    let body = config.page.render();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"main\">{}</div>\n\
         </body>\n\
         </html>\n",
        escape_text(&config.title),
        body
    )
}

/// Writes `index.html` into the configured directory, creating it when
/// missing. Returns the written path.
pub fn write_site(config: &PrerenderConfig) -> Result<PathBuf> {
    saffron_motion::presets::validate()?;
    fs::create_dir_all(&config.out_dir).map_err(|source| PrerenderError::Io {
        path: config.out_dir.clone(),
        source,
    })?;

    let path = config.out_dir.join(INDEX_FILE);
    let html = document(config);
    debug!(mode = ?config.page.mode, "document assembled");
    fs::write(&path, &html).map_err(|source| PrerenderError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "static site written");
    Ok(path)
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Salt & <Saffron>"), "Salt &amp; &lt;Saffron&gt;");
    }
}
