/// Named style tokens for the whole page.
///
/// One value is created at startup and handed to every component through
/// props. Components build their inline declarations from these fields
/// instead of relying on class names defined somewhere in global CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Gold accent used for the brand mark, headings and rules.
    pub color_saffron: &'static str,
    /// Page background.
    pub color_ink: &'static str,
    /// Dish card background.
    pub color_night: &'static str,
    /// Footer background.
    pub color_footer: &'static str,
    pub font_serif: &'static str,
    pub font_sans: &'static str,
    pub font_import_url: &'static str,
}

impl Theme {
    pub const SAFFRON_TREE: Theme = Theme {
        color_saffron: "#D4AF37",
        color_ink: "#0a0a0a",
        color_night: "#161616",
        color_footer: "#050505",
        font_serif: "'Playfair Display', serif",
        font_sans: "'Inter', sans-serif",
        font_import_url: "https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,700;1,400&family=Inter:wght@300;400&display=swap",
    };

    /// Document-wide declarations, injected exactly once by the page root.
    pub fn global_css(&self) -> String {
        format!(
            ":root {{ --saffron: {saffron}; }}\n\
             body {{ font-family: {sans}; background-color: {ink}; margin: 0; }}\n\
             .font-serif {{ font-family: {serif}; }}\n\
             ::selection {{ background-color: rgba(212, 175, 55, 0.3); }}\n",
            saffron = self.color_saffron,
            sans = self.font_sans,
            ink = self.color_ink,
            serif = self.font_serif,
        )
    }

    pub fn serif_style(&self) -> String {
        format!("font-family: {};", self.font_serif)
    }

    pub fn saffron_text_style(&self) -> String {
        format!("color: {};", self.color_saffron)
    }

    /// Serif heading in the accent color, the most common pairing on the page.
    pub fn saffron_serif_style(&self) -> String {
        format!("{} {}", self.saffron_text_style(), self.serif_style())
    }

    pub fn background_style(&self, color: &str) -> String {
        format!("background-color: {};", color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_css_declares_saffron_token() {
        let css = Theme::SAFFRON_TREE.global_css();
        assert!(css.contains(":root { --saffron: #D4AF37; }"));
        assert!(css.contains("'Inter', sans-serif"));
        assert!(css.contains(".font-serif { font-family: 'Playfair Display', serif; }"));
    }

    #[test]
    fn test_renamed_token_flows_to_consumers() {
        let theme = Theme {
            color_saffron: "#f4c430",
            ..Theme::SAFFRON_TREE
        };
        assert_eq!(theme.saffron_text_style(), "color: #f4c430;");
        assert!(theme.global_css().contains("--saffron: #f4c430"));
        assert_eq!(
            theme.saffron_serif_style(),
            "color: #f4c430; font-family: 'Playfair Display', serif;"
        );
    }
}
