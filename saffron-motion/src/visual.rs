/// Animatable visual properties of one element. `None` leaves the
/// property to the element's own styling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub opacity: Option<f64>,
    /// Horizontal translation in pixels.
    pub x: Option<f64>,
    /// Vertical translation in pixels.
    pub y: Option<f64>,
    /// Gaussian blur radius in pixels.
    pub blur: Option<f64>,
}

impl VisualState {
    pub const NONE: VisualState = VisualState {
        opacity: None,
        x: None,
        y: None,
        blur: None,
    };

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub const fn blur(mut self, value: f64) -> Self {
        self.blur = Some(value);
        self
    }

    pub fn transform_css(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(x) = self.x {
            parts.push(format!("translateX({}px)", x));
        }
        if let Some(y) = self.y {
            parts.push(format!("translateY({}px)", y));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Declarations for these properties, for use inside a `style`
    /// attribute or a keyframe block.
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            out.push_str(&format!("opacity: {}; ", opacity));
        }
        if let Some(transform) = self.transform_css() {
            out.push_str(&format!("transform: {}; ", transform));
        }
        if let Some(blur) = self.blur {
            out.push_str(&format!("filter: blur({}px); ", blur));
        }
        out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_declarations() {
        let state = VisualState::NONE.opacity(0.0).y(20.0);
        assert_eq!(state.css(), "opacity: 0; transform: translateY(20px);");

        let blurred = VisualState::NONE.opacity(1.0).blur(10.0);
        assert_eq!(blurred.css(), "opacity: 1; filter: blur(10px);");

        assert_eq!(VisualState::NONE.css(), "");
    }

    #[test]
    fn test_combined_transform_order() {
        let state = VisualState::NONE.x(-100.0).y(4.5);
        assert_eq!(
            state.transform_css().as_deref(),
            Some("translateX(-100px) translateY(4.5px)")
        );
        assert_eq!(VisualState::NONE.opacity(1.0).transform_css(), None);
    }
}
