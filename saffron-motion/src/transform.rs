/// Clamped linear mapping from an input domain onto an output range.
///
/// Inputs before the start of the domain produce the start of the range,
/// inputs past its end produce the end of the range. Either interval may be
/// descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Scroll offset in pixels to the hero background's vertical translation.
pub const HERO_PARALLAX: LinearMap = LinearMap {
    domain: (0.0, 500.0),
    range: (0.0, 200.0),
};

impl LinearMap {
    pub fn map(&self, input: f64) -> f64 {
        if input.is_nan() {
            return self.range.0;
        }
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = ((input - d0) / (d1 - d0)).clamp(0.0, 1.0);
        r0 + t * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_endpoints() {
        assert_eq!(HERO_PARALLAX.map(0.0), 0.0);
        assert_eq!(HERO_PARALLAX.map(500.0), 200.0);
    }

    #[test]
    fn test_parallax_midpoint() {
        assert_eq!(HERO_PARALLAX.map(250.0), 100.0);
        assert_eq!(HERO_PARALLAX.map(125.0), 50.0);
    }

    #[test]
    fn test_parallax_clamps_outside_domain() {
        assert_eq!(HERO_PARALLAX.map(600.0), 200.0);
        assert_eq!(HERO_PARALLAX.map(-50.0), 0.0);
        assert_eq!(HERO_PARALLAX.map(f64::INFINITY), 200.0);
        assert_eq!(HERO_PARALLAX.map(f64::NAN), 0.0);
    }

    #[test]
    fn test_descending_range() {
        let fade = LinearMap {
            domain: (0.0, 100.0),
            range: (1.0, 0.0),
        };
        assert_eq!(fade.map(25.0), 0.75);
        assert_eq!(fade.map(400.0), 0.0);
        assert_eq!(fade.map(-1.0), 1.0);
    }
}
