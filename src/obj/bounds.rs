use crate::obj::types::UvVertex;

/// Canvas margin around the pattern, in output units
pub const PADDING: f64 = 10.0;
/// Output units per UV-space unit
pub const SCALE: f64 = 500.0;

/// Axis-aligned bounding rectangle over a set of texture coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvBounds {
    pub min_u: f64,
    pub max_u: f64,
    pub min_v: f64,
    pub max_v: f64,
}

impl UvBounds {
    /// Componentwise min/max over all coordinates; `None` when empty
    pub fn of(coords: &[UvVertex]) -> Option<Self> {
        if coords.is_empty() {
            return None;
        }

        let mut bounds = UvBounds {
            min_u: f64::INFINITY,
            max_u: f64::NEG_INFINITY,
            min_v: f64::INFINITY,
            max_v: f64::NEG_INFINITY,
        };
        for c in coords {
            bounds.min_u = bounds.min_u.min(c.u);
            bounds.max_u = bounds.max_u.max(c.u);
            bounds.min_v = bounds.min_v.min(c.v);
            bounds.max_v = bounds.max_v.max(c.v);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_u - self.min_u
    }

    pub fn height(&self) -> f64 {
        self.max_v - self.min_v
    }
}

/// Projection from UV space into the padded output canvas.
///
/// The V axis is flipped so increasing v in mesh space moves up while y in
/// the output document grows downward, matching image orientation. The
/// padding and scale constants are part of the output contract; downstream
/// print-bed scaling depends on them.
#[derive(Debug, Clone, Copy)]
pub struct PatternTransform {
    bounds: UvBounds,
}

impl PatternTransform {
    pub fn new(bounds: UvBounds) -> Self {
        Self { bounds }
    }

    pub fn canvas_width(&self) -> f64 {
        self.bounds.width() * SCALE + 2.0 * PADDING
    }

    pub fn canvas_height(&self) -> f64 {
        self.bounds.height() * SCALE + 2.0 * PADDING
    }

    /// Map a texture coordinate to canvas (x, y)
    pub fn project(&self, c: UvVertex) -> (f64, f64) {
        (
            (c.u - self.bounds.min_u) * SCALE + PADDING,
            (self.bounds.max_v - c.v) * SCALE + PADDING,
        )
    }
}
