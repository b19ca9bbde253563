//! Geometry
//!
//! Offsets are document-relative. There is no layout pass, so hosts and
//! tests assign them directly.

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DomRect {
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Element box geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,
}

impl ElementGeometry {
    /// Vertical band starting at `top`
    pub fn band(top: f64, height: f64) -> Self {
        Self {
            offset_top: top,
            offset_height: height,
            ..Self::default()
        }
    }

    /// Rect relative to the viewport for the given scroll offsets
    pub fn bounding_client_rect(&self, scroll_x: f64, scroll_y: f64) -> DomRect {
        DomRect::from_xywh(
            self.offset_left - scroll_x,
            self.offset_top - scroll_y,
            self.offset_width,
            self.offset_height,
        )
    }

    /// Whether a document y coordinate falls in `[top, top + height)`
    pub fn spans_y(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.offset_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rect_follows_scroll() {
        let geom = ElementGeometry::band(900.0, 400.0);
        let rect = geom.bounding_client_rect(0.0, 250.0);

        assert_eq!(rect.top(), 650.0);
        assert_eq!(rect.bottom(), 1050.0);
    }

    #[test]
    fn test_spans_is_half_open() {
        let geom = ElementGeometry::band(100.0, 50.0);

        assert!(geom.spans_y(100.0));
        assert!(geom.spans_y(149.9));
        assert!(!geom.spans_y(150.0));
        assert!(!geom.spans_y(99.0));
    }
}
