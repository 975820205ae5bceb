//! Page-space geometry
//!
//! All coordinates are CSS pixels in document space: `y` grows downward from
//! the top of the page, so a region's position does not change as the page
//! scrolls. The viewport is the window onto that space.

/// An axis-aligned rectangle in document coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area, zero for degenerate rectangles
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping region of two rectangles, if any
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

/// The visible window onto the document
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset (`window.scrollY`)
    pub scroll_y: f32,
    /// Viewport width
    pub width: f32,
    /// Viewport height
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(scroll_y: f32, width: f32, height: f32) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }

    /// Same viewport scrolled to a different offset
    pub fn scrolled_to(self, scroll_y: f32) -> Self {
        Self { scroll_y, ..self }
    }

    /// The viewport as a document-space rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }
}

/// Fraction of `region` currently inside `viewport`, in `[0, 1]`
///
/// Zero-area regions never intersect.
pub fn intersection_ratio(region: &Rect, viewport: &Viewport) -> f32 {
    let area = region.area();
    if area <= 0.0 {
        return 0.0;
    }

    match region.intersect(&viewport.rect()) {
        Some(visible) => (visible.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}
