/// Axis-aligned box in CSS pixels, viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Position of a floating element inside its wrapper, in px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}
