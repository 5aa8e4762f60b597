//! Layout data types
//!
//! All lengths are millimeters with the origin at the top-left corner of
//! the page (y grows downwards). Rendering flips to PDF user space.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Where an image lands on its page. Derived per conversion, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedImage {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Distance from the left page edge
    pub x_mm: f32,
    /// Distance from the top page edge
    pub y_mm: f32,
}

impl PlacedImage {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x_mm, self.y_mm, self.width_mm, self.height_mm)
    }
}

/// Offset along one axis: leading edge, middle or trailing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    Start,
    Center,
    End,
}

impl AxisAlign {
    /// Offset of an item of length `item` inside a span of length `span`
    pub fn offset(self, span: f32, item: f32) -> f32 {
        match self {
            AxisAlign::Start => 0.0,
            AxisAlign::Center => (span - item) / 2.0,
            AxisAlign::End => span - item,
        }
    }
}

/// One of the nine named anchor points in the usable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Parse a position token. Short aliases (`top`, `left`, ...) are
    /// accepted; unknown and empty strings resolve to [`Anchor::Center`].
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "top-left" => Anchor::TopLeft,
            "top-center" | "top" => Anchor::TopCenter,
            "top-right" => Anchor::TopRight,
            "center-left" | "left" => Anchor::CenterLeft,
            "center" | "center-center" => Anchor::Center,
            "center-right" | "right" => Anchor::CenterRight,
            "bottom-left" => Anchor::BottomLeft,
            "bottom-center" | "bottom" => Anchor::BottomCenter,
            "bottom-right" => Anchor::BottomRight,
            _ => Anchor::Center,
        }
    }

    /// Canonical token
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Horizontal component (left / center / right)
    pub fn horizontal(self) -> AxisAlign {
        match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => AxisAlign::Start,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => AxisAlign::Center,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => AxisAlign::End,
        }
    }

    /// Vertical component (top / center / bottom)
    pub fn vertical(self) -> AxisAlign {
        match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => AxisAlign::Start,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => AxisAlign::Center,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => AxisAlign::End,
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
