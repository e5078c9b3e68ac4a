//! Core types for clip-layout.
//!
//! Plain value types carried by `ClipLayout` slots. They are `Copy` and compare
//! exactly so slots can detect real changes.

// =============================================================================
// Alignment
// =============================================================================

/// Where a node sits along one axis of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Leading edge (top or left).
    Head,
    /// Trailing edge (bottom or right).
    Tail,
    /// Centered.
    #[default]
    Mid,
    /// Fill the space the parent leaves over.
    Stretch,
}

/// How a node arranges its enabled children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Children laid out left to right (mirrored for RTL).
    Row,
    /// Children stacked top to bottom.
    Column,
    /// Each child positioned independently within the node's bounds.
    #[default]
    None,
}

/// Alignment on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub vertical: Alignment,
    pub horizontal: Alignment,
}

impl Position {
    pub const fn new(vertical: Alignment, horizontal: Alignment) -> Self {
        Self { vertical, horizontal }
    }

    /// Centered on both axes.
    pub const CENTER: Self = Self::new(Alignment::Mid, Alignment::Mid);
}

// =============================================================================
// Geometry values
// =============================================================================

/// Width and height. A zero component means "unconstrained" in `wants_size`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Spacing kept around a node inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, left, bottom, right }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Set `value` on every edge named in `edges`, leaving the others alone.
    pub fn with_edges(mut self, edges: Edges, value: f32) -> Self {
        if edges.contains(Edges::TOP) {
            self.top = value;
        }
        if edges.contains(Edges::LEFT) {
            self.left = value;
        }
        if edges.contains(Edges::BOTTOM) {
            self.bottom = value;
        }
        if edges.contains(Edges::RIGHT) {
            self.right = value;
        }
        self
    }
}

impl From<f32> for Insets {
    fn from(value: f32) -> Self {
        Self::uniform(value)
    }
}

impl From<u16> for Insets {
    fn from(value: u16) -> Self {
        Self::uniform(value as f32)
    }
}

/// A node frame in its parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Snap every component to the device pixel grid for `scale`
    /// (device pixels per point). A non-positive scale leaves the rect as is.
    pub fn pixel_rounded(&self, scale: f32) -> Self {
        if scale <= 0.0 {
            return *self;
        }
        let round = |v: f32| (v * scale).round() / scale;
        Self::new(round(self.x), round(self.y), round(self.width), round(self.height))
    }
}

// =============================================================================
// Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Set of rectangle edges, for setting several insets at once.
    ///
    /// Combine with bitwise OR: `Edges::LEFT | Edges::RIGHT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_shortcuts() {
        assert_eq!(Insets::from(8u16), Insets::new(8.0, 8.0, 8.0, 8.0));
        assert_eq!(Insets::from(2.5), Insets::uniform(2.5));
        assert_eq!(Insets::from(0u16), Insets::ZERO);
    }

    #[test]
    fn test_insets_with_edges() {
        let insets = Insets::ZERO.with_edges(Edges::HORIZONTAL, 12.0);
        assert_eq!(insets, Insets::new(0.0, 12.0, 0.0, 12.0));

        let insets = insets.with_edges(Edges::TOP, 4.0);
        assert_eq!(insets, Insets::new(4.0, 12.0, 0.0, 12.0));

        assert_eq!(Insets::ZERO.with_edges(Edges::ALL, 1.0), Insets::uniform(1.0));
        assert_eq!(Insets::uniform(3.0).with_edges(Edges::NONE, 9.0), Insets::uniform(3.0));
    }

    #[test]
    fn test_rect_pixel_rounded() {
        let rect = Rect::new(10.2, 0.74, 99.9, 20.26);

        assert_eq!(rect.pixel_rounded(2.0), Rect::new(10.0, 0.5, 100.0, 20.5));
        assert_eq!(rect.pixel_rounded(1.0), Rect::new(10.0, 1.0, 100.0, 20.0));
        assert_eq!(rect.pixel_rounded(0.0), rect);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Position::default(), Position::CENTER);
        assert_eq!(Distribution::default(), Distribution::None);
        assert_eq!(Size::default(), Size::ZERO);
    }
}
