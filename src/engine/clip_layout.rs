//! ClipLayout - Persistent layout configuration with reactive Slot properties.
//!
//! Each visual node gets at most one ClipLayout, created the first time it is
//! asked for and kept until the node is destroyed. Properties are Slots that
//! hold static values or bind to signals. The external layout engine reads
//! `.get()` on them, creating reactive dependencies.
//!
//! The ClipLayout never owns its node. It keeps a `Weak` back reference so the
//! engine can hand computed frames to the node.

use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{slot, Slot};

use crate::node::Layoutable;
use crate::types::{Alignment, Distribution, Edges, Insets, Position, Rect, Size};

/// Read a Slot's current value. A slot with no source reads as the type's default.
macro_rules! read_slot {
    ($slot:expr) => {
        $slot.get().unwrap_or_default()
    };
}

/// Layout intent for one visual node.
///
/// # Property Categories
///
/// - **Participation**: enabled
/// - **Placement**: alignment, insets, wants_size
/// - **Children**: distribution, support_right_to_left
/// - **Engine**: cache
///
/// # Example
///
/// ```ignore
/// use clip_layout::{Alignment, Distribution, HasLayoutConfiguration, View};
///
/// let view = View::new();
/// view.configure_layout(|layout| {
///     layout
///         .enable()
///         .with_distribution(Distribution::Column)
///         .horizontally_aligned(Alignment::Stretch)
///         .inset(8.0);
/// });
/// ```
pub struct ClipLayout {
    owner: Weak<dyn Layoutable>,

    /// Whether the node takes part in its parent's layout (default false).
    pub enabled: Slot<bool>,

    /// Placement of the node on both axes of its parent.
    pub alignment: Slot<Position>,

    /// Spacing kept around the node inside its parent.
    pub insets: Slot<Insets>,

    /// Requested size. Zero components are unconstrained.
    pub wants_size: Slot<Size>,

    /// How enabled children are arranged.
    pub distribution: Slot<Distribution>,

    /// Mirror row distribution for right-to-left interfaces (default true).
    pub support_right_to_left: Slot<bool>,

    /// Last measured size, maintained by the layout engine. Zero means unmeasured.
    pub cache: Slot<Size>,
}

impl ClipLayout {
    /// Create a ClipLayout with default values, owned by `owner`.
    pub fn new(owner: Weak<dyn Layoutable>) -> Self {
        Self {
            owner,
            enabled: slot(Some(false)),
            alignment: slot(Some(Position::CENTER)),
            insets: slot(Some(Insets::ZERO)),
            wants_size: slot(Some(Size::ZERO)),
            distribution: slot(Some(Distribution::None)),
            support_right_to_left: slot(Some(true)),
            cache: slot(Some(Size::ZERO)),
        }
    }

    // =========================================================================
    // Owner
    // =========================================================================

    /// The node this configuration belongs to, if it is still alive.
    pub fn owner(&self) -> Option<Rc<dyn Layoutable>> {
        self.owner.upgrade()
    }

    /// True while the owning node is alive.
    pub fn is_attached(&self) -> bool {
        self.owner.strong_count() > 0
    }

    /// Hand a computed frame to the owning node.
    ///
    /// Returns false when the node has already been destroyed.
    pub fn apply_frame(&self, frame: Rect) -> bool {
        match self.owner.upgrade() {
            Some(node) => {
                node.set_frame(frame);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Fluent configuration
    // =========================================================================

    pub fn enable(&self) -> &Self {
        self.enabled.set_value(true);
        self
    }

    pub fn disable(&self) -> &Self {
        self.enabled.set_value(false);
        self
    }

    /// Same inset on every edge.
    pub fn inset(&self, inset: f32) -> &Self {
        self.insets.set_value(Insets::uniform(inset));
        self
    }

    pub fn inset_all(&self, top: f32, left: f32, bottom: f32, right: f32) -> &Self {
        self.insets.set_value(Insets::new(top, left, bottom, right));
        self
    }

    /// Set `inset` on the given edges only.
    pub fn inset_edges(&self, edges: Edges, inset: f32) -> &Self {
        self.insets.set_value(read_slot!(self.insets).with_edges(edges, inset));
        self
    }

    pub fn inset_top(&self, inset: f32) -> &Self {
        self.inset_edges(Edges::TOP, inset)
    }

    pub fn inset_left(&self, inset: f32) -> &Self {
        self.inset_edges(Edges::LEFT, inset)
    }

    pub fn inset_bottom(&self, inset: f32) -> &Self {
        self.inset_edges(Edges::BOTTOM, inset)
    }

    pub fn inset_right(&self, inset: f32) -> &Self {
        self.inset_edges(Edges::RIGHT, inset)
    }

    pub fn with_distribution(&self, distribution: Distribution) -> &Self {
        self.distribution.set_value(distribution);
        self
    }

    pub fn aligned(&self, vertical: Alignment, horizontal: Alignment) -> &Self {
        self.alignment.set_value(Position::new(vertical, horizontal));
        self
    }

    pub fn vertically_aligned(&self, alignment: Alignment) -> &Self {
        let mut position = read_slot!(self.alignment);
        position.vertical = alignment;
        self.alignment.set_value(position);
        self
    }

    pub fn horizontally_aligned(&self, alignment: Alignment) -> &Self {
        let mut position = read_slot!(self.alignment);
        position.horizontal = alignment;
        self.alignment.set_value(position);
        self
    }

    pub fn with_size(&self, size: Size) -> &Self {
        self.wants_size.set_value(size);
        self
    }

    pub fn with_width(&self, width: f32) -> &Self {
        let mut size = read_slot!(self.wants_size);
        size.width = width;
        self.wants_size.set_value(size);
        self
    }

    pub fn with_height(&self, height: f32) -> &Self {
        let mut size = read_slot!(self.wants_size);
        size.height = height;
        self.wants_size.set_value(size);
        self
    }

    pub fn supported_rtl(&self, supported: bool) -> &Self {
        self.support_right_to_left.set_value(supported);
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn is_enabled(&self) -> bool {
        read_slot!(self.enabled)
    }

    /// Current value of every property.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            enabled: read_slot!(self.enabled),
            alignment: read_slot!(self.alignment),
            insets: read_slot!(self.insets),
            wants_size: read_slot!(self.wants_size),
            distribution: read_slot!(self.distribution),
            support_right_to_left: read_slot!(self.support_right_to_left),
            cache: read_slot!(self.cache),
        }
    }

    // =========================================================================
    // Engine support
    // =========================================================================

    /// Forget the measured size so the engine measures this node again.
    pub fn invalidate_cache(&self) {
        self.cache.set_value(Size::ZERO);
    }

    /// Disconnect all slot sources and restore defaults.
    ///
    /// Called when the owning node is released from the registry.
    pub fn disconnect(&self) {
        self.enabled.set_value(false);
        self.alignment.set_value(Position::CENTER);
        self.insets.set_value(Insets::ZERO);
        self.wants_size.set_value(Size::ZERO);
        self.distribution.set_value(Distribution::None);
        self.support_right_to_left.set_value(true);
        self.cache.set_value(Size::ZERO);
    }
}

impl fmt::Debug for ClipLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipLayout")
            .field("attached", &self.is_attached())
            .field("values", &self.snapshot())
            .finish()
    }
}

/// Plain copy of a ClipLayout's property values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub enabled: bool,
    pub alignment: Position,
    pub insets: Insets,
    pub wants_size: Size,
    pub distribution: Distribution,
    pub support_right_to_left: bool,
    pub cache: Size,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self {
            enabled: false,
            alignment: Position::CENTER,
            insets: Insets::ZERO,
            wants_size: Size::ZERO,
            distribution: Distribution::None,
            support_right_to_left: true,
            cache: Size::ZERO,
        }
    }
}
