//! Visual nodes - the host types a ClipLayout attaches to.
//!
//! Two node kinds ship with the crate: [`View`] and [`Layer`]. Both expose the
//! same [`HasLayoutConfiguration`] surface and forward it to the shared
//! registry, so "has a layout configuration" reads as a property of the node.
//!
//! Any other host type can join by implementing [`Layoutable`] and using the
//! registry functions in [`crate::engine`] directly.

mod layer;
mod view;

use std::rc::Rc;

use crate::engine::ClipLayout;
use crate::types::{Rect, Size};

pub use layer::Layer;
pub use view::View;

/// A visual node the layout engine can place.
///
/// Nodes are shared through `Rc`; identity is the `Rc` allocation.
pub trait Layoutable: 'static {
    /// Current frame in the parent's coordinate space.
    fn frame(&self) -> Rect;

    /// Accept a frame computed by the layout engine.
    fn set_frame(&self, frame: Rect);

    /// Size the node would like within `bounds`. Used by the engine for nodes
    /// without children to distribute.
    fn size_that_fits(&self, _bounds: Size) -> Size {
        self.frame().size()
    }
}

/// Layout configuration as part of a node's own surface.
pub trait HasLayoutConfiguration {
    /// The node's ClipLayout, created on first access and then always the
    /// same instance.
    fn clip(&self) -> Rc<ClipLayout>;

    /// Run `block` exactly once, synchronously, with the node's ClipLayout.
    ///
    /// Returns what `block` returns. Errors and panics pass through untouched.
    fn configure_layout<R>(&self, block: impl FnOnce(&ClipLayout) -> R) -> R;
}
