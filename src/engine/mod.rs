//! Layout configuration engine - ClipLayout and its registry.
//!
//! - ClipLayout: Persistent layout configuration with reactive Slot properties
//! - ClipLayoutRegistry: Node → ClipLayout association (lazy creation, caching)
//!
//! # Architecture
//!
//! Host node types cannot carry extra fields, so configurations live in a
//! thread-local side table keyed by node identity:
//!
//! ```text
//! Rc<View>  @0x5600_a010 ──► Rc<ClipLayout> (enabled, insets, ...) ──weak──► View
//! Rc<Layer> @0x5600_a090 ──► Rc<ClipLayout> (...)                  ──weak──► Layer
//! ```
//!
//! The table owns each ClipLayout on behalf of its node. The ClipLayout only
//! points back weakly, so neither side keeps the other alive.

mod clip_layout;
mod clip_layout_registry;

pub use clip_layout::*;
pub use clip_layout_registry::*;
