//! # clip-layout
//!
//! Per-node layout configuration for view and layer trees.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): every
//! configuration property is a reactive `Slot`.
//!
//! ## Architecture
//!
//! Every visual node can have one [`ClipLayout`], created the first time it is
//! requested and then reused for the node's lifetime. Nodes reach it through
//! [`HasLayoutConfiguration`]:
//!
//! ```text
//! view.clip()                  → Rc<ClipLayout> (same instance every time)
//! view.configure_layout(|l| …) → one lookup, any number of changes
//! ```
//!
//! The layout computation itself is external. [`layout::to_taffy_style`] turns
//! a ClipLayout into the Taffy style the engine consumes.
//!
//! ## Modules
//!
//! - [`types`] - Value types (Alignment, Distribution, Insets, Size, Rect, Edges)
//! - [`engine`] - ClipLayout and the node → ClipLayout registry
//! - [`node`] - View and Layer nodes, the Layoutable and HasLayoutConfiguration traits
//! - [`layout`] - Taffy bridge

pub mod engine;
pub mod layout;
pub mod node;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    clip_layout_count, clip_layout_for, configure_clip_layout, get_clip_layout,
    release_clip_layout, reset_clip_layouts, ClipLayout, LayoutSnapshot,
};

pub use layout::to_taffy_style;

pub use node::{HasLayoutConfiguration, Layer, Layoutable, View};
