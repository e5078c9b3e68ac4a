//! Layout engine boundary.
//!
//! The flexbox computation itself belongs to [Taffy](https://github.com/DioxusLabs/taffy).
//! This module only translates a ClipLayout into a Taffy `Style`; building the
//! Taffy tree and running the solver is the host's job.
//!
//! # Reactivity
//!
//! The bridge reads ClipLayout slots with `.get()`, so calling it from a
//! derived re-runs that derived whenever a layout property changes.
//!
//! # Example
//!
//! ```ignore
//! use clip_layout::{layout::to_taffy_style, Distribution, HasLayoutConfiguration, View};
//! use spark_signals::derived;
//!
//! let view = View::new();
//! let clip = view.clip();
//! let style = derived(move || to_taffy_style(&clip, Distribution::Column));
//! ```

mod taffy_bridge;

pub use taffy_bridge::*;
