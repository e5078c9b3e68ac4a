//! View - Interactive visual node.

use std::cell::Cell;
use std::rc::Rc;

use super::{HasLayoutConfiguration, Layoutable};
use crate::engine::{clip_layout_for, configure_clip_layout, release_clip_layout, ClipLayout};
use crate::types::Rect;

/// A view in the host tree.
#[derive(Debug, Default)]
pub struct View {
    frame: Cell<Rect>,
}

impl View {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_frame(frame: Rect) -> Rc<Self> {
        Rc::new(Self { frame: Cell::new(frame) })
    }
}

impl Layoutable for View {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }
}

impl HasLayoutConfiguration for Rc<View> {
    fn clip(&self) -> Rc<ClipLayout> {
        clip_layout_for(self)
    }

    fn configure_layout<R>(&self, block: impl FnOnce(&ClipLayout) -> R) -> R {
        configure_clip_layout(self, block)
    }
}

impl Drop for View {
    fn drop(&mut self) {
        release_clip_layout(&*self);
    }
}
