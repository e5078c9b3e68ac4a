//! Layer - Render layer node.

use std::cell::Cell;
use std::rc::Rc;

use super::{HasLayoutConfiguration, Layoutable};
use crate::engine::{clip_layout_for, configure_clip_layout, release_clip_layout, ClipLayout};
use crate::types::{Rect, Size};

/// A render layer in the host tree.
///
/// Layers do not size themselves from their frame; they report a preferred
/// frame size set by whoever draws into them.
#[derive(Debug, Default)]
pub struct Layer {
    frame: Cell<Rect>,
    preferred_frame_size: Cell<Size>,
}

impl Layer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_preferred_frame_size(size: Size) -> Rc<Self> {
        Rc::new(Self {
            frame: Cell::new(Rect::ZERO),
            preferred_frame_size: Cell::new(size),
        })
    }

    pub fn preferred_frame_size(&self) -> Size {
        self.preferred_frame_size.get()
    }

    pub fn set_preferred_frame_size(&self, size: Size) {
        self.preferred_frame_size.set(size);
    }
}

impl Layoutable for Layer {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }

    fn size_that_fits(&self, _bounds: Size) -> Size {
        self.preferred_frame_size()
    }
}

impl HasLayoutConfiguration for Rc<Layer> {
    fn clip(&self) -> Rc<ClipLayout> {
        clip_layout_for(self)
    }

    fn configure_layout<R>(&self, block: impl FnOnce(&ClipLayout) -> R) -> R {
        configure_clip_layout(self, block)
    }
}

impl Drop for Layer {
    fn drop(&mut self) {
        release_clip_layout(&*self);
    }
}
