//! ClipLayout Registry - Associates visual nodes with their ClipLayout.
//!
//! Host node types are closed, so a node's configuration lives in a side table
//! keyed by the node's address. Each node gets one ClipLayout, created on first
//! access and reused until the node is destroyed.
//!
//! Keying by address is sound while an entry exists: the stored ClipLayout
//! holds a `Weak` to the node, which keeps the allocation (and so the address)
//! from being reused. Entries whose node died without calling
//! `release_clip_layout()` are swept as the table grows.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::clip_layout::ClipLayout;
use crate::node::Layoutable;

/// Sweep threshold the table starts from.
const MIN_SWEEP_THRESHOLD: usize = 64;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map node address → ClipLayout
    static CLIP_LAYOUTS: RefCell<HashMap<usize, Rc<ClipLayout>>> = RefCell::new(HashMap::new());

    /// Table size that triggers the next sweep of dead entries.
    static SWEEP_THRESHOLD: Cell<usize> = const { Cell::new(MIN_SWEEP_THRESHOLD) };
}

/// Identity of a node: the address of its value.
fn node_key<N: ?Sized>(node: &N) -> usize {
    (node as *const N).cast::<()>() as usize
}

// =============================================================================
// ClipLayout Lifecycle
// =============================================================================

/// Get the ClipLayout for `node`, creating it on first access.
///
/// Every later call for the same live node returns the same `Rc`.
pub fn clip_layout_for<N: Layoutable>(node: &Rc<N>) -> Rc<ClipLayout> {
    let key = node_key(node.as_ref());

    let (layout, swept) = CLIP_LAYOUTS.with(|layouts| {
        let mut layouts = layouts.borrow_mut();

        if let Some(layout) = layouts.get(&key) {
            return (layout.clone(), Vec::new());
        }

        let swept = sweep_if_needed(&mut layouts);

        let owner: Weak<dyn Layoutable> = Rc::downgrade(node) as Weak<dyn Layoutable>;
        let layout = Rc::new(ClipLayout::new(owner));
        log::trace!("created clip layout for node at {key:#x}");
        layouts.insert(key, layout.clone());
        (layout, swept)
    });

    // Outside the borrow: a swept layout's bindings may own other nodes.
    for dead in &swept {
        dead.disconnect();
    }

    layout
}

/// Run `block` once, synchronously, with the ClipLayout of `node`.
///
/// Lets a caller make any number of changes through a single lookup. Whatever
/// `block` returns (an `Err` included) is returned unchanged, and a panic in
/// `block` unwinds straight through. Nothing is rolled back.
pub fn configure_clip_layout<N, R>(node: &Rc<N>, block: impl FnOnce(&ClipLayout) -> R) -> R
where
    N: Layoutable,
{
    // The table is not borrowed while `block` runs, so it may touch other nodes.
    let layout = clip_layout_for(node);
    block(&layout)
}

/// Get the ClipLayout for `node` without creating one.
pub fn get_clip_layout<N: Layoutable>(node: &Rc<N>) -> Option<Rc<ClipLayout>> {
    let key = node_key(node.as_ref());
    CLIP_LAYOUTS.with(|layouts| {
        layouts.borrow().get(&key).cloned()
    })
}

/// Drop the association for a node that is being destroyed.
///
/// Called from the node adapters' `Drop`. Disconnects the ClipLayout's slot
/// sources so bound signals stop feeding it.
pub fn release_clip_layout<N: ?Sized>(node: &N) {
    let key = node_key(node);
    // Nodes can outlive the table during thread teardown.
    let removed = CLIP_LAYOUTS
        .try_with(|layouts| layouts.borrow_mut().remove(&key))
        .ok()
        .flatten();

    if let Some(layout) = removed {
        layout.disconnect();
        log::trace!("released clip layout for node at {key:#x}");
    }
}

/// Get the number of associations currently in the registry.
pub fn clip_layout_count() -> usize {
    CLIP_LAYOUTS.with(|layouts| layouts.borrow().len())
}

/// Reset all ClipLayouts (for testing).
///
/// Disconnects every layout and clears the registry.
pub fn reset_clip_layouts() {
    let drained: Vec<Rc<ClipLayout>> = CLIP_LAYOUTS.with(|layouts| {
        layouts.borrow_mut().drain().map(|(_, layout)| layout).collect()
    });
    for layout in &drained {
        layout.disconnect();
    }
    SWEEP_THRESHOLD.with(|threshold| threshold.set(MIN_SWEEP_THRESHOLD));
}

/// Remove entries whose node died without releasing them.
///
/// Runs when the table reaches the threshold, which then doubles relative to
/// the surviving entries so sweeps stay amortized. Returns the removed layouts.
fn sweep_if_needed(layouts: &mut HashMap<usize, Rc<ClipLayout>>) -> Vec<Rc<ClipLayout>> {
    let threshold = SWEEP_THRESHOLD.with(Cell::get);
    if layouts.len() < threshold {
        return Vec::new();
    }

    let dead: Vec<usize> = layouts
        .iter()
        .filter(|(_, layout)| !layout.is_attached())
        .map(|(&key, _)| key)
        .collect();
    let swept: Vec<Rc<ClipLayout>> = dead.iter().filter_map(|key| layouts.remove(key)).collect();

    SWEEP_THRESHOLD.with(|t| t.set((layouts.len() * 2).max(MIN_SWEEP_THRESHOLD)));
    log::trace!("swept {} dead clip layouts, {} remain", swept.len(), layouts.len());
    swept
}
