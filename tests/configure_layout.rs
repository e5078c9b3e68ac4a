//! Node ↔ ClipLayout association, end to end through the public API.
//!
//! Run with: cargo test --test configure_layout

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use clip_layout::{
    clip_layout_count, get_clip_layout, reset_clip_layouts, Alignment, ClipLayout, Distribution,
    HasLayoutConfiguration, Insets, Layer, LayoutSnapshot, Layoutable, Rect, Size, View,
};
use spark_signals::signal;

// =============================================================================
// IDENTITY
// =============================================================================

#[test]
fn test_clip_returns_same_instance_every_time() {
    reset_clip_layouts();

    let view = View::new();
    let layer = Layer::new();

    let first = view.clip();
    for _ in 0..10 {
        assert!(Rc::ptr_eq(&first, &view.clip()));
    }
    assert!(Rc::ptr_eq(&layer.clip(), &layer.clip()));
}

#[test]
fn test_distinct_nodes_have_distinct_layouts() {
    reset_clip_layouts();

    let a = View::new();
    let b = View::new();
    let layer = Layer::new();

    assert!(!Rc::ptr_eq(&a.clip(), &b.clip()));
    assert!(!Rc::ptr_eq(&a.clip(), &layer.clip()));
    assert_eq!(clip_layout_count(), 3);
}

#[test]
fn test_layout_is_created_lazily() {
    reset_clip_layouts();

    let view = View::new();
    let layer = Layer::new();
    assert!(get_clip_layout(&view).is_none());
    assert!(get_clip_layout(&layer).is_none());
    assert_eq!(clip_layout_count(), 0);

    view.configure_layout(|_| {});
    assert!(get_clip_layout(&view).is_some());
    assert!(get_clip_layout(&layer).is_none());

    layer.clip();
    assert!(get_clip_layout(&layer).is_some());
}

#[test]
fn test_back_reference_points_at_owner_without_owning_it() {
    reset_clip_layouts();

    let view = View::new();
    let layout = view.clip();

    let owner = layout.owner().unwrap();
    assert!(std::ptr::addr_eq(Rc::as_ptr(&owner), Rc::as_ptr(&view)));
    drop(owner);

    assert_eq!(Rc::strong_count(&view), 1);
    drop(view);
    assert!(!layout.is_attached());
}

// =============================================================================
// BATCHED CONFIGURATION
// =============================================================================

#[test]
fn test_configured_width_is_visible_through_clip() {
    reset_clip_layouts();

    let a = View::new();
    let mut seen: *const ClipLayout = std::ptr::null();
    a.configure_layout(|layout| {
        layout.with_width(100.0);
        seen = layout as *const ClipLayout;
    });

    let layout = a.clip();
    assert_eq!(layout.snapshot().wants_size.width, 100.0);
    assert_eq!(Rc::as_ptr(&layout), seen);
}

#[test]
fn test_configuring_one_node_leaves_another_fresh() {
    reset_clip_layouts();

    let a = View::new();
    let b = View::new();
    a.configure_layout(|layout| {
        layout.enable().inset(8.0).with_distribution(Distribution::Column);
    });

    let fresh = b.clip();
    assert_eq!(fresh.snapshot(), LayoutSnapshot::default());
    assert!(!Rc::ptr_eq(&fresh, &a.clip()));
}

#[test]
fn test_batch_matches_direct_mutation() {
    reset_clip_layouts();

    let configure = |layout: &ClipLayout| {
        layout
            .enable()
            .inset_all(1.0, 2.0, 3.0, 4.0)
            .aligned(Alignment::Head, Alignment::Stretch)
            .with_size(Size::new(64.0, 32.0))
            .with_distribution(Distribution::Row)
            .supported_rtl(false);
    };

    let batched = Layer::new();
    batched.configure_layout(configure);

    let direct = Layer::new();
    configure(&direct.clip());

    assert_eq!(batched.clip().snapshot(), direct.clip().snapshot());
}

#[test]
fn test_block_runs_exactly_once_and_returns_its_value() {
    reset_clip_layouts();

    let view = View::new();
    let calls = Cell::new(0);
    let width = view.configure_layout(|layout| {
        calls.set(calls.get() + 1);
        layout.with_width(42.0);
        layout.snapshot().wants_size.width
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(width, 42.0);
}

#[test]
fn test_block_error_is_returned_unchanged() {
    reset_clip_layouts();

    #[derive(Debug, PartialEq)]
    struct Rejected(&'static str);

    let view = View::new();
    let result: Result<(), Rejected> = view.configure_layout(|layout| {
        layout.inset(4.0);
        Err(Rejected("no width"))
    });

    assert_eq!(result, Err(Rejected("no width")));
    // Work done before the error stays; nothing is rolled back
    assert_eq!(view.clip().snapshot().insets, Insets::uniform(4.0));
}

#[test]
fn test_block_panic_propagates_and_registry_stays_usable() {
    reset_clip_layouts();

    let view = View::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        view.configure_layout(|layout| {
            layout.enable();
            panic!("block failed");
        })
    }));

    assert!(outcome.is_err());
    let layout = view.clip();
    assert!(layout.is_enabled());
    assert!(Rc::ptr_eq(&layout, &view.clip()));
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn test_dropping_nodes_discards_their_layouts() {
    reset_clip_layouts();

    let view = View::new();
    let layer = Layer::new();
    let view_layout = view.clip();
    layer.clip();
    assert_eq!(clip_layout_count(), 2);

    drop(view);
    assert_eq!(clip_layout_count(), 1);
    assert!(!view_layout.apply_frame(Rect::new(0.0, 0.0, 1.0, 1.0)));

    drop(layer);
    assert_eq!(clip_layout_count(), 0);
}

#[test]
fn test_mutations_are_visible_in_program_order() {
    reset_clip_layouts();

    let view = View::new();
    view.configure_layout(|layout| {
        layout.with_width(10.0);
    });
    view.configure_layout(|layout| {
        assert_eq!(layout.snapshot().wants_size.width, 10.0);
        layout.with_height(20.0);
    });

    assert_eq!(view.clip().snapshot().wants_size, Size::new(10.0, 20.0));
}

#[test]
fn test_engine_frames_reach_the_node() {
    reset_clip_layouts();

    let layer = Layer::with_preferred_frame_size(Size::new(24.0, 24.0));
    layer.configure_layout(|layout| {
        layout.enable();
        assert!(layout.apply_frame(Rect::new(4.2, 4.2, 24.0, 24.0).pixel_rounded(2.0)));
    });

    assert_eq!(layer.frame(), Rect::new(4.0, 4.0, 24.0, 24.0));
}

#[test]
fn test_bound_signal_drives_layout() {
    reset_clip_layouts();

    let view = View::new();
    let inset = signal(Insets::uniform(2.0));
    view.configure_layout(|layout| {
        layout.insets.set_signal(&inset);
    });

    assert_eq!(view.clip().snapshot().insets, Insets::uniform(2.0));
    inset.set(Insets::uniform(6.0));
    assert_eq!(view.clip().snapshot().insets, Insets::uniform(6.0));
}
