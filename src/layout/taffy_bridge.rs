//! Taffy Bridge - ClipLayout to Taffy style conversion.
//!
//! A ClipLayout describes how a node sits in its parent, while Taffy splits
//! that between main and cross axes. The parent's distribution decides which
//! alignment lands on which axis, so it is passed in.
//!
//! Overlay parents (`Distribution::None`) are row containers whose children are
//! absolutely positioned. Vertical alignment goes through `align_self`.
//! Horizontal alignment goes through the child's insets, and the parent
//! centers children that leave both horizontal insets auto.

use taffy::{
    AlignSelf as TaffyAlignSelf, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent,
    LengthPercentageAuto, Position as TaffyPosition, Rect, Size, Style,
};

use crate::engine::ClipLayout;
use crate::types::{Alignment, Distribution, Insets};

// =============================================================================
// VALUE CONVERSION
// =============================================================================

/// Zero means unconstrained.
fn to_taffy_dimension(value: f32) -> TaffyDimension {
    if value > 0.0 {
        TaffyDimension::Length(value)
    } else {
        TaffyDimension::Auto
    }
}

fn to_taffy_margin(insets: Insets) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(insets.top),
        right: LengthPercentageAuto::Length(insets.right),
        bottom: LengthPercentageAuto::Length(insets.bottom),
        left: LengthPercentageAuto::Length(insets.left),
    }
}

fn to_taffy_align_self(alignment: Alignment) -> TaffyAlignSelf {
    match alignment {
        Alignment::Head => TaffyAlignSelf::FlexStart,
        Alignment::Tail => TaffyAlignSelf::FlexEnd,
        Alignment::Mid => TaffyAlignSelf::Center,
        Alignment::Stretch => TaffyAlignSelf::Stretch,
    }
}

/// `None` children overlay each other on a row container.
fn to_taffy_flex_direction(distribution: Distribution) -> TaffyFlexDirection {
    match distribution {
        Distribution::Row | Distribution::None => TaffyFlexDirection::Row,
        Distribution::Column => TaffyFlexDirection::Column,
    }
}

/// Start and end insets pinning an absolutely positioned child on one axis.
/// Mid leaves both auto.
fn to_overlay_insets(alignment: Alignment) -> (LengthPercentageAuto, LengthPercentageAuto) {
    let pinned = LengthPercentageAuto::Length(0.0);
    let auto = LengthPercentageAuto::Auto;
    match alignment {
        Alignment::Head => (pinned, auto),
        Alignment::Tail => (auto, pinned),
        Alignment::Mid => (auto, auto),
        Alignment::Stretch => (pinned, pinned),
    }
}

// =============================================================================
// STYLE
// =============================================================================

/// Build the Taffy style for a node whose parent arranges children by `parent`.
pub fn to_taffy_style(layout: &ClipLayout, parent: Distribution) -> Style {
    let values = layout.snapshot();

    if !values.enabled {
        return Style {
            display: Display::None,
            ..Style::default()
        };
    }

    // Column parents stack vertically; row and overlay parents run horizontally.
    let (main, cross) = match parent {
        Distribution::Row | Distribution::None => {
            (values.alignment.horizontal, values.alignment.vertical)
        }
        Distribution::Column => (values.alignment.vertical, values.alignment.horizontal),
    };

    let mut style = Style {
        display: Display::Flex,
        position: TaffyPosition::Relative,
        flex_direction: to_taffy_flex_direction(values.distribution),
        justify_content: match values.distribution {
            Distribution::None => Some(TaffyJustifyContent::Center),
            Distribution::Row | Distribution::Column => None,
        },
        flex_grow: if main == Alignment::Stretch { 1.0 } else { 0.0 },
        align_self: Some(to_taffy_align_self(cross)),
        size: Size {
            width: to_taffy_dimension(values.wants_size.width),
            height: to_taffy_dimension(values.wants_size.height),
        },
        margin: to_taffy_margin(values.insets),
        ..Style::default()
    };

    if parent == Distribution::None {
        let (left, right) = to_overlay_insets(values.alignment.horizontal);
        let (top, bottom) = to_overlay_insets(values.alignment.vertical);
        style.position = TaffyPosition::Absolute;
        style.flex_grow = 0.0;
        style.inset = Rect { left, right, top, bottom };
    }

    style
}
