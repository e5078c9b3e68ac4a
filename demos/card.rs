//! Card Example - Configuring a small view tree and handing it to Taffy
//!
//! This example demonstrates:
//! - Batched configuration with configure_layout
//! - Views and layers sharing the same configuration surface
//! - Translating configurations into Taffy styles
//! - Applying computed frames back through the ClipLayout
//!
//! Run with: cargo run --example card

use std::rc::Rc;

use clip_layout::{
    clip_layout_count, to_taffy_style, Alignment, ClipLayout, Distribution,
    HasLayoutConfiguration, Layer, Layoutable, Rect, Size, View,
};
use taffy::prelude::TaffyMaxContent;
use taffy::{NodeId, TaffyResult, TaffyTree};

fn main() {
    println!("=== clip-layout Card Example ===\n");

    // Host tree: card row → [avatar layer, text column → [title, body]]
    let card = View::new();
    let avatar = Layer::with_preferred_frame_size(Size::new(40.0, 40.0));
    let text_column = View::new();
    let title = View::new();
    let body = View::new();

    card.configure_layout(|layout| {
        layout
            .enable()
            .with_size(Size::new(320.0, 96.0))
            .with_distribution(Distribution::Row)
            .inset(8.0);
    });
    avatar.configure_layout(|layout| {
        layout
            .enable()
            .with_size(Size::new(40.0, 40.0))
            .vertically_aligned(Alignment::Head)
            .inset_right(8.0);
    });
    text_column.configure_layout(|layout| {
        layout
            .enable()
            .with_distribution(Distribution::Column)
            .aligned(Alignment::Stretch, Alignment::Stretch);
    });
    title.configure_layout(|layout| {
        layout.enable().with_height(20.0).horizontally_aligned(Alignment::Stretch);
    });
    body.configure_layout(|layout| {
        layout
            .enable()
            .aligned(Alignment::Stretch, Alignment::Stretch)
            .inset_top(4.0);
    });

    println!("Configured {} nodes", clip_layout_count());
    for (name, clip) in [("card", card.clip()), ("avatar", avatar.clip()), ("body", body.clip())] {
        println!("  {name:<7} {:?}", clip.snapshot());
    }

    // Build the Taffy tree from the configurations
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let card_nodes = CardNodes {
        card: &card,
        avatar: &avatar,
        text_column: &text_column,
        title: &title,
        body: &body,
    };
    let (card_id, avatar_id, column_id, title_id, body_id) = match build_tree(&mut tree, &card_nodes) {
        Ok(ids) => ids,
        Err(err) => {
            eprintln!("layout failed: {err}");
            return;
        }
    };

    // Hand the results back to the nodes through their configurations
    let nodes: [(&str, Rc<ClipLayout>, NodeId); 5] = [
        ("card", card.clip(), card_id),
        ("avatar", avatar.clip(), avatar_id),
        ("column", text_column.clip(), column_id),
        ("title", title.clip(), title_id),
        ("body", body.clip(), body_id),
    ];

    println!("\nFrames:");
    for (name, clip, id) in &nodes {
        let Ok(computed) = tree.layout(*id) else { continue };
        let frame = Rect::new(
            computed.location.x,
            computed.location.y,
            computed.size.width,
            computed.size.height,
        )
        .pixel_rounded(2.0);
        clip.apply_frame(frame);
        println!("  {name:<7} {frame:?}");
    }

    println!("\nAvatar frame on the layer itself: {:?}", avatar.frame());
}

struct CardNodes<'a> {
    card: &'a Rc<View>,
    avatar: &'a Rc<Layer>,
    text_column: &'a Rc<View>,
    title: &'a Rc<View>,
    body: &'a Rc<View>,
}

type CardIds = (NodeId, NodeId, NodeId, NodeId, NodeId);

/// Mirror the host tree in Taffy and solve it.
fn build_tree(tree: &mut TaffyTree<()>, nodes: &CardNodes<'_>) -> TaffyResult<CardIds> {
    let avatar = tree.new_leaf(to_taffy_style(&nodes.avatar.clip(), Distribution::Row))?;
    let title = tree.new_leaf(to_taffy_style(&nodes.title.clip(), Distribution::Column))?;
    let body = tree.new_leaf(to_taffy_style(&nodes.body.clip(), Distribution::Column))?;
    let column = tree.new_with_children(
        to_taffy_style(&nodes.text_column.clip(), Distribution::Row),
        &[title, body],
    )?;
    let card = tree.new_with_children(
        to_taffy_style(&nodes.card.clip(), Distribution::Column),
        &[avatar, column],
    )?;

    tree.compute_layout(card, taffy::Size::MAX_CONTENT)?;
    Ok((card, avatar, column, title, body))
}
