use anyhow::Result;
use glam::{Vec2, vec2};

use snug::{
    layout::{Node, Rect},
    text::Fonts,
    widgets::{BuildCtx, Button, Element, Label},
};

fn bubble(text: &str) -> Element {
    Element::new().padding(4.0).child(Label::new(text).padding(10.0))
}

fn main() -> Result<()> {
    snug::init_logging();

    let mut fonts = Fonts::new();

    let screen = vec2(360.0, 640.0);
    let root = Element::new()
        .padding(12.0)
        .child(bubble("hey!"))
        .child(bubble(
            "a long message that wraps onto several lines on a narrow \
             screen, the way a chat bubble does",
        ))
        .child(bubble("short reply"))
        .child(Button::label("send"));

    let mut tree = Node::new(
        Box::new(root),
        Rect::new(Vec2::ZERO, screen),
        &mut BuildCtx,
    );
    let size = tree.run_pass(&mut fonts, screen);

    println!("root {}x{}", size.x, size.y);
    print_tree(&tree, 1);
    Ok(())
}

fn print_tree(node: &Node, depth: usize) {
    for child in node.children() {
        let r = child.layout_rect;
        println!(
            "{:indent$}{}x{} at ({}, {})",
            "",
            r.size.x,
            r.size.y,
            r.origin.x,
            r.origin.y,
            indent = depth * 2
        );
        print_tree(child, depth + 1);
    }
}
