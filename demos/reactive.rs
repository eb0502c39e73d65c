use std::sync::mpsc;

use anyhow::Result;
use glam::{Vec2, vec2};

use snug::{
    layout::{Node, Rect},
    signals,
    text::Fonts,
    widgets::{BuildCtx, Element, Label},
};

fn main() -> Result<()> {
    snug::init_logging();

    let (tx, rx) = mpsc::channel();
    signals::init_reactivity(tx);

    let (content, set_content) = signals::create_signal(String::from("typing"));

    let screen = vec2(320.0, 480.0);
    let root = Element::new().padding(8.0).child(Label::bound(content));
    let mut tree = Node::new(
        Box::new(root),
        Rect::new(Vec2::ZERO, screen),
        &mut BuildCtx,
    );
    let mut fonts = Fonts::new();

    tree.run_pass(&mut fonts, screen);
    let before = tree.children()[0].cached_size();
    println!("before: {}x{}", before.x, before.y);

    set_content.set("typing a much longer message now".into());
    for id in rx.try_iter() {
        tree.mark_dirty_by_id(id);
    }

    tree.run_pass(&mut fonts, screen);
    let after = tree.children()[0].cached_size();
    println!("after:  {}x{}", after.x, after.y);
    Ok(())
}
