use glam::{Vec2, vec2};
use log::trace;

use crate::{
    layout::{Dirty, Rect},
    measure::MeasureSpec,
    signals::{NodeId, ScopedNodeContext},
    text::Fonts,
    widgets::{BuildCtx, Widget},
};

pub struct Node {
    widget: Box<dyn Widget>,
    children: Vec<Node>,
    id: NodeId,

    pub layout_rect: Rect, // absolute rect in parent space
    cached_size: Vec2,     // result of the last measurement pass
    dirty: Dirty,
}

impl Node {
    pub fn new(widget: Box<dyn Widget>, layout: Rect, ctx: &mut BuildCtx) -> Self {
        let kids = widget
            .build(ctx)
            .into_iter()
            .map(|w| Node::new(w, layout, ctx))
            .collect();

        Self {
            widget,
            children: kids,
            id: NodeId::new(),
            layout_rect: layout,
            cached_size: layout.size,
            dirty: Dirty {
                self_dirty: true,
                child_dirty: true,
            },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn cached_size(&self) -> Vec2 {
        self.cached_size
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Invalidate the whole subtree, e.g. after the available size changed.
    pub fn mark_dirty(&mut self) {
        self.dirty.self_dirty = true;
        self.dirty.child_dirty = true;
        for child in &mut self.children {
            child.mark_dirty();
        }
    }

    /// Invalidate the node a signal write points at. Returns whether the id
    /// was found in this subtree.
    pub fn mark_dirty_by_id(&mut self, id: NodeId) -> bool {
        if self.id == id {
            self.dirty.self_dirty = true;
            return true;
        }
        for child in &mut self.children {
            if child.mark_dirty_by_id(id) {
                self.dirty.child_dirty = true;
                return true;
            }
        }
        false
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.layout_rect = rect;
        self.mark_dirty();
    }

    /// One measurement pass over the subtree: parent-built specs in,
    /// committed size out. Clean subtrees are skipped, so re-running a pass
    /// with unchanged specs and unchanged widget state returns the
    /// identical size.
    pub fn measure(
        &mut self,
        fonts: &mut Fonts,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Vec2 {
        if !self.dirty.self_dirty && !self.dirty.child_dirty {
            return self.cached_size;
        }

        let style = self.widget.style();
        if !style.visible {
            self.cached_size = Vec2::ZERO;
            self.dirty = Dirty::default();
            return self.cached_size;
        }

        // Fixed style dimensions tighten the parent's constraint before the
        // widget sees it.
        let width_spec = match style.width {
            Some(w) => MeasureSpec::exactly(width_spec.cap().map_or(w, |cap| w.min(cap))),
            None => width_spec,
        };
        let height_spec = match style.height {
            Some(h) => MeasureSpec::exactly(height_spec.cap().map_or(h, |cap| h.min(cap))),
            None => height_spec,
        };

        if self.children.is_empty() {
            if self.dirty.self_dirty {
                // Signal reads inside `measure` subscribe this node.
                let _scope = ScopedNodeContext::new(self.id);
                self.cached_size = self.widget.measure(fonts, width_spec, height_spec);
                trace!(
                    "measured {:?}: {}x{}",
                    self.id, self.cached_size.x, self.cached_size.y
                );
            }
            self.dirty = Dirty::default();
            return self.cached_size;
        }

        // Block flow: children stack vertically inside the content box,
        // each handed a constraint derived from ours.
        let child_w = width_spec.for_child(style.padding_total().x);
        let child_h = height_spec.for_child(style.padding_total().y);

        let mut extent = Vec2::ZERO;
        for child in &mut self.children {
            let size = child.measure(fonts, child_w, child_h);
            extent.x = extent.x.max(size.x);
            extent.y += size.y;
        }

        self.cached_size = vec2(
            width_spec.resolve(extent.x + style.padding_total().x),
            height_spec.resolve(extent.y + style.padding_total().y),
        );
        self.dirty = Dirty::default();
        self.cached_size
    }

    /// Positioning pass: assign final rects from the sizes the measurement
    /// pass committed. Runs strictly after `measure`.
    pub fn place(&mut self, origin: Vec2) {
        self.layout_rect = Rect::new(origin, self.cached_size);

        let content_origin = origin + self.widget.style().padding_tl();
        let mut y = 0.0;
        for child in &mut self.children {
            child.place(content_origin + vec2(0.0, y));
            y += child.cached_size.y;
        }
    }

    /// Measure against the window size and position the tree.
    pub fn run_pass(&mut self, fonts: &mut Fonts, avail: Vec2) -> Vec2 {
        let size = self.measure(
            fonts,
            MeasureSpec::exactly(avail.x),
            MeasureSpec::exactly(avail.y),
        );
        let origin = self.layout_rect.origin;
        self.place(origin);
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Element, Label};

    fn tree(root: Element) -> Node {
        Node::new(
            Box::new(root),
            Rect::new(Vec2::ZERO, vec2(320.0, 480.0)),
            &mut BuildCtx,
        )
    }

    #[test]
    fn children_stack_vertically_inside_the_padding() {
        let mut fonts = Fonts::new();
        let mut root = tree(
            Element::new()
                .padding(10.0)
                .child(Label::new("first line of text"))
                .child(Label::new("second line of text")),
        );

        root.run_pass(&mut fonts, vec2(320.0, 480.0));

        let kids = root.children();
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].layout_rect.origin, vec2(10.0, 10.0));
        assert_eq!(
            kids[1].layout_rect.origin.y,
            kids[0].layout_rect.origin.y + kids[0].cached_size().y
        );
        assert!(root.layout_rect.contains(kids[0].layout_rect.origin));
        for kid in kids {
            assert!(kid.cached_size().x <= 300.0);
        }
    }

    #[test]
    fn an_exact_root_constraint_fixes_the_root_size() {
        let mut fonts = Fonts::new();
        let mut root = tree(Element::new().child(Label::new("hi")));
        let size = root.run_pass(&mut fonts, vec2(320.0, 480.0));
        assert_eq!(size, vec2(320.0, 480.0));
    }

    #[test]
    fn a_clean_second_pass_returns_the_identical_size() {
        let mut fonts = Fonts::new();
        let mut root = tree(Element::new().child(Label::new("stable content")));

        let first = root.run_pass(&mut fonts, vec2(320.0, 480.0));
        let child_first = root.children()[0].cached_size();
        let second = root.run_pass(&mut fonts, vec2(320.0, 480.0));
        let child_second = root.children()[0].cached_size();

        assert_eq!(first, second);
        assert_eq!(child_first, child_second);
    }

    #[test]
    fn invisible_nodes_collapse_to_zero() {
        let mut fonts = Fonts::new();
        let mut root = tree(
            Element::new()
                .child(Element::new().visible(false).child(Label::new("hidden")))
                .child(Label::new("shown")),
        );

        root.run_pass(&mut fonts, vec2(320.0, 480.0));
        assert_eq!(root.children()[0].cached_size(), Vec2::ZERO);
    }

    #[test]
    fn a_signal_write_re_measures_the_owning_node() {
        use crate::signals;
        use std::sync::mpsc;

        let (tx, rx) = mpsc::channel();
        signals::init_reactivity(tx);
        let (content, set_content) = signals::create_signal(String::from("a"));

        let mut fonts = Fonts::new();
        let mut root = tree(Element::new().child(Label::bound(content)));
        root.run_pass(&mut fonts, vec2(320.0, 480.0));
        let before = root.children()[0].cached_size();

        set_content.set("a noticeably longer piece of text".into());
        let mut found = false;
        for id in rx.try_iter() {
            found |= root.mark_dirty_by_id(id);
        }
        assert!(found, "the label's node never subscribed to its content");

        root.run_pass(&mut fonts, vec2(320.0, 480.0));
        let after = root.children()[0].cached_size();
        assert!(after.x >= before.x);
    }

    #[test]
    fn style_width_turns_into_an_exact_constraint() {
        let mut fonts = Fonts::new();
        let mut root = tree(Element::new().child(
            Element::new().width(120.0).height(40.0).child(Label::new("x")),
        ));
        root.run_pass(&mut fonts, vec2(320.0, 480.0));
        assert_eq!(root.children()[0].cached_size(), vec2(120.0, 40.0));
    }
}
