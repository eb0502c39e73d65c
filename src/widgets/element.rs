use glam::Vec2;

use super::{BuildCtx, Widget};
use crate::{measure::MeasureSpec, style::Style, text::Fonts};

/// Generic container: stacks its children in block flow inside its padding.
#[derive(Clone, Default)]
pub struct Element {
    pub style: Style,
    pub children: Vec<Box<dyn Widget>>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.style.padding = Vec2::splat(padding);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.style.visible = visible;
        self
    }
}

impl Widget for Element {
    fn build(&self, _ctx: &mut BuildCtx) -> Vec<Box<dyn Widget>> {
        self.children.clone()
    }

    fn style(&self) -> Style {
        self.style
    }

    fn measure(
        &mut self,
        _fonts: &mut Fonts,
        _width_spec: MeasureSpec,
        _height_spec: MeasureSpec,
    ) -> Vec2 {
        // Containers are sized from their children by the layout pass.
        Vec2::ZERO
    }
}
