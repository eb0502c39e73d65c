use glam::{Vec2, vec2};

use super::base::Widget;
use crate::{
    measure::{Measurable, MeasureSpec, shrink_wrapped_width},
    style::{
        Style,
        tokens::{Spacing, Typography},
    },
    text::{self, Fonts, Paragraph},
};

/// A labelled button.
///
/// Not a [`super::Label`]: it owns its own measurement and opts into
/// shrink-wrapping by composition, calling [`shrink_wrapped_width`] from
/// its `measure` the way any unrelated widget type can.
#[derive(Clone)]
pub struct Button {
    pub label: String,
    font_size: f32,
    style: Style,
    paragraph: Option<Paragraph>,
}

impl Button {
    pub fn label<S: Into<String>>(txt: S) -> Self {
        Self {
            label: txt.into(),
            font_size: Typography::BODY,
            style: Style {
                padding: vec2(Spacing::MD, Spacing::SM),
                ..Default::default()
            },
            paragraph: None,
        }
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.style.min_width = Some(width);
        self
    }
}

impl Measurable for Button {
    fn content_width(&self) -> f32 {
        self.paragraph
            .as_ref()
            .expect("button queried before its default measurement ran")
            .max_line_width
    }

    fn horizontal_insets(&self) -> f32 {
        self.style.padding_total().x
    }

    fn width_bounds(&self) -> (Option<f32>, Option<f32>) {
        (self.style.min_width, self.style.max_width)
    }
}

impl Widget for Button {
    fn style(&self) -> Style {
        self.style
    }

    fn measure(
        &mut self,
        fonts: &mut Fonts,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Vec2 {
        // Buttons keep their label on one line.
        let paragraph = text::layout_paragraph(fonts, &self.label, self.font_size, None);
        self.paragraph = Some(paragraph);

        let width = shrink_wrapped_width(self, width_spec);
        let height = height_spec.resolve(paragraph.height.ceil() + self.style.padding_total().y);
        vec2(width, height)
    }
}
