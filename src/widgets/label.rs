use glam::{Vec2, vec2};
use log::debug;

use super::base::Widget;
use crate::{
    measure::{Measurable, MeasureSpec, shrink_wrapped_width},
    signals::ReadSignal,
    style::{Style, tokens::Typography},
    text::{self, Fonts, Paragraph},
};

/// A text widget that sizes itself to its content.
///
/// The default measurement wraps the text to the offered width and resolves
/// against the parent's constraint; with `shrink_wrap` enabled (the
/// default) the committed width is then pulled back to the widest laid-out
/// line, so an exact parent demand never leaves a gap after the text. The
/// committed height is always the default measurement's.
#[derive(Clone)]
pub struct Label {
    pub content: ReadSignal<String>,
    pub font_size: f32,
    pub shrink_wrap: bool,
    style: Style,
    paragraph: Option<Paragraph>,
}

impl Label {
    pub fn new(content: impl Into<String>) -> Self {
        let (read, _) = crate::signals::create_signal(content.into());
        Self::bound(read)
    }

    /// A label whose content follows a signal. Writes to the signal mark
    /// the owning node dirty for the next pass.
    pub fn bound(content: ReadSignal<String>) -> Self {
        Self {
            content,
            font_size: Typography::BODY,
            shrink_wrap: true,
            style: Style::default(),
            paragraph: None,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn shrink_wrap(mut self, enabled: bool) -> Self {
        self.shrink_wrap = enabled;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.style.padding = Vec2::splat(padding);
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.style.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.style.max_width = Some(width);
        self
    }

    /// Framework default measurement: wrap the text to the offered cap and
    /// resolve the padded extent against the constraints.
    fn measure_content(
        &mut self,
        fonts: &mut Fonts,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Vec2 {
        let insets = self.style.padding_total();
        let wrap_cap = width_spec.cap().map(|cap| (cap - insets.x).max(0.0));
        let paragraph =
            text::layout_paragraph(fonts, &self.content.get(), self.font_size, wrap_cap);
        self.paragraph = Some(paragraph);

        let mut content_w = paragraph.max_line_width.ceil() + insets.x;
        if let Some(max_width) = self.style.max_width {
            content_w = content_w.min(max_width);
        }
        if let Some(min_width) = self.style.min_width {
            content_w = content_w.max(min_width);
        }
        let content_h = paragraph.height.ceil() + insets.y;

        vec2(
            width_spec.resolve(content_w),
            height_spec.resolve(content_h),
        )
    }

    fn paragraph(&self) -> &Paragraph {
        self.paragraph
            .as_ref()
            .expect("label queried before its default measurement ran")
    }
}

impl Measurable for Label {
    fn content_width(&self) -> f32 {
        self.paragraph().max_line_width
    }

    fn horizontal_insets(&self) -> f32 {
        self.style.padding_total().x
    }

    fn width_bounds(&self) -> (Option<f32>, Option<f32>) {
        (self.style.min_width, self.style.max_width)
    }
}

impl Widget for Label {
    fn style(&self) -> Style {
        self.style
    }

    fn measure(
        &mut self,
        fonts: &mut Fonts,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Vec2 {
        let base = self.measure_content(fonts, width_spec, height_spec);
        if !self.shrink_wrap {
            return base;
        }

        let width = shrink_wrapped_width(self, width_spec);
        if width != base.x {
            debug!("shrink-wrapped label {} -> {}", base.x, width);
        }
        vec2(width, base.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasureSpec;

    #[test]
    fn an_exact_demand_shrinks_to_the_content() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("hi").padding(6.0);

        let exact = label.measure(
            &mut fonts,
            MeasureSpec::exactly(500.0),
            MeasureSpec::unspecified(),
        );
        let natural = label.measure(
            &mut fonts,
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
        );

        assert_eq!(exact.x, natural.x);
        assert!(exact.x < 500.0);
    }

    #[test]
    fn disabling_shrink_wrap_restores_the_default_rule() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("hi").shrink_wrap(false);
        let size = label.measure(
            &mut fonts,
            MeasureSpec::exactly(500.0),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size.x, 500.0);
    }

    #[test]
    fn a_narrow_exact_demand_still_wins() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("some text that is wider than nothing");
        let size = label.measure(
            &mut fonts,
            MeasureSpec::exactly(0.0),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size.x, 0.0);
    }

    #[test]
    fn empty_text_measures_to_the_padding_alone() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("").padding(10.0);
        let size = label.measure(
            &mut fonts,
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size.x, 20.0);
        assert!(size.y > 20.0);
    }

    #[test]
    fn the_override_never_exceeds_an_offer() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("a fairly long line of text to wrap around");
        let size = label.measure(
            &mut fonts,
            MeasureSpec::at_most(120.0),
            MeasureSpec::unspecified(),
        );
        assert!(size.x <= 120.0);
    }

    #[test]
    fn measurement_is_idempotent_across_passes() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("same text, same spec").padding(4.0);
        let w_spec = MeasureSpec::at_most(200.0);
        let h_spec = MeasureSpec::unspecified();

        let first = label.measure(&mut fonts, w_spec, h_spec);
        let second = label.measure(&mut fonts, w_spec, h_spec);
        assert_eq!(first, second);
    }

    #[test]
    fn shrinking_leaves_the_height_untouched() {
        let mut fonts = Fonts::new();
        let mut wrapped = Label::new("the same text");
        let mut plain = Label::new("the same text").shrink_wrap(false);

        let a = wrapped.measure(
            &mut fonts,
            MeasureSpec::exactly(500.0),
            MeasureSpec::unspecified(),
        );
        let b = plain.measure(
            &mut fonts,
            MeasureSpec::exactly(500.0),
            MeasureSpec::unspecified(),
        );
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn an_authored_minimum_fills_an_unconstrained_axis() {
        let mut fonts = Fonts::new();
        let mut label = Label::new("").min_width(50.0);
        let size = label.measure(
            &mut fonts,
            MeasureSpec::unspecified(),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size.x, 50.0);
    }

    #[test]
    #[should_panic(expected = "default measurement")]
    fn querying_before_the_default_pass_is_a_contract_violation() {
        let label = Label::new("unmeasured");
        let _ = label.content_width();
    }
}
