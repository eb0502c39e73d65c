use glam::Vec2;

use super::BuildCtx;
use crate::{measure::MeasureSpec, style::Style, text::Fonts};

pub trait Widget: WidgetClone {
    fn build(&self, _ctx: &mut BuildCtx) -> Vec<Box<dyn Widget>> {
        Vec::new()
    }

    /// Measurement callback, invoked once per pass with the parent's
    /// constraints. The returned size is committed by the caller and read
    /// back during the positioning pass.
    fn measure(
        &mut self,
        fonts: &mut Fonts,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Vec2;

    fn style(&self) -> Style {
        Style::default()
    }
}

pub trait WidgetClone {
    fn box_clone(&self) -> Box<dyn Widget>;
}

impl<T> WidgetClone for T
where
    T: Widget + Clone + 'static,
{
    fn box_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Widget> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
