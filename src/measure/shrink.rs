use super::{MeasureMode, MeasureSpec};

/// What a widget must expose to have its width shrink-wrapped.
///
/// The values are recorded by the widget's default measurement, so the
/// methods may only be called once that pass has run for the current frame.
pub trait Measurable {
    /// Widest laid-out line of the content, excluding insets.
    fn content_width(&self) -> f32;

    /// Left plus right padding.
    fn horizontal_insets(&self) -> f32;

    /// Authored `(min_width, max_width)` bounds, if any.
    fn width_bounds(&self) -> (Option<f32>, Option<f32>);
}

/// Width that tightly fits the widget's content under the given constraint.
///
/// The default rule pads an `Exactly` widget out to the demanded size even
/// when its text is narrower, which leaves a gap after the last line. This
/// override never reports more than the content needs: an exact demand and
/// an offer both act as a cap, an unspecified axis takes the content width
/// as-is. The result is clamped into the widget's authored bounds and
/// quantized up to whole device pixels.
///
/// An authored `min_width` may push the result past an `AtMost` offer, but
/// never past an `Exactly` demand.
pub fn shrink_wrapped_width(widget: &impl Measurable, spec: MeasureSpec) -> f32 {
    let insets = widget.horizontal_insets().max(0.0);
    let content = widget.content_width().max(0.0).ceil() + insets;

    let mut width = match spec.mode {
        MeasureMode::Exactly | MeasureMode::AtMost => content.min(spec.size),
        MeasureMode::Unspecified => content,
    };

    let (min_width, max_width) = widget.width_bounds();
    if let Some(max_width) = max_width {
        width = width.min(max_width);
    }
    if let Some(min_width) = min_width {
        width = width.max(min_width);
        if spec.mode == MeasureMode::Exactly {
            width = width.min(spec.size);
        }
    }

    width.max(0.0).ceil()
}
