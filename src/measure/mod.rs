pub mod shrink;

pub use shrink::{Measurable, shrink_wrapped_width};

/// How a parent constrains one axis of a child's measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent demands this exact size.
    Exactly,
    /// The parent offers up to this size.
    AtMost,
    /// The parent imposes no bound.
    Unspecified,
}

/// A parent-supplied constraint for one axis.
///
/// Built fresh by the parent on every pass and discarded afterwards.
/// `size` carries no meaning when the mode is [`MeasureMode::Unspecified`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    pub fn exactly(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size: size.max(0.0),
        }
    }

    pub fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size: size.max(0.0),
        }
    }

    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    /// The default sizing rule: an exact demand wins outright, an offer
    /// caps the content, an unspecified axis takes the content as-is.
    pub fn resolve(self, content: f32) -> f32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => content.min(self.size),
            MeasureMode::Unspecified => content,
        }
    }

    /// Upper bound this spec places on the axis, if any.
    pub fn cap(self) -> Option<f32> {
        match self.mode {
            MeasureMode::Unspecified => None,
            _ => Some(self.size),
        }
    }

    /// Constraint handed down to a wrap-content child: an exact parent
    /// size becomes an offer, shrunk by the parent's own chrome.
    pub fn for_child(self, inset: f32) -> Self {
        match self.mode {
            MeasureMode::Unspecified => Self::unspecified(),
            _ => Self::at_most((self.size - inset).max(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_resolves_to_the_demanded_size() {
        assert_eq!(MeasureSpec::exactly(200.0).resolve(50.0), 200.0);
        assert_eq!(MeasureSpec::exactly(200.0).resolve(350.0), 200.0);
    }

    #[test]
    fn at_most_caps_the_content() {
        assert_eq!(MeasureSpec::at_most(200.0).resolve(50.0), 50.0);
        assert_eq!(MeasureSpec::at_most(200.0).resolve(350.0), 200.0);
    }

    #[test]
    fn unspecified_takes_the_content() {
        assert_eq!(MeasureSpec::unspecified().resolve(350.0), 350.0);
    }

    #[test]
    fn constructors_floor_negative_sizes() {
        assert_eq!(MeasureSpec::exactly(-5.0).size, 0.0);
        assert_eq!(MeasureSpec::at_most(-5.0).size, 0.0);
    }

    #[test]
    fn cap_is_absent_only_when_unspecified() {
        assert_eq!(MeasureSpec::exactly(80.0).cap(), Some(80.0));
        assert_eq!(MeasureSpec::at_most(80.0).cap(), Some(80.0));
        assert_eq!(MeasureSpec::unspecified().cap(), None);
    }

    #[test]
    fn child_spec_softens_an_exact_parent() {
        let child = MeasureSpec::exactly(300.0).for_child(24.0);
        assert_eq!(child.mode, MeasureMode::AtMost);
        assert_eq!(child.size, 276.0);
    }

    #[test]
    fn child_spec_never_goes_negative() {
        let child = MeasureSpec::at_most(10.0).for_child(24.0);
        assert_eq!(child.size, 0.0);
    }

    #[test]
    fn child_of_unspecified_stays_unspecified() {
        let child = MeasureSpec::unspecified().for_child(24.0);
        assert_eq!(child.mode, MeasureMode::Unspecified);
    }
}
