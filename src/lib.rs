pub mod layout;
pub mod measure;
pub mod signals;
pub mod style;
pub mod text;
pub mod widgets;

pub use layout::{Node, Rect};
pub use measure::{Measurable, MeasureMode, MeasureSpec, shrink_wrapped_width};
pub use style::Style;
pub use text::{Fonts, Paragraph};
pub use widgets::{BuildCtx, Button, Element, Label, Widget};

pub use glam::Vec2;

pub fn init_logging() {
    env_logger::init();
}
