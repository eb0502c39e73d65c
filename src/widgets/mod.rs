pub mod base;
pub mod button;
pub mod element;
pub mod label;

pub use base::Widget;
pub use button::Button;
pub use element::Element;
pub use label::Label;

/// Context handed to `Widget::build` while the tree is constructed.
pub struct BuildCtx;
