use glam::Vec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    /// Symmetric padding, x for left/right and y for top/bottom.
    pub padding: Vec2,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub visible: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: Vec2::ZERO,
            width: None,
            height: None,
            min_width: None,
            max_width: None,
            visible: true,
        }
    }
}

impl Style {
    pub fn padding_total(self) -> Vec2 {
        self.padding * 2.0
    }

    pub fn padding_tl(self) -> Vec2 {
        self.padding
    }
}
