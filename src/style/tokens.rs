pub struct Typography;

impl Typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 11.0;
}

pub struct Spacing;

impl Spacing {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}
