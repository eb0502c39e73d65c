use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};

const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Shared font database and shaping context.
///
/// Constructed once and threaded `&mut` through the measurement pass; the
/// pass is synchronous and single-threaded, so no locking is involved.
pub struct Fonts {
    system: FontSystem,
}

impl Fonts {
    pub fn new() -> Self {
        Self {
            system: FontSystem::new(),
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self::new()
    }
}

/// Line metrics recorded by laying a string out at a given wrap cap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub line_count: usize,
    /// Widest laid-out line.
    pub max_line_width: f32,
    pub height: f32,
}

/// Shape `text` wrapped to `max_width` (unconstrained when `None`) and
/// report its line metrics. Every consumer of a widget's text extent reads
/// the same `Paragraph`, so measured sizes cannot drift from what the
/// shaper actually produced.
pub fn layout_paragraph(
    fonts: &mut Fonts,
    text: &str,
    font_size: f32,
    max_width: Option<f32>,
) -> Paragraph {
    let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
    let mut text_buffer = Buffer::new(&mut fonts.system, metrics);
    let mut buffer = text_buffer.borrow_with(&mut fonts.system);
    buffer.set_size(max_width, None);
    buffer.set_text(text, &Attrs::new(), Shaping::Advanced);
    buffer.shape_until_scroll(true);

    let mut line_count = 0;
    let mut max_line_width: f32 = 0.0;
    for run in buffer.layout_runs() {
        line_count += 1;
        max_line_width = max_line_width.max(run.line_w);
    }

    // Empty text still occupies one line of height.
    let height = line_count.max(1) as f32 * metrics.line_height;

    Paragraph {
        line_count,
        max_line_width,
        height,
    }
}
