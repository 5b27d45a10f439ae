use egui::Color32;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MIN_BRUSH_WIDTH: f32 = 5.0;
pub const MAX_BRUSH_WIDTH: f32 = 50.0;
pub const DEFAULT_BRUSH_WIDTH: f32 = 10.0;

/// The fixed swatches offered by the tools panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Magenta,
        PaletteColor::Cyan,
        PaletteColor::Orange,
    ];

    pub fn color(self) -> Color32 {
        match self {
            PaletteColor::Black => Color32::BLACK,
            PaletteColor::Red => Color32::from_rgb(0xFF, 0x00, 0x00),
            PaletteColor::Blue => Color32::from_rgb(0x00, 0x00, 0xFF),
            PaletteColor::Green => Color32::from_rgb(0x00, 0xFF, 0x00),
            PaletteColor::Yellow => Color32::from_rgb(0xFF, 0xFF, 0x00),
            PaletteColor::Magenta => Color32::from_rgb(0xFF, 0x00, 0xFF),
            PaletteColor::Cyan => Color32::from_rgb(0x00, 0xFF, 0xFF),
            PaletteColor::Orange => Color32::from_rgb(0xFF, 0x98, 0x00),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Red => "Red",
            PaletteColor::Blue => "Blue",
            PaletteColor::Green => "Green",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Magenta => "Magenta",
            PaletteColor::Cyan => "Cyan",
            PaletteColor::Orange => "Orange",
        }
    }

    /// Reverse lookup, `None` for colors outside the palette
    pub fn from_color(color: Color32) -> Option<Self> {
        Self::ALL.into_iter().find(|swatch| swatch.color() == color)
    }
}

/// Brush settings applied to strokes as they are committed.
///
/// Changing the brush never touches strokes that are already in the history.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    width: f32,
    color: Color32,
    min_width: f32,
    max_width: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(
            MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH,
            DEFAULT_BRUSH_WIDTH,
            PaletteColor::default().color(),
        )
    }
}

impl ToolState {
    /// `range` must be non-empty; the initial width is clamped into it.
    pub fn new(range: RangeInclusive<f32>, width: f32, color: Color32) -> Self {
        let (min_width, max_width) = range.into_inner();
        Self {
            width: width.clamp(min_width, max_width),
            color,
            min_width,
            max_width,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width_range(&self) -> RangeInclusive<f32> {
        self.min_width..=self.max_width
    }

    /// Set the brush width, clamped into the allowed range. Returns the stored value.
    pub fn set_width(&mut self, width: f32) -> f32 {
        self.width = if width.is_nan() {
            self.min_width
        } else {
            width.clamp(self.min_width, self.max_width)
        };
        self.width
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn select_palette(&mut self, swatch: PaletteColor) {
        self.color = swatch.color();
    }

    /// The swatch matching the current color, if any
    pub fn selected_palette(&self) -> Option<PaletteColor> {
        PaletteColor::from_color(self.color)
    }
}
