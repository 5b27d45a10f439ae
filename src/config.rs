use crate::error::{ConfigError, ConfigResult};
use crate::tool_state::{
    DEFAULT_BRUSH_WIDTH, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, PaletteColor, ToolState,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DOODLE_PAD_CONFIG";

/// Brush limits and defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub min_width: f32,
    pub max_width: f32,
    pub default_width: f32,
    pub default_color: PaletteColor,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_BRUSH_WIDTH,
            max_width: MAX_BRUSH_WIDTH,
            default_width: DEFAULT_BRUSH_WIDTH,
            default_color: PaletteColor::Black,
        }
    }
}

/// Startup configuration. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoodleConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// RGB of the drawing surface
    pub canvas_background: [u8; 3],
    pub brush: BrushConfig,
}

impl Default for DoodleConfig {
    fn default() -> Self {
        Self {
            window_title: "Doodle Pad".to_owned(),
            window_size: [480.0, 800.0],
            canvas_background: [0xFF, 0xFF, 0xFF],
            brush: BrushConfig::default(),
        }
    }
}

impl DoodleConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `DOODLE_PAD_CONFIG`, or the defaults when unset
    pub fn load() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::from_path(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let BrushConfig {
            min_width,
            max_width,
            default_width,
            ..
        } = self.brush;

        if !(min_width > 0.0 && min_width <= max_width) {
            return Err(ConfigError::InvalidBrushRange {
                min: min_width,
                max: max_width,
            });
        }
        if !(min_width..=max_width).contains(&default_width) {
            return Err(ConfigError::InvalidDefaultWidth {
                width: default_width,
                min: min_width,
                max: max_width,
            });
        }
        Ok(())
    }

    pub fn canvas_color(&self) -> egui::Color32 {
        let [r, g, b] = self.canvas_background;
        egui::Color32::from_rgb(r, g, b)
    }

    /// Initial brush for a fresh session
    pub fn tool_state(&self) -> ToolState {
        ToolState::new(
            self.brush.min_width..=self.brush.max_width,
            self.brush.default_width,
            self.brush.default_color.color(),
        )
    }
}
