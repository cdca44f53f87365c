//! Startup configuration.
//!
//! Defaults come from `constants.rs`; the page URL query may override a few
//! of them, e.g. `?color=ff8800&smoothing=exponential`.

use crate::color::{Color, ColorParseError};
use crate::constants::*;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("color: {0}")]
    Color(#[from] ColorParseError),
    #[error("invalid value {value:?} for {key}")]
    Value { key: String, value: String },
}

/// How the camera eases toward its parallax target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraSmoothing {
    /// `pos += (target - pos) * coef * dt`; speed depends on refresh rate.
    #[default]
    PerFrame,
    /// `pos += (target - pos) * (1 - exp(-coef * dt))`.
    Exponential,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub objects_distance: f32,
    pub particle_count: usize,
    pub material_color: Color,
    pub gradient_url: String,
    pub camera_smoothing: CameraSmoothing,
    pub max_pixel_ratio: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_distance: OBJECTS_DISTANCE,
            particle_count: PARTICLE_COUNT,
            material_color: Color::from_hex(DEFAULT_MATERIAL_COLOR).unwrap_or(Color::WHITE),
            gradient_url: DEFAULT_GRADIENT_URL.to_string(),
            camera_smoothing: CameraSmoothing::PerFrame,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

impl SceneConfig {
    /// Apply overrides from a URL query string (with or without leading `?`).
    ///
    /// Each bad entry is returned as an error and leaves its default untouched;
    /// unknown keys are ignored.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = self.apply_pair(key, value) {
                errors.push(e);
            }
        }
        errors
    }

    fn apply_pair(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let bad = || ConfigError::Value {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "color" => self.material_color = Color::from_hex(value)?,
            "gradient" if !value.is_empty() => self.gradient_url = value.to_string(),
            "gradient" => return Err(bad()),
            "particles" => self.particle_count = value.parse().map_err(|_| bad())?,
            "distance" => {
                let d: f32 = value.parse().map_err(|_| bad())?;
                if !(d.is_finite() && d > 0.0) {
                    return Err(bad());
                }
                self.objects_distance = d;
            }
            "smoothing" => {
                self.camera_smoothing = match value {
                    "per-frame" => CameraSmoothing::PerFrame,
                    "exponential" => CameraSmoothing::Exponential,
                    _ => return Err(bad()),
                }
            }
            _ => log::debug!("ignoring query key {key:?}"),
        }
        Ok(())
    }
}
