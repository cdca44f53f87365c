//! Toon shading lookup ramp as RGBA8 pixels.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GradientError {
    #[error("empty gradient image")]
    Empty,
    #[error("expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    Size {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientRamp {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl GradientRamp {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, GradientError> {
        if width == 0 || height == 0 {
            return Err(GradientError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(GradientError::Size {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Evenly spaced grey steps from dark to white, one pixel each.
    pub fn steps(count: u32) -> Self {
        let count = count.max(2);
        let rgba = (0..count)
            .flat_map(|i| {
                let l = (i as f32 / (count - 1) as f32 * 255.0).round() as u8;
                [l, l, l, 255]
            })
            .collect();
        Self {
            width: count,
            height: 1,
            rgba,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}
