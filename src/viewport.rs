//! Window size tracking and surface sizing.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// CSS pixels.
    pub width: f32,
    pub height: f32,
    /// Device pixel ratio after clamping.
    pub pixel_ratio: f64,
    max_pixel_ratio: f64,
}

/// What a resize produced for the camera and the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resize {
    pub aspect_ratio: f32,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let mut vp = Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
            max_pixel_ratio,
        };
        vp.resize(width, height, device_pixel_ratio);
        vp
    }

    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f64) -> Resize {
        self.width = width;
        self.height = height;
        self.pixel_ratio = device_pixel_ratio.min(self.max_pixel_ratio);
        self.current()
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Drawing buffer size in device pixels, never zero.
    pub fn surface_size(&self) -> (u32, u32) {
        let px = |css: f32| ((css as f64 * self.pixel_ratio).round() as u32).max(1);
        (px(self.width), px(self.height))
    }

    pub fn current(&self) -> Resize {
        let (surface_width, surface_height) = self.surface_size();
        Resize {
            aspect_ratio: self.aspect_ratio(),
            surface_width,
            surface_height,
        }
    }
}
