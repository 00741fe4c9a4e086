use crate::scene::camera::Camera;

/// Current output surface dimensions, kept in sync with the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio of the surface. A zero height (minimized window)
    /// yields 1.0 rather than a degenerate projection.
    #[must_use]
    pub fn aspect(self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Applies a resize: records the new dimensions and refreshes the
    /// camera's aspect ratio and projection matrix. Idempotent; a pure
    /// function of the two inputs, no history kept.
    pub fn resize(&mut self, width: u32, height: u32, camera: &mut Camera) {
        self.width = width;
        self.height = height;
        camera.set_aspect(self.aspect());
    }
}
