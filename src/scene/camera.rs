use glam::Mat4;

use crate::scene::transform::Transform;

/// Perspective projection parameters with a cached projection matrix.
///
/// The camera's spatial state lives in an ordinary scene target (so it can
/// be animated like anything else); this struct only owns projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view, radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    projection_matrix: Mat4,
}

impl Camera {
    /// Creates a perspective camera. `fov` is in degrees, matching the
    /// usual authoring convention.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Recomputes the cached projection matrix from the current
    /// parameters. Call after mutating `fov`/`aspect`/`near`/`far`
    /// directly.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Sets the aspect ratio and refreshes the projection matrix.
    /// Idempotent for a repeated value.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// View matrix for the given camera transform (world inverse).
    #[must_use]
    pub fn view_matrix(transform: &Transform) -> Mat4 {
        transform.matrix().inverse()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}
