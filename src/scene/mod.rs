pub mod camera;
pub mod context;
pub mod starfield;
pub mod transform;

pub use camera::Camera;
pub use context::{SceneContext, Target, TargetKey};
pub use transform::Transform;
