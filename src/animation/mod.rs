pub mod easing;
pub mod spec;
pub mod timeline;

pub use easing::Easing;
pub use spec::{AnimationSpec, Property, TickHook, Transition};
pub use timeline::{AnimationTimeline, RunHandle, TimelineRun};
