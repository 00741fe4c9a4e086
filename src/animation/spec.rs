use std::borrow::Cow;
use std::fmt;

use glam::Vec3;

use crate::animation::easing::Easing;
use crate::scene::context::SceneContext;

/// Per-tick hook attached to an animation spec.
///
/// Invoked once per tick after the spec's property write, with mutable
/// access to the scene so it can derive state from other live targets
/// (e.g. re-aiming the camera at a moving model).
pub type TickHook = Box<dyn FnMut(&mut SceneContext)>;

/// The animatable spatial property of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// World position, in scene units.
    Position,
    /// Euler rotation (pitch, yaw, roll), in radians.
    Rotation,
}

/// One time-bounded property animation on one target.
///
/// `from` is optional: when absent it is sampled from the target's current
/// value at the moment the transition starts. That sampling rule is what
/// makes mid-flight retargeting seamless — an interrupting spec picks up
/// exactly where the interrupted one left the property.
pub struct AnimationSpec {
    /// Name of the scene target to animate.
    pub target: Cow<'static, str>,
    /// Which property of the target is driven.
    pub property: Property,
    /// Start value; `None` means "current value at start".
    pub from: Option<Vec3>,
    /// End value.
    pub to: Vec3,
    /// Duration in seconds. Must be positive and finite.
    pub duration: f32,
    /// Easing curve shaping the interpolation velocity.
    pub easing: Easing,
    /// Optional per-tick hook, run after the property write.
    pub on_tick: Option<TickHook>,
}

impl AnimationSpec {
    #[must_use]
    pub fn new(
        target: impl Into<Cow<'static, str>>,
        property: Property,
        to: Vec3,
        duration: f32,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            from: None,
            to,
            duration,
            easing: Easing::default(),
            on_tick: None,
        }
    }

    /// Overrides the implicit "current value at start" with a fixed one.
    #[must_use]
    pub fn from(mut self, from: Vec3) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_on_tick<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut SceneContext) + 'static,
    {
        self.on_tick = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for AnimationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationSpec")
            .field("target", &self.target)
            .field("property", &self.property)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("on_tick", &self.on_tick.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A named group of animation specs started together.
///
/// Specs share a start instant but keep independent durations; there is no
/// synchronization beyond the shared start.
#[derive(Debug, Default)]
pub struct Transition {
    /// Logical name, used in logs and error reports.
    pub name: Cow<'static, str>,
    /// The specs, in declaration order.
    pub specs: Vec<AnimationSpec>,
}

impl Transition {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            specs: Vec::new(),
        }
    }

    /// Appends a spec, builder style.
    #[must_use]
    pub fn with(mut self, spec: AnimationSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Appends a spec in place.
    pub fn push(&mut self, spec: AnimationSpec) {
        self.specs.push(spec);
    }
}
