use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::animation::spec::Transition;
use crate::scene::context::SceneContext;

/// An input event captured by the host layer, queued for consumption at
/// the start of the next tick.
///
/// Handlers never mutate the scene directly; they enqueue an intent, and
/// the application root consumes intents at a defined point in the tick.
/// That keeps mutation out of re-entrant event callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A named trigger fired (e.g. a button click).
    Trigger(Cow<'static, str>),
    /// The output surface changed size.
    Resize { width: u32, height: u32 },
}

/// Builds a transition from live scene state when its trigger fires.
pub type TransitionFactory = Box<dyn FnMut(&SceneContext) -> Transition>;

/// Maps trigger names to transition factories.
///
/// Fires at most once per delivered input event and performs no
/// debouncing of its own: firing again mid-flight is resolved by the
/// timeline's interrupt policy.
#[derive(Default)]
pub struct TriggerBinding {
    bindings: FxHashMap<String, TransitionFactory>,
}

impl TriggerBinding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the factory for a trigger name.
    pub fn bind<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: FnMut(&SceneContext) -> Transition + 'static,
    {
        self.bindings.insert(name.into(), Box::new(factory));
    }

    /// Looks up the factory for a fired trigger.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TransitionFactory> {
        self.bindings.get_mut(name)
    }

    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
