//! The scene context: the single owner of all animatable state.

use std::borrow::Cow;

use glam::Vec3;
use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use crate::animation::spec::Property;
use crate::errors::{Error, Result};
use crate::scene::camera::Camera;
use crate::scene::transform::Transform;

new_key_type! {
    /// Stable key for a registered scene target.
    pub struct TargetKey;
}

/// A named object whose spatial properties can be animated.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: Cow<'static, str>,
    pub transform: Transform,
}

/// The renderable world: named animatable targets, the camera projection,
/// a background color, and decorative geometry.
///
/// `SceneContext` is the sole owner of live mutable spatial state;
/// animations receive references into it and mutate in place. It is
/// thread-confined: all mutation must happen on the single update thread.
/// Concurrent access from other threads without external synchronization
/// is not supported.
///
/// Targets populated by asynchronous loaders are simply absent until the
/// load resolves; [`get`](Self::get) returns `None` for them and
/// transitions against them fail with [`Error::TargetNotReady`].
pub struct SceneContext {
    targets: SlotMap<TargetKey, Target>,
    names: FxHashMap<String, TargetKey>,

    /// Projection parameters for the active camera.
    pub camera: Camera,
    /// Scene clear color (RGB, 0..1).
    pub background: Vec3,
    /// Decorative star point cloud, if any.
    pub stars: Vec<Vec3>,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: SlotMap::with_key(),
            names: FxHashMap::default(),
            camera: Camera::default(),
            background: Vec3::new(0.75, 0.82, 0.9),
            stars: Vec::new(),
        }
    }

    /// Registers a new target with a default transform.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateTarget`] if the name is already registered.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>) -> Result<TargetKey> {
        self.insert_with(name, Transform::new())
    }

    /// Registers a new target with an initial transform.
    pub fn insert_with(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        transform: Transform,
    ) -> Result<TargetKey> {
        let name = name.into();
        if self.names.contains_key(name.as_ref()) {
            return Err(Error::DuplicateTarget(name.into_owned()));
        }
        let key = self.targets.insert(Target {
            name: name.clone(),
            transform,
        });
        self.names.insert(name.into_owned(), key);
        Ok(key)
    }

    /// Looks up a target's key by name.
    #[must_use]
    pub fn key_of(&self, name: &str) -> Option<TargetKey> {
        self.names.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns the named target, or `None` if it is absent (not yet
    /// loaded, or never registered).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.key_of(name).and_then(|key| self.targets.get(key))
    }

    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Target> {
        let key = self.key_of(name)?;
        self.targets.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn target(&self, key: TargetKey) -> Option<&Target> {
        self.targets.get(key)
    }

    #[inline]
    #[must_use]
    pub fn target_mut(&mut self, key: TargetKey) -> Option<&mut Target> {
        self.targets.get_mut(key)
    }

    /// Writes one property of a named target.
    ///
    /// # Errors
    ///
    /// [`Error::TargetNotReady`] if the target is absent.
    pub fn set(&mut self, name: &str, property: Property, value: Vec3) -> Result<()> {
        match self.get_mut(name) {
            Some(target) => {
                target.transform.set(property, value);
                Ok(())
            }
            None => Err(Error::TargetNotReady(name.to_owned())),
        }
    }

    /// Iterates all registered targets.
    pub fn iter(&self) -> impl Iterator<Item = (TargetKey, &Target)> {
        self.targets.iter()
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
