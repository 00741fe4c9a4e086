//! The animation timeline: validation, ownership, and per-tick updates
//! for running transitions.
//!
//! # Overview
//!
//! [`AnimationTimeline`] turns a [`Transition`] request into a live
//! [`TimelineRun`]: a set of concurrent per-property animations advanced
//! by [`update`](AnimationTimeline::update) once per tick. Each animated
//! (target, property) pair is owned by exactly one live spec at a time;
//! starting a new transition on an owned pair cancels the prior spec and
//! retargets from the current interpolated value, so the property never
//! snaps or reverts mid-flight.
//!
//! All validation happens before any state is touched: a rejected `run`
//! leaves both the timeline and the scene exactly as they were.

use glam::Vec3;
use smallvec::SmallVec;

use crate::animation::easing::Easing;
use crate::animation::spec::{Property, TickHook, Transition};
use crate::errors::{Error, Result};
use crate::scene::context::{SceneContext, TargetKey};

/// Identifies a live (or finished) timeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunHandle(u64);

/// A validated spec bound to a concrete target key, with its own clock.
struct ActiveSpec {
    target: TargetKey,
    property: Property,
    from: Vec3,
    to: Vec3,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    done: bool,
    on_tick: Option<TickHook>,
}

impl ActiveSpec {
    fn fraction(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Runtime instance of a transition: shared start, independent spec clocks.
pub struct TimelineRun {
    id: u64,
    name: String,
    specs: SmallVec<[ActiveSpec; 4]>,
}

impl TimelineRun {
    fn finished(&self) -> bool {
        self.specs.iter().all(|s| s.done)
    }
}

/// Drives concurrent property animations over scene targets.
///
/// Thread-confined: `run` and `update` must be called from the single
/// update thread that owns the [`SceneContext`]. Calling from elsewhere
/// without external synchronization is not supported.
#[derive(Default)]
pub struct AnimationTimeline {
    runs: Vec<TimelineRun>,
    next_id: u64,
}

impl AnimationTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition, returning a handle to the new run.
    ///
    /// Validates everything up front and fails fast with no partial
    /// application:
    ///
    /// - [`Error::EmptyTransition`] if the transition has no specs
    /// - [`Error::InvalidDuration`] for any non-positive or non-finite
    ///   duration
    /// - [`Error::DuplicateSpec`] if two specs address the same
    ///   (target, property) pair
    /// - [`Error::TargetNotReady`] if any target is absent from the scene
    ///
    /// Specs whose `from` is unset sample the target's current property
    /// value now. Any live spec owning one of the requested
    /// (target, property) pairs is cancelled immediately; since the new
    /// spec samples the current value, the property continues from
    /// wherever the cancelled spec left it.
    pub fn run(&mut self, scene: &SceneContext, transition: Transition) -> Result<RunHandle> {
        if transition.specs.is_empty() {
            return Err(Error::EmptyTransition(transition.name.into_owned()));
        }

        let mut resolved: SmallVec<[ActiveSpec; 4]> = SmallVec::new();
        for spec in transition.specs {
            if !(spec.duration.is_finite() && spec.duration > 0.0) {
                return Err(Error::InvalidDuration {
                    target: spec.target.into_owned(),
                    duration: spec.duration,
                });
            }
            let Some(key) = scene.key_of(&spec.target) else {
                return Err(Error::TargetNotReady(spec.target.into_owned()));
            };
            if resolved
                .iter()
                .any(|r| r.target == key && r.property == spec.property)
            {
                return Err(Error::DuplicateSpec {
                    target: spec.target.into_owned(),
                    transition: transition.name.into_owned(),
                });
            }
            // Presence was just checked, so the sample cannot miss.
            let current = scene
                .target(key)
                .map(|t| t.transform.get(spec.property))
                .unwrap_or_default();
            resolved.push(ActiveSpec {
                target: key,
                property: spec.property,
                from: spec.from.unwrap_or(current),
                to: spec.to,
                duration: spec.duration,
                easing: spec.easing,
                elapsed: 0.0,
                done: false,
                on_tick: spec.on_tick,
            });
        }

        // Validation passed; now take ownership of the requested pairs.
        self.interrupt_owned(&transition.name, &resolved);

        let id = self.next_id;
        self.next_id += 1;
        log::debug!(
            "transition '{}' started: {} spec(s), run #{id}",
            transition.name,
            resolved.len()
        );
        self.runs.push(TimelineRun {
            id,
            name: transition.name.into_owned(),
            specs: resolved,
        });
        Ok(RunHandle(id))
    }

    /// Cancels live specs whose (target, property) pair is claimed by the
    /// incoming run. Runs emptied out by the cancellation are dropped.
    fn interrupt_owned(&mut self, incoming: &str, claimed: &[ActiveSpec]) {
        for run in &mut self.runs {
            let before = run.specs.len();
            run.specs.retain(|live| {
                !claimed
                    .iter()
                    .any(|c| c.target == live.target && c.property == live.property)
            });
            if run.specs.len() != before {
                log::debug!(
                    "run #{} ('{}') interrupted by '{incoming}': {} spec(s) cancelled",
                    run.id,
                    run.name,
                    before - run.specs.len()
                );
            }
        }
        self.runs.retain(|run| !run.specs.is_empty());
    }

    /// Advances every live run by `dt` seconds and writes the interpolated
    /// values into the scene.
    ///
    /// For each spec: `t = clamp(elapsed / duration, 0, 1)`, eased, then a
    /// component-wise lerp from `from` to `to` written into the owned
    /// property, then the spec's tick hook. A spec completes at `t >= 1`
    /// (the clamp guarantees it lands exactly on `to`); a run whose specs
    /// have all completed is deregistered, so nothing dangles into later
    /// ticks.
    pub fn update(&mut self, dt: f32, scene: &mut SceneContext) {
        for run in &mut self.runs {
            for spec in &mut run.specs {
                if spec.done {
                    continue;
                }
                spec.elapsed += dt;
                let t = spec.fraction();
                let value = spec.from.lerp(spec.to, spec.easing.apply(t));
                if let Some(target) = scene.target_mut(spec.target) {
                    target.transform.set(spec.property, value);
                }
                if let Some(hook) = spec.on_tick.as_mut() {
                    hook(scene);
                }
                if t >= 1.0 {
                    spec.done = true;
                }
            }
        }
        self.runs.retain(|run| {
            if run.finished() {
                log::debug!("run #{} ('{}') completed", run.id, run.name);
                false
            } else {
                true
            }
        });
    }

    /// Whether the run behind `handle` still has live specs.
    #[must_use]
    pub fn is_running(&self, handle: RunHandle) -> bool {
        self.runs.iter().any(|run| run.id == handle.0)
    }

    /// Cancels a run wholesale, releasing all of its property ownership.
    /// No-op if the run already completed.
    pub fn cancel(&mut self, handle: RunHandle) {
        self.runs.retain(|run| run.id != handle.0);
    }

    /// Number of live runs.
    #[must_use]
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}
