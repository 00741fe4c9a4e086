#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Orrery — a tick-driven animation timeline for scripted 3D scene
//! transitions.
//!
//! The crate drives coordinated multi-object property animations over a
//! [`SceneContext`]: a trigger starts a [`Transition`] (a named group of
//! concurrent, individually eased and timed [`AnimationSpec`]s), the
//! [`AnimationTimeline`] advances them once per tick, and an external
//! render collaborator reads the resulting state each frame. Rendering,
//! windowing, and asset decoding stay outside; they talk to the core
//! through the [`App`] event entry points and the asset channel.

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod scene;
pub mod utils;

pub use animation::{AnimationSpec, AnimationTimeline, Easing, Property, RunHandle, Transition};
pub use app::{App, FixedStepDriver, FrameDriver, Intent, ManualDriver, TriggerBinding, Viewport};
pub use assets::{AssetChannel, AssetEvent, AssetKind, AssetSender};
pub use errors::{Error, LoadError, Result};
pub use scene::{Camera, SceneContext, Target, TargetKey, Transform};
pub use utils::Timer;
