//! Application Root
//!
//! [`App`] owns the scene, the timeline, and the tick pipeline. It is a
//! pure coordinator without any window management: a host layer delivers
//! resize and trigger events, a [`FrameDriver`] paces the ticks, and an
//! optional render callback hands each frame's state to whatever actually
//! draws.
//!
//! # Tick pipeline
//!
//! Each tick processes, in order:
//!
//! 1. asset events delivered since the last tick (targets appear here);
//! 2. queued input intents, in arrival order (triggers start transitions,
//!    resizes update the viewport and camera projection);
//! 3. the animation timeline update for this tick's `dt`;
//! 4. the render callback.
//!
//! Everything runs on the single update thread; none of it blocks.

pub mod driver;
pub mod events;
pub mod viewport;

use std::borrow::Cow;
use std::collections::VecDeque;

pub use driver::{FixedStepDriver, FrameDriver, ManualDriver};
pub use events::{Intent, TransitionFactory, TriggerBinding};
pub use viewport::Viewport;

use crate::animation::timeline::AnimationTimeline;
use crate::assets::{AssetChannel, AssetEvent, AssetSender};
use crate::scene::context::SceneContext;
use crate::utils::time::Timer;

/// Per-frame render collaborator: receives the fully updated scene state
/// and the current surface dimensions.
pub type RenderFn = Box<dyn FnMut(&SceneContext, Viewport)>;

/// The application root: scene, timeline, intent queue, asset inbox.
pub struct App {
    pub scene: SceneContext,
    pub timeline: AnimationTimeline,
    pub viewport: Viewport,

    triggers: TriggerBinding,
    intents: VecDeque<Intent>,
    assets: AssetChannel,
    timer: Timer,
    render_fn: Option<RenderFn>,
}

impl App {
    /// Creates an app for the given initial surface size. The camera
    /// projection starts with the matching aspect ratio.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Viewport::new(width, height);
        let mut scene = SceneContext::new();
        scene.camera.set_aspect(viewport.aspect());
        Self {
            scene,
            timeline: AnimationTimeline::new(),
            viewport,
            triggers: TriggerBinding::new(),
            intents: VecDeque::new(),
            assets: AssetChannel::new(),
            timer: Timer::new(),
            render_fn: None,
        }
    }

    // ========================================================================
    // Host-facing event entry points
    // ========================================================================

    /// Registers a transition factory for a trigger name.
    pub fn bind_trigger<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: FnMut(&SceneContext) -> crate::animation::Transition + 'static,
    {
        self.triggers.bind(name, factory);
    }

    /// Enqueues a trigger event, consumed at the start of the next tick.
    /// One call per discrete input event; no debouncing.
    pub fn fire(&mut self, name: impl Into<Cow<'static, str>>) {
        self.intents.push_back(Intent::Trigger(name.into()));
    }

    /// Enqueues a resize event, consumed at the start of the next tick.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.intents.push_back(Intent::Resize { width, height });
    }

    /// Sending half of the asset inbox, for loader tasks.
    #[must_use]
    pub fn asset_sender(&self) -> AssetSender {
        self.assets.sender()
    }

    /// Sets the per-frame render collaborator.
    pub fn set_render_fn<F>(&mut self, f: F)
    where
        F: FnMut(&SceneContext, Viewport) + 'static,
    {
        self.render_fn = Some(Box::new(f));
    }

    // ========================================================================
    // Tick pipeline
    // ========================================================================

    /// One wall-clock tick: samples the frame timer and advances by the
    /// measured delta.
    pub fn tick(&mut self) {
        self.timer.tick();
        let dt = self.timer.dt_seconds();
        self.advance(dt);
    }

    /// One tick with an explicit `dt`, for tests and self-paced demos.
    pub fn advance(&mut self, dt: f32) {
        self.apply_asset_events();
        self.process_intents();
        self.timeline.update(dt, &mut self.scene);
        if let Some(render) = self.render_fn.as_mut() {
            render(&self.scene, self.viewport);
        }
    }

    /// Hands the tick loop to a driver. [`FixedStepDriver`] never
    /// returns; [`ManualDriver`] returns after its frame budget.
    pub fn run<D: FrameDriver>(&mut self, driver: D) {
        driver.run(|| self.tick());
    }

    fn apply_asset_events(&mut self) {
        // Drained on this thread only; loaders just send.
        for event in self.assets.drain().collect::<Vec<_>>() {
            match event {
                AssetEvent::Loaded {
                    target,
                    kind,
                    transform,
                } => {
                    log::debug!("asset resolved for target '{target}' ({kind:?})");
                    if let Err(err) = self.scene.insert_with(target, transform) {
                        log::warn!("discarding loaded asset: {err}");
                    }
                }
                AssetEvent::Failed { target, error } => {
                    log::error!("failed to load asset for target '{target}': {error}");
                }
            }
        }
    }

    fn process_intents(&mut self) {
        while let Some(intent) = self.intents.pop_front() {
            match intent {
                Intent::Trigger(name) => {
                    let Some(factory) = self.triggers.get_mut(&name) else {
                        log::warn!("trigger '{name}' fired with no binding");
                        continue;
                    };
                    let transition = factory(&self.scene);
                    if let Err(err) = self.timeline.run(&self.scene, transition) {
                        // A bad transition must not take down the loop.
                        log::warn!("trigger '{name}' rejected: {err}");
                    }
                }
                Intent::Resize { width, height } => {
                    self.viewport.resize(width, height, &mut self.scene.camera);
                }
            }
        }
    }
}
