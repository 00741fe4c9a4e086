//! Asynchronous asset delivery onto the update thread.
//!
//! # Overview
//!
//! The core never loads assets itself: external loaders (model decoder,
//! font/text-geometry builder, ...) run wherever they like and report
//! results as [`AssetEvent`]s over a channel. The receiving side is
//! drained once per tick, on the single update thread, before anything
//! else happens — so a target flips from "absent" to "present" at a
//! defined point in the tick and never mid-update.
//!
//! A failed load is logged and the target stays permanently absent; the
//! scene keeps running without it. There is no retry.

use std::borrow::Cow;

use crate::errors::LoadError;
use crate::scene::transform::Transform;

/// What kind of asset a loader resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A loaded model (e.g. a glTF scene).
    Model,
    /// A generated 3D text mesh.
    TextMesh,
}

/// Outcome of one external load, addressed to a named scene target.
#[derive(Debug)]
pub enum AssetEvent {
    /// The loader resolved; the named target should be registered with
    /// the given initial transform.
    Loaded {
        target: Cow<'static, str>,
        kind: AssetKind,
        transform: Transform,
    },
    /// The loader failed; logged, target stays absent.
    Failed {
        target: Cow<'static, str>,
        error: LoadError,
    },
}

/// Sending half handed to loader tasks.
pub type AssetSender = flume::Sender<AssetEvent>;

/// Channel pair owned by the application root.
pub struct AssetChannel {
    tx: AssetSender,
    rx: flume::Receiver<AssetEvent>,
}

impl Default for AssetChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetChannel {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }

    /// Clones the sending half for a loader task. Senders are cheap and
    /// may cross threads; only the drain side is thread-confined.
    #[must_use]
    pub fn sender(&self) -> AssetSender {
        self.tx.clone()
    }

    /// Drains every event delivered since the last tick, without
    /// blocking.
    pub fn drain(&self) -> impl Iterator<Item = AssetEvent> + '_ {
        self.rx.try_iter()
    }
}
