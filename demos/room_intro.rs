//! Headless reconstruction of the room-intro demo: a model and a text
//! mesh load asynchronously, a starfield decorates the background, and a
//! single "enter" trigger plays a coordinated multi-object transition —
//! camera dives toward the model while tracking it, text lifts, the
//! light sweeps.
//!
//! Run with `RUST_LOG=debug cargo run --example room_intro` to watch the
//! timeline lifecycle.

use glam::Vec3;
use orrery::assets::{AssetEvent, AssetKind};
use orrery::scene::starfield;
use orrery::{AnimationSpec, App, Easing, Property, SceneContext, Transform, Transition};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new(1280, 720);

    // Synchronously populated targets: camera and the key light.
    app.scene.insert_with(
        "camera",
        Transform::from_position(Vec3::new(5.0, 5.0, 10.0)),
    )?;
    app.scene
        .get_mut("camera")
        .unwrap()
        .transform
        .look_at(Vec3::ZERO);
    app.scene.insert_with(
        "light",
        Transform::from_position(Vec3::new(10.0, 10.0, 5.0)),
    )?;
    app.scene.stars = starfield::scatter(400, 50.0, 7);

    // Model and text arrive like external loader results.
    let sender = app.asset_sender();
    sender.send(AssetEvent::Loaded {
        target: "model".into(),
        kind: AssetKind::Model,
        transform: Transform::new(),
    })?;
    sender.send(AssetEvent::Loaded {
        target: "text".into(),
        kind: AssetKind::TextMesh,
        transform: Transform::from_position(Vec3::new(0.0, -0.5, 2.0)),
    })?;

    app.bind_trigger("enter", |_scene: &SceneContext| {
        Transition::new("enter")
            .with(
                AnimationSpec::new("camera", Property::Position, Vec3::new(1.0, 1.0, 1.6), 2.0)
                    .with_easing(Easing::CubicInOut)
                    .with_on_tick(|scene: &mut SceneContext| {
                        // Keep the camera aimed at the model while both move.
                        let model_pos = scene.get("model").map(|m| m.transform.position);
                        if let (Some(pos), Some(cam)) = (model_pos, scene.get_mut("camera")) {
                            cam.transform.look_at(pos);
                        }
                    }),
            )
            .with(
                AnimationSpec::new("model", Property::Position, Vec3::new(0.0, 0.0, -1.5), 2.0)
                    .with_easing(Easing::QuadInOut),
            )
            .with(
                AnimationSpec::new("text", Property::Position, Vec3::new(0.0, 1.2, 0.0), 1.5)
                    .with_easing(Easing::CubicInOut),
            )
            .with(AnimationSpec::new(
                "light",
                Property::Position,
                Vec3::new(-6.0, 8.0, 3.0),
                2.0,
            ))
    });

    app.set_render_fn(|scene, _viewport| {
        // Stand-in for the render surface collaborator.
        let cam = scene.get("camera").unwrap().transform;
        log::trace!("camera at {:?}", cam.position);
    });

    // The button click.
    app.fire("enter");

    // Self-paced 60 Hz ticks covering the longest spec plus some idle.
    let dt = 1.0 / 60.0;
    for frame in 0..150 {
        app.advance(dt);
        if frame % 30 == 29 {
            let cam = app.scene.get("camera").unwrap().transform;
            println!(
                "t={:>4.2}s  camera {:>6.2?}  runs={}",
                (frame + 1) as f32 * dt,
                cam.position,
                app.timeline.active_runs()
            );
        }
    }

    let cam = app.scene.get("camera").unwrap().transform.position;
    println!("final camera position: {cam:?}");
    Ok(())
}
