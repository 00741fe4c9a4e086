use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Scatters `count` points uniformly inside a cube of half-extent
/// `extent` centered on the origin.
///
/// Seeded so a scene reloads with the same sky.
#[must_use]
pub fn scatter(count: usize, extent: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-extent..=extent),
                rng.random_range(-extent..=extent),
                rng.random_range(-extent..=extent),
            )
        })
        .collect()
}
