//! A loose field of wireframe cubes scattered around the scene.

use rand::Rng;
use three;
use three::Object;

/// How many cubes get scattered.
pub const CUBE_COUNT: usize = 1000;
/// Edge length of every cube.
const CUBE_SIZE: f32 = 4.0;
/// Positions are drawn from [-SPREAD / 2, SPREAD / 2) per axis.
const SPREAD: f32 = 1000.0;
/// Half-extent of the central volume kept clear for the knot.
const EXCLUSION: f32 = 20.0;

const CUBE_COLOR: three::Color = 0xFFFFFF;

/// Draw a position outside the central exclusion volume.
///
/// Candidates are redrawn while all three coordinates fall inside the
/// exclusion cube at once; a single far-out coordinate is enough to accept.
pub fn scatter<R: Rng>(rng: &mut R) -> [f32; 3] {
    let half = SPREAD / 2.0;
    loop {
        let x = rng.gen_range(-half, half);
        let y = rng.gen_range(-half, half);
        let z = rng.gen_range(-half, half);
        if x.abs() <= EXCLUSION && y.abs() <= EXCLUSION && z.abs() <= EXCLUSION {
            continue;
        }
        return [x, y, z];
    }
}

pub struct CubeField {
    // Scene nodes live as long as their handles do.
    _cubes: Vec<three::Mesh>,
}

impl CubeField {
    pub fn new<R: Rng>(
        rng: &mut R,
        factory: &mut three::Factory,
        scene: &mut three::Scene,
    ) -> Self {
        let template = three::Geometry::cuboid(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE);
        let material = three::material::Wireframe { color: CUBE_COLOR };
        let mut cubes = Vec::with_capacity(CUBE_COUNT);
        for _ in 0 .. CUBE_COUNT {
            let mut cube = factory.mesh(template.clone(), material.clone());
            cube.set_position(scatter(rng));
            scene.add(&cube);
            cubes.push(cube);
        }
        CubeField { _cubes: cubes }
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;
    use super::*;

    #[test]
    fn scatter_avoids_the_middle() {
        let mut rng = thread_rng();
        for _ in 0 .. CUBE_COUNT {
            let [x, y, z] = scatter(&mut rng);
            assert!(
                x.abs() > EXCLUSION || y.abs() > EXCLUSION || z.abs() > EXCLUSION,
                "cube at ({}, {}, {}) sits inside the exclusion volume",
                x,
                y,
                z
            );
        }
    }

    #[test]
    fn scatter_stays_in_spread() {
        let mut rng = thread_rng();
        let half = SPREAD / 2.0;
        for _ in 0 .. CUBE_COUNT {
            let pos = scatter(&mut rng);
            for &c in &pos {
                assert!(c >= -half && c < half, "coordinate {} out of spread", c);
            }
        }
    }
}
