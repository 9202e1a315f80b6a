//! The animated centerpiece: a torus-knot mesh orbited by a point light.

use std::f32::consts::PI;

use cgmath::{Euler, InnerSpace, Point3, Quaternion, Rad};
use cgmath::prelude::*;
use mint;
use rand::Rng;
use three;
use three::Object;

use color;

/// Distance from the knot center to the tube center line.
pub const RADIUS: f32 = 10.0;
/// Winding parameters the knot starts out with.
pub const INITIAL_WINDINGS: (u32, u32) = (1, 2);
/// Seconds between random re-windings of the knot.
const REWIND_PERIOD: f32 = 2.0;

const TUBULAR_SEGMENTS: u32 = 1000;
const RADIAL_SEGMENTS: u32 = 16;

const SPIN_STEP_X: f32 = 0.01;
const SPIN_STEP_Y: f32 = 0.015;
const SPIN_STEP_Z: f32 = 0.005;

const LIGHT_COLOR: three::Color = 0xFFFFFF;
const MARKER_RADIUS: f32 = 1.0;

/// Tube radius that keeps tight windings from self-intersecting.
pub fn tube_radius(p: u32, q: u32) -> f32 {
    1.0 / ((p as f32 / 2.0).max(q as f32) / 2.0)
}

/// Scale multiplier at `t` seconds, swinging between 0.9 and 1.1.
pub fn pulse(t: f32) -> f32 {
    1.0 + 0.1 * t.sin()
}

/// Advance the material hue by one frame step, wrapping in [0, 1).
pub fn advance_hue(hue: f32) -> f32 {
    (hue + 0.01) % 1.0
}

/// Local z offset of the orbiting light at `t` seconds.
pub fn light_sweep(t: f32) -> f32 {
    15.0 * (2.0 * t).sin()
}

/// Draw fresh winding parameters: p in [1, 10], q in [1, 5].
pub fn draw_windings<R: Rng>(rng: &mut R) -> (u32, u32) {
    (rng.gen_range(1, 11), rng.gen_range(1, 6))
}

fn curve_point(u: f32, p: u32, q: u32) -> Point3<f32> {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Point3::new(
        RADIUS * (2.0 + cs) * 0.5 * cu,
        RADIUS * (2.0 + cs) * 0.5 * su,
        RADIUS * qu_over_p.sin() * 0.5,
    )
}

/// Sweep a tube along the (p, q) torus knot curve.
///
/// The topology is the same for every winding pair: the tube is sampled on a
/// fixed grid of tubular and radial segments, only vertex positions move.
pub fn geometry(p: u32, q: u32) -> three::Geometry {
    let tube = tube_radius(p, q);
    let ring = RADIAL_SEGMENTS + 1;
    let mut vertices: Vec<mint::Point3<f32>> =
        Vec::with_capacity(((TUBULAR_SEGMENTS + 1) * ring) as usize);
    let mut normals: Vec<mint::Vector3<f32>> = Vec::with_capacity(vertices.capacity());

    for i in 0 .. TUBULAR_SEGMENTS + 1 {
        let u = i as f32 / TUBULAR_SEGMENTS as f32 * p as f32 * 2.0 * PI;
        let here = curve_point(u, p, q);
        let ahead = curve_point(u + 0.01, p, q);

        // Frenet-ish frame from two nearby curve samples.
        let tangent = ahead - here;
        let normal = ahead.to_vec() + here.to_vec();
        let binormal = tangent.cross(normal);
        let normal = binormal.cross(tangent).normalize();
        let binormal = binormal.normalize();

        for j in 0 .. ring {
            let v = j as f32 / RADIAL_SEGMENTS as f32 * 2.0 * PI;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = here + normal * cx + binormal * cy;
            vertices.push(pos.into());
            normals.push((pos - here).normalize().into());
        }
    }

    let mut faces: Vec<[u32; 3]> =
        Vec::with_capacity((TUBULAR_SEGMENTS * RADIAL_SEGMENTS * 2) as usize);
    for i in 1 .. TUBULAR_SEGMENTS + 1 {
        for j in 1 .. ring {
            let a = ring * (i - 1) + (j - 1);
            let b = ring * i + (j - 1);
            let c = ring * i + j;
            let d = ring * (i - 1) + j;
            faces.push([a, b, d]);
            faces.push([b, c, d]);
        }
    }

    let mut geometry = three::Geometry::with_vertices(vertices);
    geometry.base.normals = normals;
    geometry.faces = faces;
    geometry
}

/// The spinning group holding the knot mesh, its light and the light marker.
pub struct Knot {
    pub group: three::Group,
    mesh: three::Mesh,
    light: three::light::Point,
    marker: three::Mesh,
    spin: (f32, f32, f32),
    hue: f32,
    windings: (u32, u32),
    clock: three::Timer,
    rewind: three::Timer,
}

impl Knot {
    pub fn new(factory: &mut three::Factory, input: &three::Input) -> Self {
        let group = factory.group();

        let (p, q) = INITIAL_WINDINGS;
        let mut mesh = factory.mesh(
            geometry(p, q),
            three::material::Lambert {
                color: 0xFFFF00,
                flat: false,
            },
        );
        mesh.set_parent(&group);

        let mut light = factory.point_light(LIGHT_COLOR, 1.0);
        light.set_parent(&group);

        let mut marker = factory.mesh(
            three::Geometry::uv_sphere(MARKER_RADIUS, 8, 8),
            three::material::Wireframe { color: LIGHT_COLOR },
        );
        marker.set_parent(&group);

        Knot {
            group,
            mesh,
            light,
            marker,
            spin: (0.0, 0.0, 0.0),
            hue: 0.0,
            windings: (p, q),
            clock: input.time(),
            rewind: input.time(),
        }
    }

    /// Advance the animation by one frame.
    pub fn update<R: Rng>(
        &mut self,
        factory: &mut three::Factory,
        input: &three::Input,
        rng: &mut R,
    ) {
        let t = self.clock.get(input);

        self.spin.0 += SPIN_STEP_X;
        self.spin.1 += SPIN_STEP_Y;
        self.spin.2 += SPIN_STEP_Z;
        let spin = Quaternion::from(Euler::new(
            Rad(self.spin.0),
            Rad(self.spin.1),
            Rad(self.spin.2),
        ));
        self.group.set_orientation(spin);

        self.hue = advance_hue(self.hue);
        let skin = three::material::Lambert {
            color: color::hsl(self.hue, 1.0, 0.5),
            flat: false,
        };

        if self.rewind.get(input) > REWIND_PERIOD {
            self.windings = draw_windings(rng);
            self.rewind = input.time();
            let (p, q) = self.windings;
            debug!("rewinding the knot: p={}, q={}", p, q);
            // The library has no geometry setter, so the swap replaces the
            // mesh; dropping the old handle retires its scene node.
            let mut mesh = factory.mesh(geometry(p, q), skin);
            mesh.set_parent(&self.group);
            self.mesh = mesh;
        } else {
            self.mesh.set_material(skin);
        }
        self.mesh.set_scale(pulse(t));

        let z = light_sweep(t);
        self.light.set_position([0.0, 0.0, z]);
        self.marker.set_position([0.0, 0.0, z]);
    }
}
