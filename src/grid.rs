//! A ground grid assembled from the library's polyline material.
//!
//! The line material renders a continuous strip, so the grid is traced
//! boustrophedon: rows left-to-right then right-to-left, with the turn
//! segments landing on the outer grid lines, then the same for columns.
//! Every drawn segment therefore lies on a grid line.

use mint;
use three;
use three::Object;

const GRID_COLOR: three::Color = 0x111111;
const AXES_COLOR: three::Color = 0x220000;

fn point(x: f32, z: f32) -> mint::Point3<f32> {
    [x, 0.0, z].into()
}

/// Strip of corner points tracing every line of a `size` x `size` grid
/// split into `divisions` cells per side.
pub fn trace(size: f32, divisions: u32) -> Vec<mint::Point3<f32>> {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let mut points = Vec::with_capacity(4 * (divisions as usize + 1));

    for row in 0 .. divisions + 1 {
        let z = -half + row as f32 * step;
        if row % 2 == 0 {
            points.push(point(-half, z));
            points.push(point(half, z));
        } else {
            points.push(point(half, z));
            points.push(point(-half, z));
        }
    }
    // The hop from the last row endpoint runs along the far edge.
    for column in 0 .. divisions + 1 {
        let x = -half + column as f32 * step;
        if column % 2 == 0 {
            points.push(point(x, half));
            points.push(point(x, -half));
        } else {
            points.push(point(x, -half));
            points.push(point(x, half));
        }
    }
    points
}

/// Strip tracing the two center axes of the grid, retracing through the
/// middle so the connecting segments stay on the axes themselves.
pub fn axes(size: f32) -> Vec<mint::Point3<f32>> {
    let half = size / 2.0;
    vec![
        point(-half, 0.0),
        point(half, 0.0),
        point(0.0, 0.0),
        point(0.0, -half),
        point(0.0, half),
    ]
}

/// The grid and its highlighted center axes, grouped for placement.
pub struct Grid {
    pub group: three::Group,
    _lines: three::Mesh,
    _axes: three::Mesh,
}

impl Grid {
    pub fn new(factory: &mut three::Factory, size: f32, divisions: u32) -> Self {
        let group = factory.group();
        let mut lines = factory.mesh(
            three::Geometry::with_vertices(trace(size, divisions)),
            three::material::Line { color: GRID_COLOR },
        );
        lines.set_parent(&group);
        let mut axes = factory.mesh(
            three::Geometry::with_vertices(axes(size)),
            three::material::Line { color: AXES_COLOR },
        );
        axes.set_parent(&group);
        Grid {
            group,
            _lines: lines,
            _axes: axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 200.0;
    const DIVISIONS: u32 = 50;

    fn on_lattice(v: f32, half: f32, step: f32) -> bool {
        let offset = (v + half) / step;
        (offset - offset.round()).abs() < 1e-3
    }

    #[test]
    fn trace_covers_both_passes() {
        let points = trace(SIZE, DIVISIONS);
        assert_eq!(points.len(), 4 * (DIVISIONS as usize + 1));
    }

    #[test]
    fn trace_stays_on_grid_lines() {
        let half = SIZE / 2.0;
        let step = SIZE / DIVISIONS as f32;
        for p in trace(SIZE, DIVISIONS) {
            assert_eq!(p.y, 0.0);
            assert!(p.x.abs() <= half && p.z.abs() <= half);
            assert!(on_lattice(p.x, half, step), "x = {} off lattice", p.x);
            assert!(on_lattice(p.z, half, step), "z = {} off lattice", p.z);
        }
    }

    #[test]
    fn trace_segments_are_axis_aligned() {
        let points = trace(SIZE, DIVISIONS);
        for pair in points.windows(2) {
            let along_x = pair[0].x != pair[1].x;
            let along_z = pair[0].z != pair[1].z;
            assert!(
                along_x != along_z,
                "segment ({}, {}) -> ({}, {}) is diagonal or degenerate",
                pair[0].x,
                pair[0].z,
                pair[1].x,
                pair[1].z
            );
        }
    }

    #[test]
    fn axes_cross_the_origin() {
        let half = SIZE / 2.0;
        for p in axes(SIZE) {
            assert!(p.x == 0.0 || p.z == 0.0);
            assert!(p.x.abs() <= half && p.z.abs() <= half);
        }
    }
}
