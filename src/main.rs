extern crate cgmath;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mint;
extern crate rand;
extern crate three;

mod color;
mod field;
mod grid;
mod knot;

use three::Object;

const BACKGROUND: three::Color = 0x000000;
const AMBIENT_COLOR: three::Color = 0x332211;

const CAMERA_FOV: f32 = 75.0;
const CAMERA_DISTANCE: f32 = 30.0;

const GRID_SIZE: f32 = 200.0;
const GRID_DIVISIONS: u32 = 50;
const GRID_DROP: f32 = -20.0;

fn main() {
    env_logger::init().unwrap();
    let mut rng = rand::thread_rng();

    let mut win = three::Window::new("Torus knot playground");
    win.scene.background = three::Background::Color(BACKGROUND);

    let cam = win.factory.perspective_camera(CAMERA_FOV, 0.1 .. 1000.0);
    let mut controls = three::controls::Orbit::builder(&cam)
        .position([0.0, 0.0, CAMERA_DISTANCE])
        .target([0.0, 0.0, 0.0])
        .build();

    let ambient = win.factory.ambient_light(AMBIENT_COLOR, 1.0);
    win.scene.add(&ambient);

    let mut knot = knot::Knot::new(&mut win.factory, &win.input);
    win.scene.add(&knot.group);

    let mut grid = grid::Grid::new(&mut win.factory, GRID_SIZE, GRID_DIVISIONS);
    grid.group.set_position([0.0, GRID_DROP, 0.0]);
    win.scene.add(&grid.group);

    let _field = field::CubeField::new(&mut rng, &mut win.factory, &mut win.scene);
    info!("scene ready: {} cubes around the knot", field::CUBE_COUNT);

    while win.update() && !win.input.hit(three::KEY_ESCAPE) {
        knot.update(&mut win.factory, &win.input, &mut rng);
        controls.update(&win.input);
        win.render(&cam);
    }
}
