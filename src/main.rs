use clap::Parser;
use scene2d::demo::create_demo_scene;
use scene2d::SurfaceState;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// X coordinate of the probe point
    #[arg(long, default_value_t = 0.0)]
    x: f32,

    /// Y coordinate of the probe point
    #[arg(long, default_value_t = 0.0)]
    y: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (scene, nodes) = create_demo_scene();

    for (name, id) in [
        ("panel", nodes.panel),
        ("widget", nodes.widget),
        ("pointer", nodes.pointer),
    ] {
        let global = scene.coord_to_global(id, args.x, args.y);
        let local = scene.coord_to_local(id, args.x, args.y);
        println!(
            "{name:>8}: local ({}, {}) -> global ({:.3}, {:.3}), global ({}, {}) -> local ({:.3}, {:.3})",
            args.x, args.y, global.x, global.y, args.x, args.y, local.x, local.y
        );

        let mut surface = SurfaceState::new();
        scene.get(id).set_transform(&mut surface);
        log::debug!("{name} surface transform: {:?}", surface.transform);
    }
}
