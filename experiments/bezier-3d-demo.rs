// Render the spatial cubic demo under a rotation.
//
// The view starts at x=20, y=30, z=0 degrees. Rotation is given either as
// three angles or as a list of key presses (up, down, left, right, pageup,
// pagedown), each turning the view by 5 degrees.
//
// usage: bezier-3d-demo [scene.json|-] [output.svg|output.png] [x y z | keys...]

use bezier_curves::modules::export::plot::{render_scene_3d_to_file, PlotOptions};
use bezier_curves::modules::parse::json::SceneConfig;
use bezier_curves::modules::scene::Scene3;
use bezier_curves::modules::view::{parse_keys, ViewState};
use log::{info, warn};
use std::env;

const DEFAULT_OUTPUT: &str = "bezier-3d.svg";

fn parse_view(args: &[String]) -> Result<ViewState, Box<dyn std::error::Error>> {
    if let [x, y, z] = args {
        if let (Ok(x), Ok(y), Ok(z)) = (x.parse(), y.parse(), z.parse()) {
            return Ok(ViewState::new(x, y, z));
        }
    }

    let mut view = ViewState::default();
    for key in parse_keys(&args.join(" "))? {
        view.rotate(key);
    }
    Ok(view)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let scene = match args.first().map(String::as_str) {
        None | Some("-") => Scene3::demo(),
        Some(config) => SceneConfig::from_file(config)?.into_scene_3d()?,
    };
    let output = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let view = parse_view(args.get(2..).unwrap_or(&[]))?;

    if scene.curve.degree() != 3 {
        warn!(
            "the demo is tuned for cubic curves, '{}' has degree {}",
            scene.name,
            scene.curve.degree()
        );
    }

    for (t, label) in [(0.0, "start"), (0.5, "middle"), (1.0, "end")] {
        let p = scene.curve.point_at(t);
        info!("{} of curve: ({:.3}, {:.3}, {:.3})", label, p.x, p.y, p.z);
    }
    info!("{}", view.caption());

    render_scene_3d_to_file(&scene, &view, &output, &PlotOptions::default())?;
    info!("wrote {}", output);
    Ok(())
}
