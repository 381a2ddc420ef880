// Render the planar cubic demo: axes with ticks, control polygon and the curve
// sampled at t = 0, 0.01, ..., 1.
//
// usage: bezier-2d-demo [scene.json] [output.svg|output.png]

use bezier_curves::modules::export::plot::{render_scene_2d_to_file, PlotOptions};
use bezier_curves::modules::export::svg_path::ToSvgPath;
use bezier_curves::modules::parse::json::SceneConfig;
use bezier_curves::modules::scene::Scene2;
use log::info;
use std::env;

const DEFAULT_OUTPUT: &str = "bezier-2d.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (scene, output) = match args.as_slice() {
        [] => (Scene2::demo(), DEFAULT_OUTPUT.to_string()),
        [output] if !output.ends_with(".json") => (Scene2::demo(), output.clone()),
        [config] => (
            SceneConfig::from_file(config)?.into_scene_2d()?,
            DEFAULT_OUTPUT.to_string(),
        ),
        [config, output, ..] => (SceneConfig::from_file(config)?.into_scene_2d()?, output.clone()),
    };

    info!(
        "scene '{}': degree {} curve, path {}",
        scene.name,
        scene.curve.degree(),
        scene.curve.to_svg_path()
    );

    let mid = scene.curve.point_at(0.5);
    info!("curve midpoint at ({:.3}, {:.3})", mid.x, mid.y);

    render_scene_2d_to_file(&scene, &output, &PlotOptions::default())?;
    info!("wrote {}", output);
    Ok(())
}
