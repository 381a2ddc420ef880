use bezier_curves::modules::export::plot::{render_scene_2d, render_scene_3d, PlotOptions};
use bezier_curves::modules::export::svg_path::ToSvgPath;
use bezier_curves::modules::parse::json::{AnyScene, SceneConfig};
use bezier_curves::modules::view::{parse_keys, ViewState};

#[test]
fn test_complete_workflow() {
    let config = SceneConfig::from_json(
        r#"{
            "name": "arch",
            "control_points": [[-4.0, 0.0], [-2.0, 4.0], [2.0, 4.0], [4.0, 0.0]],
            "spacing": {"step": 0.1}
        }"#,
    )
    .unwrap();

    let scene = match config.into_scene().unwrap() {
        AnyScene::Planar(scene) => scene,
        AnyScene::Spatial(_) => panic!("expected a planar scene"),
    };

    // Sample the curve and export it as path data
    let polyline = scene.polyline().unwrap();
    assert_eq!(polyline.len(), 11);
    let path = polyline.to_svg_path();
    assert!(path.starts_with("M-4,0 L"));
    assert!(path.ends_with("L4,0"));

    // The native path keeps the control points
    assert_eq!(scene.curve.to_svg_path(), "M-4,0 C-2,4,2,4,4,0");

    let options = PlotOptions {
        labels: false,
        ..PlotOptions::default()
    };
    let svg = render_scene_2d(&scene, &options).unwrap();
    assert!(svg.contains("<polyline"));
}

#[test]
fn test_rotated_3d_workflow() {
    let config = SceneConfig::from_json(
        r#"{"control_points": [[-4, 0, -2], [-2, 4, 2], [2, 4, 0], [4, 0, 3]], "spacing": {"count": 100}}"#,
    )
    .unwrap();
    let scene = config.into_scene_3d().unwrap();

    let mut view = ViewState::default();
    for key in parse_keys("up up left pageup").unwrap() {
        view.rotate(key);
    }
    assert_eq!(view, ViewState::new(10.0, 25.0, 5.0));

    let options = PlotOptions {
        width: 640,
        height: 480,
        labels: false,
    };
    let svg = render_scene_3d(&scene, &view, &options).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);
}
