use pointraster::config::{Mode, ViewerConfig};
use pointraster::scene::Scene;
use pointraster::screen::{Rgba, ScreenSpace};
use pointraster::{Point2D, fill_triangle, points_to_floats, rasterize_circle, rasterize_line};

fn p(x: f32, y: f32) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn test_midpoint_line_worked_example() {
    assert_eq!(
        rasterize_line(p(0.0, 0.0), p(4.0, 2.0)),
        vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(3.0, 1.0), p(4.0, 2.0)]
    );
}

#[test]
fn test_line_sequence_is_not_reversed_by_swapping_arguments() {
    let forward = rasterize_line(p(0.0, 0.0), p(4.0, 2.0));
    let backward = rasterize_line(p(4.0, 2.0), p(0.0, 0.0));
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(backward, forward);
    assert_ne!(backward, reversed);
}

#[test]
fn test_right_triangle_fill() {
    let points = fill_triangle(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert_eq!(points.len(), 15);
    for q in &points {
        assert!(q.x >= 0.0 && q.y >= 0.0 && q.x + q.y <= 4.0);
    }
}

#[test]
fn test_negative_minimum_box_bias() {
    // min x of -0.5 rounds up to 0, so the column at x = 0 is the first one scanned
    // even though the triangle covers part of x in [-0.5, 0)
    let points = fill_triangle(p(-0.5, 0.0), p(4.0, 0.0), p(-0.5, 4.0));
    assert!(points.iter().all(|q| q.x >= 0.0));
    assert!(points.contains(&p(0.0, 0.0)));
}

#[test]
fn test_circle_flattened_buffer() {
    let data = points_to_floats(&rasterize_circle(p(0.0, 0.0), 10));
    assert_eq!(data.len() % 3, 0);
    assert!(data.iter().skip(2).step_by(3).all(|&z| z == 0.0));
}

#[test]
fn test_snapshot_of_default_triangle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("triangle.png");

    let config = ViewerConfig { filled: true, ..ViewerConfig::default() };
    let mut scene = Scene::new(&config);
    assert!(scene.refresh());
    let mut screen = ScreenSpace::new(config.width, config.height);
    scene.render(&mut screen);
    screen.save_png(&path).expect("snapshot written");

    let img = image::open(&path).expect("snapshot readable").to_rgba8();
    assert_eq!(img.dimensions(), (800, 600));
    // vertex (-150, -150) sits at pixel (250, 450) once y is flipped
    assert_eq!(img.get_pixel(250, 450).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn test_circle_scene_draws_ring() {
    let config = ViewerConfig { mode: Mode::Circle, radius: 50, ..ViewerConfig::default() };
    let mut scene = Scene::new(&config);
    scene.refresh();
    let mut screen = ScreenSpace::new(config.width, config.height);
    scene.render(&mut screen);

    // (50, 0) from the center, and the center itself stays empty
    assert_eq!(screen.get_pixel(450, 300), Some(Rgba::BLACK));
    assert_eq!(screen.get_pixel(400, 300), Some(Rgba::WHITE));
}

#[test]
fn test_save_png_reports_bad_path() {
    let screen = ScreenSpace::new(4, 4);
    let err = screen
        .save_png("/nonexistent-dir/should/fail.png")
        .expect_err("write should fail");
    assert!(format!("{:#}", err).contains("failed to write snapshot"));
}
