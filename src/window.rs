use anyhow::{Result, anyhow};
use rand::rngs::ThreadRng;
use raylib::prelude::*;

use pointraster::config::{Mode, ViewerConfig};
use pointraster::point2d::Point2D;
use pointraster::scene::Scene;
use pointraster::screen::ScreenSpace;

/// Mouse position scaled from the (resizable) window to framebuffer pixels
fn cursor(r1: &RaylibHandle, screen: &ScreenSpace) -> Point2D {
    let mouse = r1.get_mouse_position();
    let sx = screen.width as f32 / r1.get_screen_width().max(1) as f32;
    let sy = screen.height as f32 / r1.get_screen_height().max(1) as f32;
    Point2D::new(mouse.x * sx, mouse.y * sy).round()
}

fn handle_input(r1: &RaylibHandle, scene: &mut Scene, screen: &ScreenSpace, rng: &mut ThreadRng, snapshots: &mut u32) {
    if r1.is_key_pressed(KeyboardKey::KEY_ONE) { scene.set_mode(Mode::Triangle) }
    if r1.is_key_pressed(KeyboardKey::KEY_TWO) { scene.set_mode(Mode::Circle) }
    if r1.is_key_pressed(KeyboardKey::KEY_THREE) { scene.set_mode(Mode::Bezier) }
    if r1.is_key_pressed(KeyboardKey::KEY_F) { scene.toggle_fill() }
    if r1.is_key_pressed(KeyboardKey::KEY_R) { scene.randomize_triangle(rng) }
    if r1.is_key_pressed(KeyboardKey::KEY_UP) { scene.adjust_radius(1) }
    if r1.is_key_pressed(KeyboardKey::KEY_DOWN) { scene.adjust_radius(-1) }
    if r1.is_key_pressed(KeyboardKey::KEY_PAGE_UP) { scene.adjust_radius(10) }
    if r1.is_key_pressed(KeyboardKey::KEY_PAGE_DOWN) { scene.adjust_radius(-10) }

    let pos = cursor(r1, screen);
    if r1.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        scene.press_primary(pos);
    } else if r1.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        scene.hold_primary(pos);
    }
    if r1.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        scene.release_primary();
    }
    if r1.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT) {
        scene.press_secondary(pos);
    }

    if r1.is_key_pressed(KeyboardKey::KEY_P) {
        *snapshots += 1;
        let path = format!("pointraster-{:03}.png", snapshots);
        match screen.save_png(&path) {
            Ok(()) => log::info!("Saved {}", path),
            Err(e) => log::warn!("Snapshot failed: {:#}", e),
        }
    }
}

fn help_text(scene: &Scene) -> String {
    let detail = match scene.mode() {
        Mode::Triangle => format!("Triangle  [F] fill: {}  [R] random", if scene.filled() { "on" } else { "off" }),
        Mode::Circle => format!("Circle  radius {}  [Up/Down] +-1  [PgUp/PgDn] +-10", scene.radius()),
        Mode::Bezier => "Bezier  [LMB] place/drag point  [RMB] remove point".to_string(),
    };
    format!("[1] Triangle [2] Circle [3] Bezier  [P] snapshot\n{}\n{} points", detail, scene.vertex_count())
}

pub fn run(config: &ViewerConfig) -> Result<()> {
    let (width, height) = (config.width, config.height);
    let mut screen = ScreenSpace::new(width, height);
    let mut scene = Scene::new(config);
    let mut rng = rand::thread_rng();
    let mut snapshots = 0;

    // Create raylib handle
    let (mut r1, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Point Rasterizer")
        .resizable()
        .build();
    r1.set_target_fps(config.fps);
    let image = Image::gen_image_color(width as i32, height as i32, Color::WHITE);
    let mut texture = r1
        .load_texture_from_image(&thread, &image)
        .map_err(|e| anyhow!("raylib texture loading failed: {:?}", e))?;
    log::info!("Window opened at {}x{}", width, height);

    while !r1.window_should_close() {
        handle_input(&r1, &mut scene, &screen, &mut rng, &mut snapshots);

        // Only re-plot and re-upload when the point cloud changed
        if scene.refresh() {
            scene.render(&mut screen);
            if let Err(e) = texture.update_texture(&screen.rgba) {
                log::warn!("Texture upload failed: {:?}", e);
            }
        }

        let window_width = r1.get_screen_width();
        let window_height = r1.get_screen_height();
        let text = help_text(&scene);

        let mut d = r1.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        d.draw_texture_pro(
            &texture,
            Rectangle { x: 0.0, y: 0.0, width: width as f32, height: height as f32 },
            Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        d.draw_text(&text, 10, 10, 20, Color::DARKGRAY);
        if let Some(warning) = scene.warning() {
            d.draw_text(warning, 10, 90, 20, Color::MAROON);
        }
    }

    log::info!("Window closed");
    Ok(())
}
