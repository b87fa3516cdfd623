use dotfield::config::AppConfig;
use dotfield::render::FrameRecorder;
use dotfield::scene::Scene;
use dotfield::showcase::StyleTable;
use eframe::egui::{Pos2, Vec2};

fn main() {
    let viewport = Vec2::new(1280.0, 720.0);
    let frames = 240;

    let config = AppConfig::default();
    let mut scene = Scene::new(&config, StyleTable::default());
    scene.resize(viewport);
    let mut canvas = FrameRecorder::new();

    // sweep the pointer left to right through the middle row, starting over the menu strip
    let mut menu_open_frames = 0;
    for frame in 0..frames {
        let t = frame as f32 / (frames - 1) as f32;
        let pointer = Pos2::new(t * viewport.x, viewport.y / 2.0);
        canvas.clear();
        scene.advance(Some(pointer), &mut canvas);
        if scene.menu().offset() > -config.menu.width / 2.0 {
            menu_open_frames += 1;
        }
    }

    let widths: Vec<f32> = canvas.points().map(|(_, width, _)| width).collect();
    let displacements: Vec<f32> = scene
        .grid()
        .dots()
        .iter()
        .map(|dot| dot.pos.distance(dot.origin()))
        .collect();

    let max_width = widths.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let min_width = widths.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_shift = displacements.iter().cloned().fold(0.0, f32::max);
    let avg_shift = displacements.iter().sum::<f32>() / displacements.len().max(1) as f32;
    let moving = displacements.iter().filter(|&&d| d > 0.5).count();

    println!("Field stats after {} frames:", frames);
    println!("  Dots: {}", scene.grid().len());
    println!("  Stroke width: {:.2} .. {:.2}", min_width, max_width);
    println!("  Max displacement: {:.2}", max_shift);
    println!("  Avg displacement: {:.3}", avg_shift);
    println!(
        "  Displaced dots (>0.5): {} ({:.1}%)",
        moving,
        moving as f32 * 100.0 / displacements.len().max(1) as f32
    );
    println!(
        "  Menu open for {} frames, final offset {:.2}",
        menu_open_frames,
        scene.menu().offset()
    );
}
