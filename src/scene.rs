//! Per-frame driver tying the dot field, the menu slider and the active style together.

use egui::{Pos2, Rect, Vec2};

use crate::config::{AppConfig, FieldParams};
use crate::field::{DotGrid, DotStroke};
use crate::menu::{MenuAction, MenuSlider};
use crate::render::Canvas;
use crate::showcase::{ContentSurface, Showcase, StyleTable, WorkStyle};

/// Everything that evolves from frame to frame.
///
/// The host reports resizes and pointer positions between frames; a resize replaces the
/// grid before the next [`Scene::advance`].
pub struct Scene {
    grid: DotGrid,
    field: FieldParams,
    menu: MenuSlider,
    showcase: Showcase,
    styles: StyleTable,
    pointer: Pos2,
    strokes: Vec<DotStroke>,
}

impl Scene {
    pub fn new(config: &AppConfig, styles: StyleTable) -> Self {
        Self {
            grid: DotGrid::new(config.layout),
            field: config.field,
            menu: MenuSlider::new(config.menu),
            showcase: Showcase::default(),
            styles,
            pointer: Pos2::ZERO,
            strokes: Vec::new(),
        }
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.grid.resize(viewport);
    }

    /// Runs one frame: dots, then menu, then paint.
    ///
    /// `pointer` is `None` when the host has no position; the last known one is reused.
    pub fn advance(&mut self, pointer: Option<Pos2>, canvas: &mut impl Canvas) {
        if let Some(pointer) = pointer {
            self.pointer = pointer;
        }

        self.strokes.clear();
        self.grid.step(self.pointer, &self.field, &mut self.strokes);
        self.menu.step(f64::from(self.pointer.x));

        let Some(viewport) = self.grid.viewport() else {
            return;
        };
        let style = self.active_style();
        canvas.fill_rect(Rect::from_min_size(Pos2::ZERO, viewport), style.background);
        if !self.showcase.animation_visible() {
            return;
        }
        for stroke in &self.strokes {
            canvas.point(stroke.pos, stroke.width, style.dot_color);
        }
    }

    pub fn handle(&mut self, action: MenuAction, surface: Option<&mut dyn ContentSurface>) {
        match action {
            MenuAction::Select(work) => self.showcase.select(work, &self.styles, surface),
        }
    }

    pub fn active_style(&self) -> WorkStyle {
        self.styles.style(self.showcase.active())
    }

    pub fn viewport(&self) -> Option<Vec2> {
        self.grid.viewport()
    }

    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    pub fn menu(&self) -> &MenuSlider {
        &self.menu
    }

    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use egui::Color32;

    use super::*;
    use crate::render::{DrawCommand, FrameRecorder};
    use crate::showcase::tests::RecordingSurface;
    use crate::showcase::Work;

    fn scene() -> Scene {
        let mut scene = Scene::new(&AppConfig::default(), StyleTable::default());
        scene.resize(Vec2::new(800.0, 800.0));
        scene
    }

    #[test]
    fn paints_background_before_dots() {
        let mut scene = scene();
        let mut canvas = FrameRecorder::new();

        scene.advance(Some(Pos2::new(400.0, 400.0)), &mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 1 + 70 * 70);
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 800.0)),
                color: Color32::WHITE,
            }
        );
        assert!(canvas
            .points()
            .all(|(_, _, color)| color == Color32::from_rgb(200, 0, 0)));
    }

    #[test]
    fn nothing_is_painted_before_first_resize() {
        let mut scene = Scene::new(&AppConfig::default(), StyleTable::default());
        let mut canvas = FrameRecorder::new();

        scene.advance(Some(Pos2::new(10.0, 10.0)), &mut canvas);

        assert!(canvas.commands().is_empty());
        assert!(scene.menu().is_opening());
    }

    #[test]
    fn external_work_hides_dots_but_keeps_background() {
        let mut scene = scene();
        let mut surface = RecordingSurface::default();
        scene.handle(MenuAction::Select(Work::Second), Some(&mut surface));

        let mut canvas = FrameRecorder::new();
        scene.advance(Some(Pos2::new(400.0, 400.0)), &mut canvas);

        assert_eq!(canvas.points().count(), 0);
        let backgrounds: Vec<_> = canvas.backgrounds().map(|(_, color)| color).collect();
        assert_eq!(backgrounds, vec![Color32::from_rgb(0, 50, 100)]);
        assert!(surface.visible);
    }

    #[test]
    fn missing_pointer_reuses_last_position() {
        let mut scene = scene();
        let mut canvas = FrameRecorder::new();

        scene.advance(Some(Pos2::new(300.0, 120.0)), &mut canvas);
        scene.advance(None, &mut canvas);

        assert_eq!(scene.pointer(), Pos2::new(300.0, 120.0));
        assert!(!scene.menu().is_opening());
    }
}
