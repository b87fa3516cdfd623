use egui::{Pos2, Vec2};

use crate::config::{FieldParams, GridLayout};

use super::dot::{Dot, DotStroke};

/// Square grid of dots centered in the viewport.
///
/// Dots live in one flat vector, column-major: dot `(i, j)` sits at `i * count + j`, where
/// `i` is the column. A resize throws every dot away and lays the grid out again.
#[derive(Debug, Clone)]
pub struct DotGrid {
    layout: GridLayout,
    viewport: Option<Vec2>,
    dots: Vec<Dot>,
}

impl DotGrid {
    /// Creates an empty grid; nothing is stepped or drawn until [`Self::initialize`].
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            viewport: None,
            dots: Vec::new(),
        }
    }

    pub fn with_viewport(layout: GridLayout, viewport: Vec2) -> Self {
        let mut grid = Self::new(layout);
        grid.initialize(viewport);
        grid
    }

    /// Lays out `count × count` dots at rest, replacing any previous state.
    pub fn initialize(&mut self, viewport: Vec2) {
        let count = self.layout.count;
        let spacing = self.layout.spacing;
        let span = self.layout.span();
        let dx = (viewport.x - span) / 2.0;
        let dy = (viewport.y - span) / 2.0;

        self.dots.clear();
        self.dots.reserve_exact(count * count);
        for i in 0..count {
            for j in 0..count {
                let origin = Pos2::new(i as f32 * spacing + dx, j as f32 * spacing + dy);
                self.dots.push(Dot::new(origin));
            }
        }
        self.viewport = Some(viewport);

        log::debug!(
            "laid out {}x{} dots in a {}x{} viewport (offset {:.1}, {:.1})",
            count,
            count,
            viewport.x,
            viewport.y,
            dx,
            dy
        );
    }

    /// Same as [`Self::initialize`]; also initializes a grid that never was.
    pub fn resize(&mut self, viewport: Vec2) {
        self.initialize(viewport);
    }

    /// Advances every dot one frame and appends one stroke per dot to `strokes`.
    pub fn step(&mut self, pointer: Pos2, params: &FieldParams, strokes: &mut Vec<DotStroke>) {
        let extent = self.extent();
        strokes.reserve(self.dots.len());
        for dot in &mut self.dots {
            strokes.push(dot.update(pointer, params, extent));
        }
    }

    /// Larger viewport dimension, floored at one point so a minimized window stays finite.
    pub fn extent(&self) -> f32 {
        self.viewport.map_or(1.0, |viewport| viewport.x.max(viewport.y).max(1.0))
    }

    pub fn viewport(&self) -> Option<Vec2> {
        self.viewport
    }

    pub fn is_initialized(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dot(&self, i: usize, j: usize) -> Option<&Dot> {
        let count = self.layout.count;
        if i >= count || j >= count {
            return None;
        }
        self.dots.get(i * count + j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_square_grid() {
        let grid = DotGrid::with_viewport(GridLayout::new(12, 7.0), Vec2::new(300.0, 200.0));
        assert_eq!(grid.len(), 144);
        assert!(grid.dots().iter().all(|dot| dot.pos == dot.origin()));
        assert!(grid.dots().iter().all(|dot| dot.velocity == Vec2::ZERO));
    }

    #[test]
    fn indexes_columns_first() {
        let grid = DotGrid::with_viewport(GridLayout::new(4, 10.0), Vec2::new(40.0, 40.0));
        assert_eq!(grid.dot(0, 0).map(Dot::origin), Some(Pos2::new(0.0, 0.0)));
        assert_eq!(grid.dot(1, 0).map(Dot::origin), Some(Pos2::new(10.0, 0.0)));
        assert_eq!(grid.dot(0, 1).map(Dot::origin), Some(Pos2::new(0.0, 10.0)));
        assert_eq!(grid.dots()[1].origin(), Pos2::new(0.0, 10.0));
        assert!(grid.dot(4, 0).is_none());
    }

    #[test]
    fn uninitialized_grid_steps_nothing() {
        let mut grid = DotGrid::new(GridLayout::default());
        let mut strokes = Vec::new();
        grid.step(Pos2::ZERO, &FieldParams::default(), &mut strokes);
        assert!(grid.is_empty());
        assert!(!grid.is_initialized());
        assert!(strokes.is_empty());
    }

    #[test]
    fn resize_discards_motion() {
        let mut grid = DotGrid::with_viewport(GridLayout::new(10, 10.0), Vec2::new(200.0, 200.0));
        let mut strokes = Vec::new();
        for _ in 0..5 {
            strokes.clear();
            grid.step(Pos2::new(100.0, 100.0), &FieldParams::default(), &mut strokes);
        }
        assert!(grid.dots().iter().any(|dot| dot.velocity != Vec2::ZERO));

        grid.resize(Vec2::new(400.0, 300.0));

        assert_eq!(grid.len(), 100);
        assert!(grid.dots().iter().all(|dot| dot.velocity == Vec2::ZERO));
        assert_eq!(grid.dot(0, 0).map(Dot::origin), Some(Pos2::new(150.0, 100.0)));
    }

    #[test]
    fn zero_viewport_keeps_extent_positive() {
        let grid = DotGrid::with_viewport(GridLayout::new(3, 10.0), Vec2::ZERO);
        assert_eq!(grid.extent(), 1.0);
        assert_eq!(grid.dot(0, 0).map(Dot::origin), Some(Pos2::new(-15.0, -15.0)));
    }
}
