//! Drawing primitives the frame driver emits, and the surfaces that consume them.

use egui::{Color32, Painter, Pos2, Rect};

/// Where a frame is painted.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// A point of stroke width `width`: a filled disc of that diameter.
    fn point(&mut self, pos: Pos2, width: f32, color: Color32);
}

impl Canvas for Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.rect_filled(rect, 0.0, color);
    }

    fn point(&mut self, pos: Pos2, width: f32, color: Color32) {
        self.circle_filled(pos, width * 0.5, color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color32 },
    Point { pos: Pos2, width: f32, color: Color32 },
}

/// Canvas that keeps the commands of the last frames instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn points(&self) -> impl Iterator<Item = (Pos2, f32, Color32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Point { pos, width, color } => Some((pos, width, color)),
            DrawCommand::FillRect { .. } => None,
        })
    }

    pub fn backgrounds(&self) -> impl Iterator<Item = (Rect, Color32)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            DrawCommand::Point { .. } => None,
        })
    }
}

impl Canvas for FrameRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn point(&mut self, pos: Pos2, width: f32, color: Color32) {
        self.commands.push(DrawCommand::Point { pos, width, color });
    }
}
