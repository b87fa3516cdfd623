//! Tunable constants for the dot field, the slide-out menu and the content surface.

use std::f32::consts::PI;

use egui::emath;

/// Layout of the dot grid: `count × count` dots, `spacing` points apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub count: usize,
    pub spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            count: 70,
            spacing: 10.0,
        }
    }
}

impl GridLayout {
    pub fn new(count: usize, spacing: f32) -> Self {
        Self { count, spacing }
    }

    /// Side length of the square spanned by the grid cells.
    pub fn span(&self) -> f32 {
        self.count as f32 * self.spacing
    }
}

/// Physics parameters applied to every dot each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Pointer distance mapped onto half a wave (`0..=PI`).
    pub dist_threshold: f32,
    /// Peak displacement of a dot's target away from its origin.
    pub distortion_amount: f32,
    /// Velocity multiplier applied after accumulating acceleration.
    pub damping: f32,
    /// Spring stiffness next to the pointer and at twice the viewport extent.
    pub stiffness: (f32, f32),
    /// Base and amplitude of the stroke inside the threshold: `base + amp * |cos(c / 2)|`.
    pub near_stroke: (f32, f32),
    /// Stroke width at zero distance and at the viewport extent, outside the threshold.
    pub far_stroke: (f32, f32),
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            dist_threshold: 70.0,
            distortion_amount: 20.0,
            damping: 0.87,
            stiffness: (0.1, 0.01),
            near_stroke: (1.0, 10.0),
            far_stroke: (5.0, 0.1),
        }
    }
}

impl FieldParams {
    pub fn with_dist_threshold(mut self, dist_threshold: f32) -> Self {
        self.dist_threshold = dist_threshold.max(f32::EPSILON);
        self
    }

    pub fn with_distortion_amount(mut self, distortion_amount: f32) -> Self {
        self.distortion_amount = distortion_amount;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }

    /// Wave angle for a dot at `distance` from the pointer.
    ///
    /// Not clamped: beyond the threshold the angle keeps growing past `PI`.
    pub fn angle(&self, distance: f32) -> f32 {
        emath::remap(distance, 0.0..=self.dist_threshold, 0.0..=PI)
    }
}

/// Slide-out menu geometry and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuConfig {
    pub width: f64,
    /// Pointer x below which the menu opens.
    pub slide_threshold: f64,
    /// Fraction of the remaining distance covered per frame.
    pub easing: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            width: 180.0,
            slide_threshold: 100.0,
            easing: 0.1,
        }
    }
}

impl MenuConfig {
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width.max(0.0);
        self
    }

    pub fn with_slide_threshold(mut self, slide_threshold: f64) -> Self {
        self.slide_threshold = slide_threshold;
        self
    }

    /// Easing outside `(0, 1)` would overshoot or stall, so it is clamped into that range.
    pub fn with_easing(mut self, easing: f64) -> Self {
        self.easing = easing.clamp(f64::EPSILON, 1.0 - f64::EPSILON);
        self
    }
}

/// Size of the external content surface relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    pub scale: f32,
    /// Width of the strip along the left edge the surface must not cover.
    pub reserved_left: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            scale: 0.8,
            reserved_left: MenuConfig::default().width as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppConfig {
    pub layout: GridLayout,
    pub field: FieldParams,
    pub menu: MenuConfig,
    pub surface: SurfaceConfig,
}
