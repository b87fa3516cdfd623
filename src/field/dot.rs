use egui::{emath, Pos2, Vec2};

use crate::config::FieldParams;

/// One grid dot: a damped spring pulling `pos` toward a pointer-distorted target near `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    origin: Pos2,
    pub pos: Pos2,
    pub velocity: Vec2,
}

/// Per-frame quantities derived from the pointer before integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotForces {
    /// Distance from the origin to the pointer.
    pub distance: f32,
    /// Wave angle, `distance` remapped from `0..=dist_threshold` onto `0..=PI`.
    pub angle: f32,
    pub distortion: Vec2,
    pub target: Pos2,
    pub stroke_width: f32,
    pub acceleration: Vec2,
}

/// Draw instruction emitted for a dot after it has moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStroke {
    pub pos: Pos2,
    pub width: f32,
}

impl Dot {
    pub fn new(origin: Pos2) -> Self {
        Self {
            origin,
            pos: origin,
            velocity: Vec2::ZERO,
        }
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Evaluates the distortion field for `pointer` without moving the dot.
    ///
    /// `extent` is the larger viewport dimension; it scales the far stroke and the stiffness
    /// falloff and must be positive.
    pub fn forces(&self, pointer: Pos2, params: &FieldParams, extent: f32) -> DotForces {
        let to_origin = self.origin - pointer;
        let distance = to_origin.length();
        let angle = params.angle(distance);

        let distortion = normalized_or_zero(to_origin) * params.distortion_amount * angle.sin();
        let target = self.origin + distortion;

        let stroke_width = if distance < params.dist_threshold {
            let (base, amplitude) = params.near_stroke;
            base + amplitude * (angle / 2.0).cos().abs()
        } else {
            let (near, far) = params.far_stroke;
            emath::remap(distance.min(extent), 0.0..=extent, near..=far)
        };

        // the grid can overflow a small viewport, putting dots past 2 * extent; clamped, k
        // stays at its far value there instead of going toward zero or negative
        let (stiff, slack) = params.stiffness;
        let k = emath::remap_clamp(pointer.distance(self.pos), 0.0..=2.0 * extent, stiff..=slack);
        let acceleration = (self.pos - target) * -k;

        DotForces {
            distance,
            angle,
            distortion,
            target,
            stroke_width,
            acceleration,
        }
    }

    /// Advances the dot one frame and returns where and how thick to draw it.
    pub fn update(&mut self, pointer: Pos2, params: &FieldParams, extent: f32) -> DotStroke {
        let forces = self.forces(pointer, params, extent);

        self.velocity += forces.acceleration;
        self.velocity *= params.damping;
        self.pos += self.velocity;

        DotStroke {
            pos: self.pos,
            width: forces.stroke_width,
        }
    }
}

/// Unit vector along `v`, or zero when `v` has no direction.
fn normalized_or_zero(v: Vec2) -> Vec2 {
    let length = v.length();
    if length > 0.0 {
        v / length
    } else {
        Vec2::ZERO
    }
}
