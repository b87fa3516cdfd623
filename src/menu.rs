//! Slide-out navigation menu: easing of the panel offset and the panel itself.

use egui::{emath, Color32, Margin, RichText, Shadow, Vec2};

use crate::config::MenuConfig;
use crate::showcase::Work;

/// Horizontal offset of the menu panel, eased toward open (`0`) or closed (`-width`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSlider {
    config: MenuConfig,
    current_offset: f64,
    target_offset: f64,
}

impl MenuSlider {
    /// Starts fully closed.
    pub fn new(config: MenuConfig) -> Self {
        Self::with_offset(config, -config.width)
    }

    pub fn with_offset(config: MenuConfig, offset: f64) -> Self {
        Self {
            config,
            current_offset: offset.clamp(-config.width, 0.0),
            target_offset: -config.width,
        }
    }

    /// Retargets from the pointer's x and eases one frame. Returns the new offset.
    pub fn step(&mut self, pointer_x: f64) -> f64 {
        self.target_offset = if pointer_x < self.config.slide_threshold {
            0.0
        } else {
            -self.config.width
        };
        self.current_offset = emath::lerp(
            self.current_offset..=self.target_offset,
            self.config.easing,
        );
        self.current_offset
    }

    pub fn offset(&self) -> f64 {
        self.current_offset
    }

    pub fn target(&self) -> f64 {
        self.target_offset
    }

    pub fn is_opening(&self) -> bool {
        self.target_offset == 0.0
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }
}

/// What the user picked in the menu this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Select(Work),
}

const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(8, 8, 8, 204);
const BUTTON_FILL: Color32 = Color32::from_gray(0x55);
const BUTTON_HEIGHT: f32 = 40.0;

/// Draws the panel at the slider's offset and reports a clicked work, if any.
pub fn show_panel(ctx: &egui::Context, slider: &MenuSlider) -> Option<MenuAction> {
    let width = slider.config().width as f32;
    let height = ctx.screen_rect().height();
    let mut action = None;

    egui::Area::new(egui::Id::new("menu_panel"))
        .fixed_pos(egui::pos2(slider.offset() as f32, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(PANEL_FILL)
                .inner_margin(Margin {
                    left: 0,
                    right: 0,
                    top: 50,
                    bottom: 0,
                })
                .shadow(Shadow {
                    offset: [2, 0],
                    blur: 5,
                    spread: 0,
                    color: Color32::from_black_alpha(128),
                })
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.set_min_height((height - 50.0).max(0.0));
                    ui.vertical_centered(|ui| {
                        for work in Work::ALL {
                            ui.add_space(15.0);
                            let button = egui::Button::new(
                                RichText::new(work.label()).color(Color32::WHITE),
                            )
                            .fill(BUTTON_FILL)
                            .min_size(Vec2::new(width * 0.8, BUTTON_HEIGHT));
                            if ui.add(button).clicked() {
                                action = Some(MenuAction::Select(work));
                            }
                        }
                    });
                });
        });

    action
}
