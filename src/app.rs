use egui::LayerId;

use crate::config::{AppConfig, SurfaceConfig};
use crate::menu;
use crate::scene::Scene;
use crate::showcase::{ContentSurface, StyleTable};
use crate::surface::HostSurface;

pub struct DotFieldApp {
    scene: Scene,
    surface: Option<HostSurface>,
    warned_missing_surface: bool,
}

impl DotFieldApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(AppConfig::default(), StyleTable::default())
    }

    pub fn with_config(config: AppConfig, styles: StyleTable) -> Self {
        // the menu panel is drawn inside the canvas, which the surface would cover
        let surface = HostSurface::attach(SurfaceConfig {
            reserved_left: config.surface.reserved_left.max(config.menu.width as f32),
            ..config.surface
        });
        log::info!(
            "dot field ready: {0}x{0} dots, content surface {1}",
            config.layout.count,
            if surface.is_some() { "attached" } else { "missing" }
        );
        Self {
            scene: Scene::new(&config, styles),
            surface,
            warned_missing_surface: false,
        }
    }

    fn warn_if_surface_missing(&mut self) {
        if self.surface.is_none() && !self.warned_missing_surface {
            log::warn!("no content surface, external works will not be shown");
            self.warned_missing_surface = true;
        }
    }
}

impl eframe::App for DotFieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // resize lands before this frame's step
        let viewport = ctx.screen_rect().size();
        if self.scene.viewport() != Some(viewport) {
            self.scene.resize(viewport);
            if let Some(surface) = &mut self.surface {
                surface.fit_viewport(viewport);
            }
        }

        let pointer = ctx.input(|i| i.pointer.latest_pos());
        let mut painter = ctx.layer_painter(LayerId::background());
        self.scene.advance(pointer, &mut painter);

        if let Some(action) = menu::show_panel(ctx, self.scene.menu()) {
            self.warn_if_surface_missing();
            let surface = self
                .surface
                .as_mut()
                .map(|surface| surface as &mut dyn ContentSurface);
            self.scene.handle(action, surface);
        }

        if let Some(surface) = &self.surface {
            surface.show(ctx);
        }

        ctx.request_repaint();
    }
}
