//! Host implementations of [`ContentSurface`].
//!
//! On the web the page's `contentFrame` iframe is driven directly. Natively there is no
//! browser engine to embed, so an egui window stands in for the frame and offers to open
//! the link in the system browser.
//!
//! Either way the surface keeps clear of the menu strip along the left edge, so the menu
//! stays reachable while a work is shown.

use egui::{Pos2, Rect, Vec2};

use crate::config::SurfaceConfig;
use crate::showcase::ContentSurface;

#[cfg(not(target_arch = "wasm32"))]
pub type HostSurface = WindowSurface;
#[cfg(target_arch = "wasm32")]
pub type HostSurface = IframeSurface;

/// Where the surface sits in `viewport`: `scale` of it and centered, with the left edge
/// pushed right to `reserved_left` when the centered rect would reach into the menu strip.
pub fn frame_rect(config: &SurfaceConfig, viewport: Vec2) -> Rect {
    let centered = Rect::from_center_size((viewport * 0.5).to_pos2(), viewport * config.scale);
    let left = centered.left().max(config.reserved_left).min(centered.right());
    Rect::from_min_max(Pos2::new(left, centered.top()), centered.max)
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::WindowSurface;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    /// Egui window over the canvas showing the active link.
    #[derive(Debug, Clone)]
    pub struct WindowSurface {
        config: SurfaceConfig,
        visible: bool,
        source: Option<String>,
        rect: Rect,
    }

    impl WindowSurface {
        pub fn attach(config: SurfaceConfig) -> Option<Self> {
            Some(Self {
                config,
                visible: false,
                source: None,
                rect: Rect::NOTHING,
            })
        }

        pub fn is_visible(&self) -> bool {
            self.visible
        }

        pub fn source(&self) -> Option<&str> {
            self.source.as_deref()
        }

        pub fn rect(&self) -> Rect {
            self.rect
        }

        pub fn show(&self, ctx: &egui::Context) {
            if !self.visible {
                return;
            }
            let Some(url) = self.source.clone() else {
                return;
            };

            egui::Window::new("External work")
                .fixed_pos(self.rect.min)
                .fixed_size(self.rect.size())
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(self.rect.height() * 0.4);
                        ui.hyperlink(&url);
                        ui.add_space(8.0);
                        if ui.button("Open in browser").clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(&url));
                        }
                    });
                });
        }
    }

    impl ContentSurface for WindowSurface {
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_source(&mut self, source: Option<&str>) {
            self.source = source.map(str::to_owned);
        }

        fn fit_viewport(&mut self, viewport: Vec2) {
            self.rect = frame_rect(&self.config, viewport);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::IframeSurface;

#[cfg(target_arch = "wasm32")]
mod web {
    use eframe::wasm_bindgen::JsCast as _;
    use web_sys::HtmlIFrameElement;

    use super::*;

    const FRAME_ID: &str = "contentFrame";

    /// The host page's `<iframe id="contentFrame">`.
    pub struct IframeSurface {
        config: SurfaceConfig,
        frame: HtmlIFrameElement,
    }

    impl IframeSurface {
        /// `None` when the page has no such iframe.
        pub fn attach(config: SurfaceConfig) -> Option<Self> {
            let frame = web_sys::window()?
                .document()?
                .get_element_by_id(FRAME_ID)?
                .dyn_into::<HtmlIFrameElement>()
                .ok()?;
            let mut surface = Self { config, frame };
            surface.set_visible(false);
            Some(surface)
        }

        /// The iframe is part of the page; nothing to draw through egui.
        pub fn show(&self, _ctx: &egui::Context) {}

        fn set_style(&self, property: &str, value: &str) {
            if let Err(err) = self.frame.style().set_property(property, value) {
                log::warn!("failed to set {FRAME_ID} {property}: {err:?}");
            }
        }
    }

    impl ContentSurface for IframeSurface {
        fn set_visible(&mut self, visible: bool) {
            self.set_style("display", if visible { "block" } else { "none" });
        }

        fn set_source(&mut self, source: Option<&str>) {
            self.frame.set_src(source.unwrap_or(""));
        }

        fn fit_viewport(&mut self, viewport: Vec2) {
            let rect = frame_rect(&self.config, viewport);
            self.set_style("left", &format!("{}px", rect.left()));
            self.set_style("top", &format!("{}px", rect.top()));
            self.set_style("width", &format!("{}px", rect.width()));
            self.set_style("height", &format!("{}px", rect.height()));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_keeps_centered_frame() {
        let rect = frame_rect(&SurfaceConfig::default(), Vec2::new(2000.0, 1000.0));
        assert_eq!(rect, Rect::from_min_size(Pos2::new(200.0, 100.0), Vec2::new(1600.0, 800.0)));
    }

    #[test]
    fn narrow_viewport_leaves_menu_strip_clear() {
        let config = SurfaceConfig::default();

        // centered, the left edge would sit at 80 and cover the menu buttons
        let rect = frame_rect(&config, Vec2::new(800.0, 600.0));
        assert_eq!(rect.left(), config.reserved_left);
        assert_eq!(rect.right(), 720.0);
        assert_eq!((rect.top(), rect.bottom()), (60.0, 540.0));

        // nothing left of the strip to show
        let rect = frame_rect(&config, Vec2::new(200.0, 240.0));
        assert!(rect.left() >= config.reserved_left);
        assert_eq!(rect.width(), 0.0);
    }

    #[test]
    fn window_follows_viewport() {
        let mut surface = WindowSurface::attach(SurfaceConfig::default()).unwrap();
        surface.fit_viewport(Vec2::new(1000.0, 500.0));
        assert_eq!(
            surface.rect(),
            Rect::from_min_max(Pos2::new(180.0, 50.0), Pos2::new(900.0, 450.0))
        );
    }

    #[test]
    fn window_tracks_source() {
        let mut surface = WindowSurface::attach(SurfaceConfig::default()).unwrap();
        assert!(!surface.is_visible());

        surface.set_source(Some("https://example.org/"));
        surface.set_visible(true);
        assert_eq!(surface.source(), Some("https://example.org/"));

        surface.set_visible(false);
        surface.set_source(None);
        assert_eq!(surface.source(), None);
    }
}
