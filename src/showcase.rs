//! Switching between the dot animation and externally hosted works.

use std::fmt;

use egui::{Color32, Vec2};

/// The three entries of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Work {
    First,
    Second,
    Third,
}

impl Work {
    pub const ALL: [Work; 3] = [Work::First, Work::Second, Work::Third];

    pub fn label(self) -> &'static str {
        match self {
            Work::First => "Work 1",
            Work::Second => "Work 2",
            Work::Third => "Work 3",
        }
    }

    fn index(self) -> usize {
        match self {
            Work::First => 0,
            Work::Second => 1,
            Work::Third => 2,
        }
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canvas colors used while a work is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkStyle {
    pub background: Color32,
    pub dot_color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkEntry {
    pub style: WorkStyle,
    /// External page shown instead of the animation. `None` means the animation itself.
    pub link: Option<&'static str>,
}

/// Fixed style and link table, one entry per [`Work`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: [WorkEntry; 3],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            entries: [
                WorkEntry {
                    style: WorkStyle {
                        background: Color32::from_gray(0),
                        dot_color: Color32::from_gray(255),
                    },
                    link: Some("https://zyeii06.github.io/20251014_4/"),
                },
                WorkEntry {
                    style: WorkStyle {
                        background: Color32::from_rgb(0, 50, 100),
                        dot_color: Color32::from_rgb(255, 200, 0),
                    },
                    link: Some("https://hackmd.io/@lcienz/BJBl5dyngg"),
                },
                WorkEntry {
                    style: WorkStyle {
                        background: Color32::from_gray(255),
                        dot_color: Color32::from_rgb(200, 0, 0),
                    },
                    link: None,
                },
            ],
        }
    }
}

impl StyleTable {
    pub fn entry(&self, work: Work) -> &WorkEntry {
        &self.entries[work.index()]
    }

    pub fn style(&self, work: Work) -> WorkStyle {
        self.entry(work).style
    }

    pub fn link(&self, work: Work) -> Option<&'static str> {
        self.entry(work).link
    }
}

/// Something that can show an external page over the canvas.
pub trait ContentSurface {
    fn set_visible(&mut self, visible: bool);

    /// `None` unloads the current page.
    fn set_source(&mut self, source: Option<&str>);

    /// Called with the new viewport size on startup and after every resize.
    fn fit_viewport(&mut self, _viewport: Vec2) {}
}

/// Which work is active and whether the animation is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    active: Work,
    animation_visible: bool,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            active: Work::Third,
            animation_visible: true,
        }
    }
}

impl Showcase {
    pub fn active(&self) -> Work {
        self.active
    }

    pub fn animation_visible(&self) -> bool {
        self.animation_visible
    }

    /// Makes `work` active and points `surface` at its link, or hides the surface when the
    /// work has none. Without a surface only the local state changes.
    pub fn select(
        &mut self,
        work: Work,
        styles: &StyleTable,
        surface: Option<&mut dyn ContentSurface>,
    ) {
        let link = styles.link(work);
        self.active = work;
        self.animation_visible = link.is_none();
        log::info!("switched to {work}");

        let Some(surface) = surface else {
            return;
        };
        match link {
            Some(url) => {
                surface.set_source(Some(url));
                surface.set_visible(true);
            }
            None => {
                surface.set_visible(false);
                surface.set_source(None);
            }
        }
    }
}
