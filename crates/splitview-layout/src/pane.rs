// ABOUTME: Pane model for the four-column split view.
// ABOUTME: Stores fractional widths, the nav/dock sub-split and visibility flags.

use serde::Serialize;
use splitview_core::{LayoutConfig, DIVIDER_BORDERS};

use crate::geometry::{to_fraction, to_pixels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Like [`Viewport::new`] but rejects zero dimensions
    pub fn try_new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Horizontal panes, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pane {
    Left,
    Nav,
    Edit,
    Right,
}

impl Pane {
    pub const ALL: [Pane; 4] = [Pane::Left, Pane::Nav, Pane::Edit, Pane::Right];

    fn index(self) -> usize {
        match self {
            Pane::Left => 0,
            Pane::Nav => 1,
            Pane::Edit => 2,
            Pane::Right => 3,
        }
    }
}

/// Vertical split inside the nav pane: nav content above, dock strip below
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavSubSplit {
    pub nav_fraction: f64,
    pub dock_fraction: f64,
    pub dock_hidden: bool,
}

/// Pixel sizes the engine enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub min_width: i64,
    pub min_height: i64,
    pub separator_width: i64,
}

impl From<&LayoutConfig> for Metrics {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            min_width: config.min_width as i64,
            min_height: config.min_height as i64,
            separator_width: config.separator_width as i64,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct PaneModel {
    viewport: Viewport,
    metrics: Metrics,
    /// Fractions of the viewport width, indexed by [`Pane`]
    widths: [f64; 4],
    left_hidden: bool,
    right_hidden: bool,
    nav_split: NavSubSplit,
}

impl PaneModel {
    pub fn new(viewport: Viewport, config: &LayoutConfig) -> Self {
        Self {
            viewport,
            metrics: Metrics::from(config),
            widths: [0.3333, 0.3333, 0.3333, 0.0],
            left_hidden: false,
            right_hidden: false,
            nav_split: NavSubSplit {
                nav_fraction: clamp_fraction(config.nav_fraction),
                dock_fraction: clamp_fraction(config.dock_fraction),
                dock_hidden: config.dock_hidden,
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn width_fraction(&self, pane: Pane) -> f64 {
        self.widths[pane.index()]
    }

    /// Store a width fraction, clamped into `[0, 1]`
    pub fn set_width_fraction(&mut self, pane: Pane, fraction: f64) {
        self.widths[pane.index()] = clamp_fraction(fraction);
    }

    pub fn is_hidden(&self, pane: Pane) -> bool {
        match pane {
            Pane::Left => self.left_hidden,
            Pane::Right => self.right_hidden,
            Pane::Nav | Pane::Edit => false,
        }
    }

    pub fn left_hidden(&self) -> bool {
        self.left_hidden
    }

    pub fn right_hidden(&self) -> bool {
        self.right_hidden
    }

    pub(crate) fn set_side_visibility(&mut self, left_hidden: bool, right_hidden: bool) {
        self.left_hidden = left_hidden;
        self.right_hidden = right_hidden;
    }

    pub fn nav_split(&self) -> NavSubSplit {
        self.nav_split
    }

    pub fn set_nav_fraction(&mut self, fraction: f64) {
        self.nav_split.nav_fraction = clamp_fraction(fraction);
    }

    pub fn set_dock_fraction(&mut self, fraction: f64) {
        self.nav_split.dock_fraction = clamp_fraction(fraction);
    }

    pub fn set_dock_hidden(&mut self, hidden: bool) {
        self.nav_split.dock_hidden = hidden;
    }

    /// Dividers currently taking up horizontal space
    pub fn active_separator_count(&self) -> i64 {
        1 + i64::from(!self.left_hidden) + i64::from(!self.right_hidden)
    }

    /// Viewport width left for panes once active separators are removed.
    /// Goes negative when the separators alone overflow the viewport.
    pub fn effective_split_width(&self) -> i64 {
        self.split_width_for(self.left_hidden, self.right_hidden)
    }

    pub(crate) fn split_width_for(&self, left_hidden: bool, right_hidden: bool) -> i64 {
        let separators = 1 + i64::from(!left_hidden) + i64::from(!right_hidden);
        self.viewport.width as i64 - separators * self.metrics.separator_width
    }

    /// Viewport height left once the pane-divider borders are removed
    pub fn effective_split_height(&self) -> i64 {
        self.viewport.height as i64 - DIVIDER_BORDERS as i64
    }

    /// Rendered pixel width of a pane; zero when hidden
    pub fn pane_width(&self, pane: Pane) -> i64 {
        if self.is_hidden(pane) || self.effective_split_width() <= 0 {
            return 0;
        }
        to_pixels(self.width_fraction(pane), self.viewport.width as i64)
    }

    pub fn nav_content_height(&self) -> i64 {
        to_pixels(self.nav_split.nav_fraction, self.effective_split_height())
    }

    pub fn dock_height(&self) -> i64 {
        if self.nav_split.dock_hidden {
            return 0;
        }
        to_pixels(self.nav_split.dock_fraction, self.effective_split_height())
    }

    /// Store a pixel width back as a viewport fraction
    pub(crate) fn set_width_pixels(&mut self, pane: Pane, pixels: i64) {
        let fraction = to_fraction(pixels, self.viewport.width as i64);
        self.set_width_fraction(pane, fraction);
    }
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
