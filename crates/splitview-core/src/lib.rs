// ABOUTME: Shared constants and configuration for splitview.
// ABOUTME: Defines the pane size contract and config file handling.

pub mod config;

pub use config::{Config, ConfigError, LayoutConfig};

/// Smallest width a horizontal pane may be dragged to, in pixels
pub const MIN_WIDTH: u32 = 150;

/// Smallest height a nav sub-pane may be dragged to, in pixels
pub const MIN_HEIGHT: u32 = 50;

/// Width of a divider including its interactive hitbox, in pixels
pub const SEPARATOR_WIDTH: u32 = 5;

/// Vertical space taken by the two 1px pane-divider borders
pub const DIVIDER_BORDERS: u32 = 2;
