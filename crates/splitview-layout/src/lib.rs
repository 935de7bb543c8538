// ABOUTME: Split-view layout engine for a four-pane editor shell.
// ABOUTME: Resizable left/nav/editor/right columns with a nav/dock sub-split.

pub mod compose;
pub mod drag;
pub mod engine;
pub mod geometry;
pub mod listeners;
pub mod pane;
pub mod reconcile;

pub use compose::{ComposedLayout, LayoutNode, Renderable, Slot, Slots};
pub use drag::{Axis, DividerId, DragSession};
pub use engine::{InputEvent, SplitView};
pub use geometry::{Point, Rect};
pub use pane::{LayoutError, Pane, Viewport};
pub use reconcile::Visibility;
