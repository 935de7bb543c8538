// ABOUTME: Split view engine owning pane state for one mount.
// ABOUTME: Routes host input to the reconciler and drag controller, and composes frames.

use splitview_core::{Config, LayoutConfig};

use crate::compose::{compose, ComposedLayout};
use crate::drag::{DividerId, DragController, DragSession};
use crate::geometry::Point;
use crate::listeners::DocumentListeners;
use crate::pane::{PaneModel, Viewport};
use crate::reconcile::{self, Visibility};

/// Input translated by the host. Down/start events come from a divider's
/// hit-region; move/up/end events are document-wide.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { divider: DividerId, at: Point },
    TouchStart { divider: DividerId, touches: Vec<Point> },
    PointerMove { at: Point },
    TouchMove { touches: Vec<Point> },
    PointerUp,
    TouchEnd,
}

#[derive(Debug)]
pub struct SplitView {
    model: PaneModel,
    drag: DragController,
    listeners: DocumentListeners,
    visibility: Visibility,
}

impl SplitView {
    /// Create an inactive engine laid out with the preset for `visibility`
    pub fn new(viewport: Viewport, visibility: Visibility, config: &LayoutConfig) -> Self {
        let mut model = PaneModel::new(viewport, config);
        reconcile::apply_preset(&mut model, visibility);
        Self {
            model,
            drag: DragController::new(),
            listeners: DocumentListeners::new(),
            visibility,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Viewport::new(config.window_width, config.window_height),
            Visibility::new(config.hide_left, config.hide_right),
            &config.layout,
        )
    }

    /// Attach the document-level listeners. Returns `false` if already active.
    pub fn activate(&mut self) -> bool {
        self.listeners.attach()
    }

    /// Detach the document-level listeners and drop any drag in flight.
    /// Safe to call repeatedly.
    pub fn deactivate(&mut self) -> bool {
        self.drag.release_all();
        self.listeners.detach()
    }

    pub fn is_active(&self) -> bool {
        self.listeners.is_attached()
    }

    pub fn model(&self) -> &PaneModel {
        &self.model
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_session(&self, divider: DividerId) -> DragSession {
        self.drag.session(divider)
    }

    /// Resync the viewport. Fractions are kept, so pixel sizes rescale.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.model.viewport() == viewport {
            return false;
        }
        if viewport.width == 0 || viewport.height == 0 {
            tracing::warn!(
                width = viewport.width,
                height = viewport.height,
                "Degenerate viewport, panes will collapse"
            );
        }
        self.model.set_viewport(viewport);
        tracing::debug!(width = viewport.width, height = viewport.height, "Viewport resized");
        true
    }

    /// Visibility transition driven by the host's state change
    pub fn on_visibility_changed(&mut self, prev: Visibility, next: Visibility) -> bool {
        let changed = reconcile::on_visibility_changed(&mut self.model, prev, next);
        self.visibility = next;
        changed
    }

    /// Apply a requested visibility against the last applied one
    pub fn set_visibility(&mut self, next: Visibility) -> bool {
        self.on_visibility_changed(self.visibility, next)
    }

    pub fn set_dock_hidden(&mut self, hidden: bool) -> bool {
        if self.model.nav_split().dock_hidden == hidden {
            return false;
        }
        self.model.set_dock_hidden(hidden);
        tracing::debug!(hidden, "Dock visibility changed");
        true
    }

    /// Feed one input event. Returns whether pane geometry changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        if !self.listeners.is_attached() {
            tracing::trace!(?event, "Engine inactive, ignoring input");
            return false;
        }
        match event {
            InputEvent::PointerDown { divider, at } => {
                self.begin_drag(*divider, *at);
                false
            }
            InputEvent::TouchStart { divider, touches } => {
                if let Some(at) = touches.first() {
                    self.begin_drag(*divider, *at);
                }
                false
            }
            InputEvent::PointerMove { at } => self.drag.drag_to(&mut self.model, *at),
            InputEvent::TouchMove { touches } => match touches.first() {
                Some(at) => self.drag.drag_to(&mut self.model, *at),
                None => false,
            },
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                self.drag.release_all();
                false
            }
        }
    }

    fn begin_drag(&mut self, divider: DividerId, at: Point) {
        if !divider.is_interactive(&self.model) {
            tracing::trace!(?divider, "Divider is inert, ignoring press");
            return;
        }
        self.drag.begin(divider, at);
    }

    pub fn compose(&self) -> ComposedLayout {
        compose(&self.model)
    }
}

impl Drop for SplitView {
    fn drop(&mut self) {
        self.listeners.detach();
    }
}
