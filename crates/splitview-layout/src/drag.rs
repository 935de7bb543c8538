// ABOUTME: Divider drag state machine and the two-pane resize step.
// ABOUTME: Turns pointer displacement into paired size changes with minimum-size clamping.

use serde::Serialize;

use crate::geometry::{clamp_pair, floor_pixels, to_fraction, Point};
use crate::pane::{Pane, PaneModel};

/// Axis a divider resizes along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    /// Moves along X, resizing widths
    Horizontal,
    /// Moves along Y, resizing heights
    Vertical,
}

impl Axis {
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DividerId {
    LeftNav,
    NavEdit,
    EditRight,
    /// Between the nav content and the dock strip
    NavDock,
}

impl DividerId {
    pub const ALL: [DividerId; 4] = [
        DividerId::LeftNav,
        DividerId::NavEdit,
        DividerId::EditRight,
        DividerId::NavDock,
    ];

    pub fn axis(self) -> Axis {
        match self {
            DividerId::NavDock => Axis::Vertical,
            _ => Axis::Horizontal,
        }
    }

    /// Whether the divider currently accepts pointer input
    pub fn is_interactive(self, model: &PaneModel) -> bool {
        match self {
            DividerId::LeftNav => !model.left_hidden(),
            DividerId::NavEdit => true,
            DividerId::EditRight => !model.right_hidden(),
            DividerId::NavDock => !model.nav_split().dock_hidden,
        }
    }

    fn index(self) -> usize {
        match self {
            DividerId::LeftNav => 0,
            DividerId::NavEdit => 1,
            DividerId::EditRight => 2,
            DividerId::NavDock => 3,
        }
    }
}

/// Result of one resize step, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeStep {
    pub a: i64,
    pub b: i64,
    pub combined: i64,
}

/// Resize two adjacent panes by the pointer displacement since `anchor`.
///
/// `combined` is fixed for the step, so `a + b == combined` on return.
/// Returns `None` when the base is degenerate or the pointer is not finite.
pub fn resize_pair(
    fraction_a: f64,
    fraction_b: f64,
    base: i64,
    position: f64,
    anchor: f64,
    min_size: i64,
) -> Option<ResizeStep> {
    if base <= 0 || !position.is_finite() || !anchor.is_finite() {
        return None;
    }
    let base = base as f64;
    let combined = floor_pixels(fraction_a * base + fraction_b * base);
    let new_a = floor_pixels(fraction_a * base + (position - anchor));
    let new_b = combined - new_a;

    let (a, b) = clamp_pair(new_a, new_b, combined, min_size);
    Some(ResizeStep { a, b, combined })
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    /// `anchor` is the last pointer coordinate seen on the divider's axis
    Dragging { anchor: f64 },
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }
}

/// One drag session per divider. Sessions are independent; a single pointer
/// normally keeps at most one of them active.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    sessions: [DragSession; 4],
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, divider: DividerId) -> DragSession {
        self.sessions[divider.index()]
    }

    pub fn is_dragging(&self) -> bool {
        self.sessions.iter().any(DragSession::is_active)
    }

    /// Start dragging `divider`, anchored at the pointer
    pub fn begin(&mut self, divider: DividerId, at: Point) {
        let anchor = divider.axis().coordinate(at);
        self.sessions[divider.index()] = DragSession::Dragging { anchor };
        tracing::debug!(?divider, anchor, "Divider drag started");
    }

    /// Feed a pointer position to every active session. Returns whether any
    /// pane size changed.
    pub fn drag_to(&mut self, model: &mut PaneModel, at: Point) -> bool {
        let mut changed = false;
        for divider in DividerId::ALL {
            let DragSession::Dragging { anchor } = self.sessions[divider.index()] else {
                continue;
            };
            let position = divider.axis().coordinate(at);
            if apply_step(model, divider, position, anchor) {
                // Anchor follows the raw pointer even when the step was clamped
                self.sessions[divider.index()] = DragSession::Dragging { anchor: position };
                changed = true;
            }
        }
        changed
    }

    /// Return every session to idle. Returns how many were active.
    pub fn release_all(&mut self) -> usize {
        let released = self.sessions.iter().filter(|s| s.is_active()).count();
        self.sessions = [DragSession::Idle; 4];
        if released > 0 {
            tracing::debug!(released, "Divider drag ended");
        }
        released
    }
}

fn apply_step(model: &mut PaneModel, divider: DividerId, position: f64, anchor: f64) -> bool {
    let metrics = model.metrics();
    match divider {
        DividerId::LeftNav | DividerId::NavEdit | DividerId::EditRight => {
            let (pane_a, pane_b) = match divider {
                DividerId::LeftNav => (Pane::Left, Pane::Nav),
                DividerId::NavEdit => (Pane::Nav, Pane::Edit),
                _ => (Pane::Edit, Pane::Right),
            };
            if model.is_hidden(pane_a) || model.is_hidden(pane_b) {
                tracing::trace!(?divider, "Skipping drag over a hidden pane");
                return false;
            }
            let fraction_a = model.width_fraction(pane_a);
            let fraction_b = model.width_fraction(pane_b);
            let base = model.viewport().width as i64;
            let Some(step) = resize_pair(
                fraction_a,
                fraction_b,
                base,
                position,
                anchor,
                metrics.min_width,
            ) else {
                return false;
            };
            model.set_width_pixels(pane_a, step.a);
            model.set_width_pixels(pane_b, step.b);
            tracing::trace!(?divider, a = step.a, b = step.b, "Resized panes");
            true
        }
        DividerId::NavDock => {
            let split = model.nav_split();
            if split.dock_hidden {
                return false;
            }
            let base = model.effective_split_height();
            let Some(step) = resize_pair(
                split.nav_fraction,
                split.dock_fraction,
                base,
                position,
                anchor,
                metrics.min_height,
            ) else {
                return false;
            };
            model.set_nav_fraction(to_fraction(step.a, base));
            model.set_dock_fraction(to_fraction(step.b, base));
            tracing::trace!(nav = step.a, dock = step.b, "Resized nav sub-split");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Viewport;
    use crate::reconcile::{apply_preset, Visibility};
    use splitview_core::LayoutConfig;

    fn all_open(width: u32, height: u32) -> PaneModel {
        let mut model = PaneModel::new(Viewport::new(width, height), &LayoutConfig::default());
        apply_preset(&mut model, Visibility::new(false, false));
        model
    }

    fn pixel_width(model: &PaneModel, pane: Pane) -> i64 {
        (model.width_fraction(pane) * model.viewport().width as f64).round() as i64
    }

    #[test]
    fn resize_pair_tracks_pointer() {
        let step = resize_pair(0.3, 0.3, 1000, 550.0, 500.0, 150).unwrap();
        assert_eq!(step, ResizeStep { a: 350, b: 250, combined: 600 });
    }

    #[test]
    fn resize_pair_conserves_combined_width() {
        for delta in [-400.0, -37.5, 0.0, 12.25, 199.0, 800.0] {
            let step = resize_pair(0.24625, 0.24625, 1000, 500.0 + delta, 500.0, 150).unwrap();
            assert_eq!(step.a + step.b, step.combined);
            assert!(step.a >= 150 && step.b >= 150);
        }
    }

    #[test]
    fn resize_pair_rejects_degenerate_input() {
        assert!(resize_pair(0.5, 0.5, 0, 10.0, 0.0, 150).is_none());
        assert!(resize_pair(0.5, 0.5, 1000, f64::NAN, 0.0, 150).is_none());
    }

    #[test]
    fn begin_records_axis_coordinate() {
        let mut drag = DragController::new();
        drag.begin(DividerId::NavEdit, Point::new(400.0, 90.0));
        drag.begin(DividerId::NavDock, Point::new(400.0, 90.0));
        assert_eq!(drag.session(DividerId::NavEdit), DragSession::Dragging { anchor: 400.0 });
        assert_eq!(drag.session(DividerId::NavDock), DragSession::Dragging { anchor: 90.0 });
    }

    #[test]
    fn move_without_session_is_a_no_op() {
        let mut model = all_open(1000, 800);
        let before = model.clone();
        let mut drag = DragController::new();
        assert!(!drag.drag_to(&mut model, Point::new(700.0, 300.0)));
        for pane in Pane::ALL {
            assert_eq!(model.width_fraction(pane), before.width_fraction(pane));
        }
    }

    #[test]
    fn steps_are_incremental() {
        let mut model = all_open(1000, 800);
        model.set_width_fraction(Pane::Nav, 0.4);
        model.set_width_fraction(Pane::Edit, 0.4);
        let mut drag = DragController::new();
        drag.begin(DividerId::NavEdit, Point::new(500.0, 0.0));

        drag.drag_to(&mut model, Point::new(520.0, 0.0));
        drag.drag_to(&mut model, Point::new(540.0, 0.0));

        assert_eq!(pixel_width(&model, Pane::Nav), 440);
        assert_eq!(pixel_width(&model, Pane::Edit), 360);
        assert_eq!(drag.session(DividerId::NavEdit), DragSession::Dragging { anchor: 540.0 });
    }

    #[test]
    fn clamped_drag_sticks_at_minimum_and_keeps_raw_anchor() {
        let mut model = all_open(1000, 800);
        model.set_width_fraction(Pane::Nav, 0.3);
        model.set_width_fraction(Pane::Edit, 0.3);
        let mut drag = DragController::new();
        drag.begin(DividerId::NavEdit, Point::new(500.0, 0.0));

        drag.drag_to(&mut model, Point::new(900.0, 0.0));
        assert_eq!(pixel_width(&model, Pane::Nav), 450);
        assert_eq!(pixel_width(&model, Pane::Edit), 150);
        assert_eq!(drag.session(DividerId::NavEdit), DragSession::Dragging { anchor: 900.0 });

        // Moving back from the raw pointer position resizes immediately
        drag.drag_to(&mut model, Point::new(850.0, 0.0));
        assert_eq!(pixel_width(&model, Pane::Nav), 400);
        assert_eq!(pixel_width(&model, Pane::Edit), 200);
    }

    #[test]
    fn vertical_divider_resizes_dock() {
        let mut model = all_open(1000, 802);
        let mut drag = DragController::new();
        drag.begin(DividerId::NavDock, Point::new(300.0, 760.0));

        assert!(drag.drag_to(&mut model, Point::new(300.0, 700.0)));
        let split = model.nav_split();
        // base is 800: nav starts at 760, dock at 40
        assert_eq!((split.nav_fraction * 800.0).round() as i64, 700);
        assert_eq!((split.dock_fraction * 800.0).round() as i64, 100);
    }

    #[test]
    fn vertical_divider_respects_min_height() {
        let mut model = all_open(1000, 802);
        let mut drag = DragController::new();
        drag.begin(DividerId::NavDock, Point::new(0.0, 760.0));
        drag.drag_to(&mut model, Point::new(0.0, 790.0));

        let split = model.nav_split();
        assert_eq!((split.nav_fraction * 800.0).round() as i64, 750);
        assert_eq!((split.dock_fraction * 800.0).round() as i64, 50);
    }

    #[test]
    fn hidden_pane_blocks_drag() {
        let mut model = PaneModel::new(Viewport::new(1000, 800), &LayoutConfig::default());
        apply_preset(&mut model, Visibility::new(false, true));
        let mut drag = DragController::new();
        drag.begin(DividerId::EditRight, Point::new(700.0, 0.0));

        assert!(!drag.drag_to(&mut model, Point::new(600.0, 0.0)));
        assert_eq!(model.width_fraction(Pane::Right), 0.0);
    }

    #[test]
    fn shrunken_viewport_keeps_pair_inside_its_budget() {
        let mut model = all_open(1000, 800);
        model.set_viewport(Viewport::new(300, 800));
        let before = model.pane_width(Pane::Left) + model.pane_width(Pane::Nav);
        assert_eq!(before, 146);

        let mut drag = DragController::new();
        drag.begin(DividerId::LeftNav, Point::new(80.0, 0.0));
        assert!(drag.drag_to(&mut model, Point::new(70.0, 0.0)));

        let left = model.pane_width(Pane::Left);
        let nav = model.pane_width(Pane::Nav);
        assert_eq!(left + nav, 147);
        assert!((left + nav - before).abs() <= 1);
        assert!(left >= 73 && nav >= 73);
        assert!(model.width_fraction(Pane::Nav) > 0.0);
    }

    #[test]
    fn release_all_clears_every_session() {
        let mut drag = DragController::new();
        drag.begin(DividerId::LeftNav, Point::new(1.0, 1.0));
        drag.begin(DividerId::NavDock, Point::new(1.0, 1.0));
        assert!(drag.is_dragging());

        assert_eq!(drag.release_all(), 2);
        assert!(!drag.is_dragging());
        assert_eq!(drag.release_all(), 0);
    }

    #[test]
    fn interactivity_follows_visibility() {
        let mut model = PaneModel::new(Viewport::new(1000, 800), &LayoutConfig::default());
        apply_preset(&mut model, Visibility::new(true, true));
        assert!(!DividerId::LeftNav.is_interactive(&model));
        assert!(DividerId::NavEdit.is_interactive(&model));
        assert!(!DividerId::EditRight.is_interactive(&model));
        assert!(DividerId::NavDock.is_interactive(&model));

        model.set_dock_hidden(true);
        assert!(!DividerId::NavDock.is_interactive(&model));
    }
}
