// ABOUTME: Visibility reconciler for the side panes.
// ABOUTME: Replaces all widths with a preset row when left/right visibility changes.

use serde::Serialize;

use crate::pane::{Pane, PaneModel};

const THIRD: f64 = 0.33333;

/// Host-requested visibility of the optional side panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Visibility {
    pub hide_left: bool,
    pub hide_right: bool,
}

impl Visibility {
    pub const fn new(hide_left: bool, hide_right: bool) -> Self {
        Self {
            hide_left,
            hide_right,
        }
    }
}

/// Pane shares of the effective split width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub left: f64,
    pub nav: f64,
    pub edit: f64,
    pub right: f64,
}

impl Preset {
    pub fn share(&self, pane: Pane) -> f64 {
        match pane {
            Pane::Left => self.left,
            Pane::Nav => self.nav,
            Pane::Edit => self.edit,
            Pane::Right => self.right,
        }
    }
}

pub fn preset_for(visibility: Visibility) -> Preset {
    match (visibility.hide_left, visibility.hide_right) {
        (true, true) => Preset {
            left: 0.0,
            nav: 0.5,
            edit: 0.5,
            right: 0.0,
        },
        (false, true) => Preset {
            left: THIRD,
            nav: THIRD,
            edit: THIRD,
            right: 0.0,
        },
        (true, false) => Preset {
            left: 0.0,
            nav: THIRD,
            edit: THIRD,
            right: THIRD,
        },
        (false, false) => Preset {
            left: 0.25,
            nav: 0.25,
            edit: 0.25,
            right: 0.25,
        },
    }
}

/// Apply the preset row for `visibility` regardless of the current state.
///
/// Shares are taken of the split width under the new visibility, then stored
/// as fractions of the full viewport width.
pub fn apply_preset(model: &mut PaneModel, visibility: Visibility) {
    let split_width = model
        .split_width_for(visibility.hide_left, visibility.hide_right)
        .max(0) as f64;
    let viewport_width = model.viewport().width as f64;
    let preset = preset_for(visibility);

    model.set_side_visibility(visibility.hide_left, visibility.hide_right);
    for pane in Pane::ALL {
        let fraction = if viewport_width > 0.0 {
            split_width * preset.share(pane) / viewport_width
        } else {
            0.0
        };
        model.set_width_fraction(pane, fraction);
    }

    tracing::debug!(
        hide_left = visibility.hide_left,
        hide_right = visibility.hide_right,
        split_width,
        "Applied pane preset"
    );
}

/// Transition handler: re-derives the layout only when visibility actually changed.
/// Returns whether the model was touched.
pub fn on_visibility_changed(model: &mut PaneModel, prev: Visibility, next: Visibility) -> bool {
    if prev == next {
        tracing::trace!("Visibility unchanged, keeping widths");
        return false;
    }
    apply_preset(model, next);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Viewport;
    use splitview_core::LayoutConfig;

    fn model(width: u32) -> PaneModel {
        PaneModel::new(Viewport::new(width, 800), &LayoutConfig::default())
    }

    fn fractions(model: &PaneModel) -> [f64; 4] {
        Pane::ALL.map(|pane| model.width_fraction(pane))
    }

    #[test]
    fn preset_table_rows() {
        assert_eq!(preset_for(Visibility::new(true, true)).nav, 0.5);
        assert_eq!(preset_for(Visibility::new(false, true)).right, 0.0);
        assert_eq!(preset_for(Visibility::new(true, false)).left, 0.0);
        assert_eq!(preset_for(Visibility::new(false, false)).edit, 0.25);
    }

    #[test]
    fn opening_left_uses_reduced_split_width() {
        let mut m = model(1200);
        let closed = Visibility::new(true, true);
        apply_preset(&mut m, closed);

        let open_left = Visibility::new(false, true);
        assert!(on_visibility_changed(&mut m, closed, open_left));

        // two active separators: 1200 - 10
        let expected = 1190.0 * THIRD / 1200.0;
        assert!((m.width_fraction(Pane::Left) - expected).abs() < 1e-12);
        assert!((m.width_fraction(Pane::Nav) - expected).abs() < 1e-12);
        assert!((m.width_fraction(Pane::Edit) - expected).abs() < 1e-12);
        assert_eq!(m.width_fraction(Pane::Right), 0.0);
        assert!(!m.left_hidden());
        assert!(m.right_hidden());
    }

    #[test]
    fn reapplying_same_visibility_is_a_no_op() {
        let mut m = model(1200);
        let vis = Visibility::new(false, false);
        apply_preset(&mut m, vis);
        m.set_width_fraction(Pane::Nav, 0.4);
        let before = fractions(&m);

        assert!(!on_visibility_changed(&mut m, vis, vis));
        assert_eq!(fractions(&m), before);
    }

    #[test]
    fn preset_fits_inside_viewport() {
        for (hide_left, hide_right) in [(true, true), (false, true), (true, false), (false, false)] {
            let mut m = model(1000);
            apply_preset(&mut m, Visibility::new(hide_left, hide_right));
            let panes: i64 = Pane::ALL.iter().map(|p| m.pane_width(*p)).sum();
            let separators = m.active_separator_count() * m.metrics().separator_width;
            assert!(panes + separators <= 1000);
        }
    }

    #[test]
    fn degenerate_viewport_zeroes_widths() {
        let mut m = model(8);
        apply_preset(&mut m, Visibility::new(false, false));
        assert_eq!(fractions(&m), [0.0; 4]);

        let mut empty = model(0);
        apply_preset(&mut empty, Visibility::new(true, true));
        assert_eq!(fractions(&empty), [0.0; 4]);
    }
}
