// ABOUTME: Render composer turning the pane model into positioned boxes.
// ABOUTME: Emits pane boxes and divider hit-regions, and paints opaque slot content.

use serde::Serialize;
use splitview_core::DIVIDER_BORDERS;

use crate::drag::DividerId;
use crate::geometry::{Point, Rect};
use crate::pane::{Pane, PaneModel, Viewport};

/// Content slot a pane box hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Left,
    Nav,
    Editor,
    Right,
    Dock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    /// Hidden panes stay in the tree with a zero-size rect
    Pane { slot: Slot, rect: Rect, hidden: bool },
    Divider {
        id: DividerId,
        hit_region: Rect,
        /// Thin visual rule centred in the hit-region
        rule: Rect,
        interactive: bool,
    },
    Column { rect: Rect, children: Vec<LayoutNode> },
}

/// Box tree for one frame, laid out left to right
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedLayout {
    pub viewport: Viewport,
    pub row: Vec<LayoutNode>,
}

/// Pane content the engine positions but never inspects
pub trait Renderable {
    fn render(&mut self, area: Rect);
}

pub struct Slots<'a> {
    pub left: &'a mut dyn Renderable,
    pub nav: &'a mut dyn Renderable,
    pub editor: &'a mut dyn Renderable,
    pub right: &'a mut dyn Renderable,
    pub dock: Option<&'a mut dyn Renderable>,
}

impl<'a> Slots<'a> {
    fn get_mut(&mut self, slot: Slot) -> Option<&mut (dyn Renderable + 'a)> {
        match slot {
            Slot::Left => Some(&mut *self.left),
            Slot::Nav => Some(&mut *self.nav),
            Slot::Editor => Some(&mut *self.editor),
            Slot::Right => Some(&mut *self.right),
            Slot::Dock => self.dock.as_deref_mut(),
        }
    }
}

pub fn compose(model: &PaneModel) -> ComposedLayout {
    let viewport = model.viewport();
    let height = viewport.height as i64;
    let separator = model.metrics().separator_width;
    let mut row = Vec::with_capacity(7);
    let mut x = 0;

    let left_hidden = model.left_hidden();
    let right_hidden = model.right_hidden();

    x = push_pane(&mut row, Slot::Left, x, model.pane_width(Pane::Left), height, left_hidden);
    x = push_divider(&mut row, DividerId::LeftNav, x, separator, height, !left_hidden);

    let nav_width = model.pane_width(Pane::Nav);
    row.push(nav_column(model, x, nav_width, height));
    x += nav_width;

    x = push_divider(&mut row, DividerId::NavEdit, x, separator, height, true);
    x = push_pane(&mut row, Slot::Editor, x, model.pane_width(Pane::Edit), height, false);
    x = push_divider(&mut row, DividerId::EditRight, x, separator, height, !right_hidden);
    push_pane(&mut row, Slot::Right, x, model.pane_width(Pane::Right), height, right_hidden);

    ComposedLayout { viewport, row }
}

fn push_pane(
    row: &mut Vec<LayoutNode>,
    slot: Slot,
    x: i64,
    width: i64,
    height: i64,
    hidden: bool,
) -> i64 {
    let rect = if hidden {
        Rect::new(x, 0, 0, 0)
    } else {
        Rect::new(x, 0, width, height.max(0))
    };
    row.push(LayoutNode::Pane { slot, rect, hidden });
    x + rect.width
}

fn push_divider(
    row: &mut Vec<LayoutNode>,
    id: DividerId,
    x: i64,
    separator: i64,
    height: i64,
    shown: bool,
) -> i64 {
    let width = if shown { separator } else { 0 };
    let hit_region = Rect::new(x, 0, width, height.max(0));
    let rule = if shown {
        Rect::new(x + separator / 2, 0, 1, height.max(0))
    } else {
        Rect::new(x, 0, 0, 0)
    };
    row.push(LayoutNode::Divider {
        id,
        hit_region,
        rule,
        interactive: shown,
    });
    x + width
}

fn nav_column(model: &PaneModel, x: i64, width: i64, height: i64) -> LayoutNode {
    let dock_hidden = model.nav_split().dock_hidden;
    let nav_height = model.nav_content_height();
    let divider_height = if dock_hidden || model.effective_split_height() <= 0 {
        0
    } else {
        DIVIDER_BORDERS as i64
    };
    let dock_height = model.dock_height();

    let nav = LayoutNode::Pane {
        slot: Slot::Nav,
        rect: Rect::new(x, 0, width, nav_height),
        hidden: false,
    };
    let hit_region = Rect::new(x, nav_height, width, divider_height);
    let rule = Rect::new(x, nav_height + divider_height / 2, width, divider_height.min(1));
    let divider = LayoutNode::Divider {
        id: DividerId::NavDock,
        hit_region,
        rule,
        interactive: !dock_hidden,
    };
    let dock_rect = if dock_hidden {
        Rect::new(x, nav_height, 0, 0)
    } else {
        Rect::new(x, nav_height + divider_height, width, dock_height)
    };
    let dock = LayoutNode::Pane {
        slot: Slot::Dock,
        rect: dock_rect,
        hidden: dock_hidden,
    };

    LayoutNode::Column {
        rect: Rect::new(x, 0, width, height.max(0)),
        children: vec![nav, divider, dock],
    }
}

impl ComposedLayout {
    /// Rect of a slot's box, zero-sized when hidden
    pub fn slot_rect(&self, slot: Slot) -> Option<Rect> {
        let mut found = None;
        walk(&self.row, &mut |node| {
            if let LayoutNode::Pane { slot: s, rect, .. } = node {
                if *s == slot {
                    found = Some(*rect);
                }
            }
        });
        found
    }

    /// Hit-region and interactivity of a divider
    pub fn divider(&self, id: DividerId) -> Option<(Rect, bool)> {
        let mut found = None;
        walk(&self.row, &mut |node| {
            if let LayoutNode::Divider {
                id: d,
                hit_region,
                interactive,
                ..
            } = node
            {
                if *d == id {
                    found = Some((*hit_region, *interactive));
                }
            }
        });
        found
    }

    /// Interactive divider whose hit-region contains `point`
    pub fn divider_at(&self, point: Point) -> Option<DividerId> {
        let mut found = None;
        walk(&self.row, &mut |node| {
            if let LayoutNode::Divider {
                id,
                hit_region,
                interactive: true,
                ..
            } = node
            {
                if found.is_none() && hit_region.contains(point) {
                    found = Some(*id);
                }
            }
        });
        found
    }

    /// Hand every visible, non-empty pane box to its slot content
    pub fn paint(&self, slots: &mut Slots<'_>) {
        walk(&self.row, &mut |node| {
            if let LayoutNode::Pane {
                slot,
                rect,
                hidden: false,
            } = node
            {
                if rect.is_empty() {
                    return;
                }
                if let Some(content) = slots.get_mut(*slot) {
                    content.render(*rect);
                }
            }
        });
    }
}

fn walk<'n>(nodes: &'n [LayoutNode], visit: &mut impl FnMut(&'n LayoutNode)) {
    for node in nodes {
        visit(node);
        if let LayoutNode::Column { children, .. } = node {
            walk(children, visit);
        }
    }
}
