// ABOUTME: Windowed host for the split-view layout engine.
// ABOUTME: Translates window, mouse and touch events into engine input and logs layouts.

use std::sync::Arc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use splitview_core::Config;
use splitview_layout::{InputEvent, Point, Rect, Renderable, SplitView, Slots, Viewport};

/// Stand-in pane content that reports where it was placed
struct PlaceholderContent {
    name: &'static str,
}

impl Renderable for PlaceholderContent {
    fn render(&mut self, area: Rect) {
        tracing::trace!(
            "{} at {},{} size {}x{}",
            self.name,
            area.x,
            area.y,
            area.width,
            area.height
        );
    }
}

struct App {
    window: Option<Arc<Window>>,
    config: Config,
    view: SplitView,
    cursor: Point,
    /// Touch id acting as the first touch point
    primary_touch: Option<u64>,
    left: PlaceholderContent,
    nav: PlaceholderContent,
    editor: PlaceholderContent,
    right: PlaceholderContent,
    dock: PlaceholderContent,
}

impl App {
    fn new() -> Self {
        let config = Config::load_or_default();
        tracing::info!(
            "Loaded config: hide_left={} hide_right={}",
            config.hide_left,
            config.hide_right
        );

        Self {
            window: None,
            view: SplitView::from_config(&config),
            config,
            cursor: Point::default(),
            primary_touch: None,
            left: PlaceholderContent { name: "left" },
            nav: PlaceholderContent { name: "nav" },
            editor: PlaceholderContent { name: "editor" },
            right: PlaceholderContent { name: "right" },
            dock: PlaceholderContent { name: "dock" },
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Minimized windows report a zero size; keep the last real viewport then
    fn resize(&mut self, width: u32, height: u32) {
        match Viewport::try_new(width, height) {
            Ok(viewport) => {
                if self.view.set_viewport(viewport) {
                    self.request_redraw();
                }
            }
            Err(e) => tracing::debug!("Keeping previous viewport: {}", e),
        }
    }

    fn feed(&mut self, event: InputEvent) {
        if self.view.handle(&event) {
            self.request_redraw();
        }
    }

    fn press(&mut self, at: Point) {
        let Some(divider) = self.view.compose().divider_at(at) else {
            return;
        };
        self.feed(InputEvent::PointerDown { divider, at });
    }

    fn touch(&mut self, touch: Touch) {
        let at = Point::new(touch.location.x, touch.location.y);
        match touch.phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return;
                }
                self.primary_touch = Some(touch.id);
                if let Some(divider) = self.view.compose().divider_at(at) {
                    self.feed(InputEvent::TouchStart {
                        divider,
                        touches: vec![at],
                    });
                }
            }
            TouchPhase::Moved if self.primary_touch == Some(touch.id) => {
                self.feed(InputEvent::TouchMove { touches: vec![at] });
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.primary_touch == Some(touch.id) => {
                self.primary_touch = None;
                self.feed(InputEvent::TouchEnd);
            }
            _ => {}
        }
    }

    fn toggle_left(&mut self) {
        let mut next = self.view.visibility();
        next.hide_left = !next.hide_left;
        if self.view.set_visibility(next) {
            tracing::info!("Left pane {}", if next.hide_left { "hidden" } else { "shown" });
            self.request_redraw();
        }
    }

    fn toggle_right(&mut self) {
        let mut next = self.view.visibility();
        next.hide_right = !next.hide_right;
        if self.view.set_visibility(next) {
            tracing::info!("Right pane {}", if next.hide_right { "hidden" } else { "shown" });
            self.request_redraw();
        }
    }

    fn toggle_dock(&mut self) {
        let hidden = !self.view.model().nav_split().dock_hidden;
        if self.view.set_dock_hidden(hidden) {
            tracing::info!("Dock {}", if hidden { "hidden" } else { "shown" });
            self.request_redraw();
        }
    }

    fn dump_layout(&self) {
        match serde_json::to_string_pretty(&self.view.compose()) {
            Ok(json) => tracing::info!("Composed layout:\n{}", json),
            Err(e) => tracing::error!("Failed to serialize layout: {}", e),
        }
    }

    fn paint(&mut self) {
        let layout = self.view.compose();
        let mut slots = Slots {
            left: &mut self.left,
            nav: &mut self.nav,
            editor: &mut self.editor,
            right: &mut self.right,
            dock: Some(&mut self.dock),
        };
        layout.paint(&mut slots);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("splitview")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            size.width,
            size.height,
            window.scale_factor()
        );

        self.resize(size.width, size.height);
        self.view.activate();
        self.window = Some(window);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                self.view.deactivate();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.paint();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x, position.y);
                self.feed(InputEvent::PointerMove { at: self.cursor });
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.press(self.cursor),
                ElementState::Released => self.feed(InputEvent::PointerUp),
            },
            WindowEvent::Touch(touch) => self.touch(touch),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match event.logical_key {
                    Key::Named(NamedKey::F1) => self.toggle_left(),
                    Key::Named(NamedKey::F2) => self.toggle_right(),
                    Key::Named(NamedKey::F3) => self.toggle_dock(),
                    Key::Named(NamedKey::F12) => self.dump_layout(),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting splitview");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
