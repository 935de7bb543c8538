// ABOUTME: Document-level pointer listener registration.
// ABOUTME: Explicit attach/detach scope so drags keep tracking outside the hit-regions.

/// Whether the engine is currently subscribed to document-wide
/// move/up events. Detaching is idempotent.
#[derive(Debug, Default)]
pub struct DocumentListeners {
    attached: bool,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns `false` if already attached
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        tracing::debug!("Document listeners attached");
        true
    }

    /// Returns `false` if nothing was attached
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        tracing::debug!("Document listeners detached");
        true
    }
}
