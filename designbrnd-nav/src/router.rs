use crate::observer::{Listener, Observers, SubscriptionId};

/// Notification sent when the router moves to another path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub previous: String,
    pub current: String,
}

/// Routing capability the sidebar consumes.
///
/// The router owns the current route. The sidebar asks for transitions and
/// learns about the outcome through [`Router::on_change`].
pub trait Router {
    /// Path of the page currently shown.
    fn current_path(&self) -> &str;

    /// Move to `path`. Listeners run before this call returns.
    fn transition_to(&mut self, path: &str);

    /// Register a change listener.
    fn on_change(&mut self, listener: Listener<RouteChange>) -> SubscriptionId;
}

/// In-memory router with browser-like history.
#[derive(Debug)]
pub struct MemoryRouter {
    entries: Vec<String>,
    index: usize,
    observers: Observers<RouteChange>,
}

impl MemoryRouter {
    /// Oldest entries are dropped past this depth.
    pub const MAX_HISTORY: usize = 100;

    /// Start at `initial` with a single history entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
            observers: Observers::new(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.move_to(self.index - 1);
        true
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.move_to(self.index + 1);
        true
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[String] {
        &self.entries
    }

    fn move_to(&mut self, index: usize) {
        let previous = self.entries[self.index].clone();
        self.index = index;
        let change = RouteChange {
            previous,
            current: self.entries[self.index].clone(),
        };
        log::debug!("route {} -> {}", change.previous, change.current);
        self.observers.notify(&change);
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    fn transition_to(&mut self, path: &str) {
        if self.current_path() == path {
            return;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        if self.entries.len() > Self::MAX_HISTORY {
            let overflow = self.entries.len() - Self::MAX_HISTORY;
            self.entries.drain(..overflow);
            self.index = self.index.saturating_sub(overflow);
        }
        self.move_to(self.entries.len() - 1);
    }

    fn on_change(&mut self, listener: Listener<RouteChange>) -> SubscriptionId {
        self.observers.subscribe(listener)
    }
}
