//! History-backed navigation state.
//!
//! The "current route" is process-wide state with an explicit init and a
//! replace-on-navigate lifecycle, owned by a single [`Router`] and exposed
//! only through its navigation methods. A failed navigation leaves the
//! router untouched — there is no intermediate state.

use log::{debug, info};

use super::matcher::{self, RouteMatch, RouterError};
use super::route::Route;

pub struct Router {
    routes: Vec<Route>,
    /// Visited entries, oldest first. `cursor` indexes the current one;
    /// entries past the cursor are reachable via `forward()`.
    history: Vec<RouteMatch>,
    cursor: usize,
}

impl Router {
    /// Initializes the router at `initial_path`. Fails if the path does not
    /// resolve — a router never exists without a current route.
    pub fn new(routes: Vec<Route>, initial_path: &str) -> Result<Self, RouterError> {
        let initial = matcher::resolve(&routes, initial_path)?;
        info!("Router initialized at '{}'", initial.path);
        Ok(Self {
            routes,
            history: vec![initial],
            cursor: 0,
        })
    }

    pub fn current(&self) -> &RouteMatch {
        &self.history[self.cursor]
    }

    /// Navigates to `path`, appending a history entry. Any forward entries
    /// from earlier `back()` calls are discarded, matching browser history.
    pub fn push(&mut self, path: &str) -> Result<&RouteMatch, RouterError> {
        let found = matcher::resolve(&self.routes, path)?;
        debug!("Navigating to '{}' ({})", found.path, found.name);
        self.history.truncate(self.cursor + 1);
        self.history.push(found);
        self.cursor += 1;
        Ok(self.current())
    }

    /// Navigates to `path`, replacing the current entry instead of growing
    /// history.
    pub fn replace(&mut self, path: &str) -> Result<&RouteMatch, RouterError> {
        let found = matcher::resolve(&self.routes, path)?;
        debug!("Replacing current route with '{}' ({})", found.path, found.name);
        self.history[self.cursor] = found;
        Ok(self.current())
    }

    /// Navigates by route name, substituting placeholder params.
    pub fn push_named(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<&RouteMatch, RouterError> {
        let path = matcher::path_for(&self.routes, name, params)?;
        self.push(&path)
    }

    /// Steps back in history. Returns `None` at the oldest entry.
    pub fn back(&mut self) -> Option<&RouteMatch> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps forward in history. Returns `None` at the newest entry.
    pub fn forward(&mut self) -> Option<&RouteMatch> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}
