//! Declarative route records.
//!
//! A route table is plain data: a sequence of [`Route`] records, each mapping
//! a path pattern to a [`View`] with optional children nested under it. The
//! matcher in [`super::matcher`] walks this data; nothing here resolves
//! anything.

use std::collections::HashMap;

/// Identifies a view component. The rendering layer (out of scope here) maps
/// these to actual screens; the routing core only needs a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Shared chrome wrapping all nested routes.
    AppLayout,
    Home,
    CharacterList,
    CharacterDetail,
    /// Used for both creating and editing a character.
    CharacterCreator,
    ProjectList,
    ProjectCreate,
    ProjectDetail,
    ProjectDashboard,
}

/// One entry in the route table.
///
/// `path` is relative to the parent route and may contain `:name` placeholder
/// segments. A route with children matches a path prefix and delegates the
/// remainder to its children; the empty-path child is the index route.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    /// Unique name for programmatic navigation. Layout shells stay unnamed.
    pub name: Option<String>,
    pub view: View,
    /// When set, captured params are forwarded as inputs to the view.
    pub props: bool,
    /// Open-ended configuration; the one observed key is `layout`.
    pub meta: HashMap<String, String>,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: None,
            view,
            props: false,
            meta: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}
