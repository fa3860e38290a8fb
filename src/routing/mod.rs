//! # Client-Side Routing
//!
//! Declarative route table plus deterministic resolution and history.
//!
//! ```text
//! table (data)          matcher (pure)            router (state)
//! ┌──────────────┐      ┌──────────────────┐      ┌──────────────────┐
//! │ Route records │ ──▶ │ resolve(path)    │ ──▶  │ current route +  │
//! │ nested, :id,  │      │ path_for(name)  │      │ back/forward     │
//! │ meta, props   │      └──────────────────┘      │ history          │
//! └──────────────┘                                 └──────────────────┘
//! ```
//!
//! The rendering layer consumes [`RouteMatch`] values; nothing in here knows
//! how a view is drawn.

pub mod matcher;
pub mod route;
pub mod router;
pub mod table;

pub use matcher::{resolve, path_for, RouteMatch, RouterError};
pub use route::{Route, View};
pub use router::Router;
pub use table::app_routes;
