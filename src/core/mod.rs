//! # Core Application Concerns
//!
//! Configuration and demo data. This module knows nothing about routing or
//! the HTTP layer.
//!
//! ## Modules
//!
//! - [`config`]: settings with a defaults → file → env → CLI hierarchy
//! - [`fixtures`]: static sample characters/projects for local development

pub mod config;
pub mod fixtures;
