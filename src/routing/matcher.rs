//! Path resolution over a declarative route table.
//!
//! Matching policy: literal segments match only themselves; a `:name`
//! placeholder matches any non-empty segment and captures it; a parent with
//! children matches a prefix and resolves the remainder against its children
//! (the empty-path child is the index route); a leaf matches only when the
//! whole path is consumed. Ambiguity resolves depth-first in registration
//! order — first match wins.

use std::collections::HashMap;
use std::fmt;

use super::route::{Route, View};

/// Errors from path resolution and named navigation.
#[derive(Debug, PartialEq, Eq)]
pub enum RouterError {
    /// No registered entry matches the requested path.
    NotFound(String),
    /// No route carries the requested name.
    UnknownRoute(String),
    /// A placeholder in the named route's path had no value supplied.
    MissingParam { route: String, param: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::NotFound(path) => write!(f, "no route matches path '{path}'"),
            RouterError::UnknownRoute(name) => write!(f, "no route named '{name}'"),
            RouterError::MissingParam { route, param } => {
                write!(f, "route '{route}' requires param '{param}'")
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// A successful resolution: the one matching entry plus captured params.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// Full resolved path, normalized with a leading slash.
    pub path: String,
    pub name: String,
    pub view: View,
    pub params: HashMap<String, String>,
    pub meta: HashMap<String, String>,
    pub props: bool,
}

impl RouteMatch {
    /// Captured params, but only when the entry forwards them to its view.
    pub fn view_inputs(&self) -> Option<&HashMap<String, String>> {
        self.props.then_some(&self.params)
    }
}

/// Splits a path into non-empty segments. `"/"` and `""` both yield none.
fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolves `path` against the table. Exactly one entry matches or the
/// resolution fails with [`RouterError::NotFound`].
pub fn resolve(routes: &[Route], path: &str) -> Result<RouteMatch, RouterError> {
    let requested = segments(path);
    let normalized = format!("/{}", requested.join("/"));
    for route in routes {
        if let Some(mut found) = match_route(route, &requested, &HashMap::new()) {
            found.path = normalized;
            return Ok(found);
        }
    }
    Err(RouterError::NotFound(path.to_string()))
}

fn match_route(
    route: &Route,
    remaining: &[&str],
    inherited: &HashMap<String, String>,
) -> Option<RouteMatch> {
    let own = segments(&route.path);
    if remaining.len() < own.len() {
        return None;
    }

    let mut params = inherited.clone();
    for (pattern, segment) in own.iter().zip(remaining) {
        match pattern.strip_prefix(':') {
            Some(key) => {
                params.insert(key.to_string(), (*segment).to_string());
            }
            None => {
                if pattern != segment {
                    return None;
                }
            }
        }
    }

    let rest = &remaining[own.len()..];
    for child in &route.children {
        if let Some(found) = match_route(child, rest, &params) {
            return Some(found);
        }
    }

    // The route itself only matches once the whole path is consumed, and
    // only if it is addressable (named). Layout shells never match alone.
    if rest.is_empty()
        && let Some(name) = &route.name
    {
        return Some(RouteMatch {
            path: String::new(), // normalized form set by resolve()
            name: name.clone(),
            view: route.view,
            params,
            meta: route.meta.clone(),
            props: route.props,
        });
    }
    None
}

/// Builds the path for a named route, substituting `:param` placeholders
/// from `params`. Used for programmatic navigation by name.
pub fn path_for(
    routes: &[Route],
    name: &str,
    params: &[(&str, &str)],
) -> Result<String, RouterError> {
    fn lookup(routes: &[Route], name: &str, prefix: &str) -> Option<String> {
        for route in routes {
            let full = join(prefix, &route.path);
            if route.name.as_deref() == Some(name) {
                return Some(full);
            }
            if let Some(found) = lookup(&route.children, name, &full) {
                return Some(found);
            }
        }
        None
    }

    let pattern =
        lookup(routes, name, "").ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;

    let mut parts = Vec::new();
    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix(':') {
            Some(key) => {
                let value = params
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| RouterError::MissingParam {
                        route: name.to_string(),
                        param: key.to_string(),
                    })?;
                parts.push(value.to_string());
            }
            None => parts.push(segment.to_string()),
        }
    }
    Ok(format!("/{}", parts.join("/")))
}

fn join(prefix: &str, path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        prefix.to_string()
    } else if prefix.is_empty() {
        trimmed.to_string()
    } else {
        format!("{prefix}/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_routes;

    #[test]
    fn test_literal_segments_match_exactly() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters").unwrap();
        assert_eq!(found.name, "characters");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_index_child_matches_root() {
        let routes = test_routes();
        let found = resolve(&routes, "/").unwrap();
        assert_eq!(found.name, "home");
        assert_eq!(found.view, View::Home);
    }

    #[test]
    fn test_placeholder_captures_value() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters/42").unwrap();
        assert_eq!(found.name, "character-detail");
        assert_eq!(found.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_props_flag_forwards_params() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters/42").unwrap();
        let inputs = found.view_inputs().expect("character-detail forwards params");
        assert_eq!(inputs.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_no_forwarding_without_props() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters").unwrap();
        assert!(found.view_inputs().is_none());
    }

    #[test]
    fn test_longer_path_wins_over_prefix() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters/42/edit").unwrap();
        assert_eq!(found.name, "character-edit");
    }

    #[test]
    fn test_literal_registered_first_beats_placeholder() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters/new").unwrap();
        assert_eq!(found.name, "character-new");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_unregistered_path_is_not_found() {
        let routes = test_routes();
        let err = resolve(&routes, "/nonexistent").unwrap_err();
        assert_eq!(err, RouterError::NotFound("/nonexistent".to_string()));
    }

    #[test]
    fn test_leaf_requires_full_consumption() {
        let routes = test_routes();
        let err = resolve(&routes, "/characters/42/edit/extra").unwrap_err();
        assert!(matches!(err, RouterError::NotFound(_)));
    }

    #[test]
    fn test_empty_segments_are_normalized_away() {
        // "//characters///42" collapses to two segments before matching.
        let routes = test_routes();
        let found = resolve(&routes, "//characters///42").unwrap();
        assert_eq!(found.name, "character-detail");
        assert_eq!(found.path, "/characters/42");
    }

    #[test]
    fn test_meta_carried_on_match() {
        let routes = test_routes();
        let found = resolve(&routes, "/characters/42").unwrap();
        assert_eq!(
            found.meta.get("layout").map(String::as_str),
            Some("dashboard")
        );
    }

    #[test]
    fn test_path_for_substitutes_placeholders() {
        let routes = test_routes();
        let path = path_for(&routes, "character-detail", &[("id", "42")]).unwrap();
        assert_eq!(path, "/characters/42");
    }

    #[test]
    fn test_path_for_missing_param() {
        let routes = test_routes();
        let err = path_for(&routes, "character-detail", &[]).unwrap_err();
        assert_eq!(
            err,
            RouterError::MissingParam {
                route: "character-detail".to_string(),
                param: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_path_for_unknown_name() {
        let routes = test_routes();
        let err = path_for(&routes, "no-such-route", &[]).unwrap_err();
        assert_eq!(err, RouterError::UnknownRoute("no-such-route".to_string()));
    }
}
