//! The editor's route table.
//!
//! All views nest under the app layout shell. Entries whose `layout` meta is
//! `dashboard` render inside the dashboard chrome; the rest use the default.
//! Registration order matters: `characters/new` precedes `characters/:id` so
//! the literal wins.

use super::route::{Route, View};

pub fn app_routes() -> Vec<Route> {
    vec![
        Route::new("/", View::AppLayout).with_children(vec![
            Route::new("", View::Home).named("home"),
            Route::new("characters", View::CharacterList).named("characters"),
            Route::new("characters/new", View::CharacterCreator)
                .named("character-new")
                .with_meta("layout", "dashboard"),
            Route::new("characters/:id", View::CharacterDetail)
                .named("character-detail")
                .with_props()
                .with_meta("layout", "dashboard"),
            Route::new("characters/:id/edit", View::CharacterCreator)
                .named("character-edit")
                .with_props()
                .with_meta("layout", "dashboard"),
            Route::new("projects", View::ProjectList).named("projects"),
            Route::new("projects/new", View::ProjectCreate)
                .named("project-new")
                .with_meta("layout", "dashboard"),
            Route::new("projects/:id", View::ProjectDetail)
                .named("project-detail")
                .with_props()
                .with_meta("layout", "dashboard"),
            Route::new("projects/:id/dashboard", View::ProjectDashboard)
                .named("project-dashboard")
                .with_props()
                .with_meta("layout", "dashboard"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::{path_for, resolve};

    /// Collects (name, needs_id) for every named route in the table.
    fn named_routes(routes: &[Route], acc: &mut Vec<(String, bool)>) {
        for route in routes {
            if let Some(name) = &route.name {
                acc.push((name.clone(), route.path.contains(':')));
            }
            named_routes(&route.children, acc);
        }
    }

    #[test]
    fn test_every_route_resolves_to_itself() {
        let routes = app_routes();
        let mut names = Vec::new();
        named_routes(&routes, &mut names);
        assert_eq!(names.len(), 9);

        for (name, needs_id) in names {
            let params: &[(&str, &str)] = if needs_id { &[("id", "42")] } else { &[] };
            let path = path_for(&routes, &name, params).unwrap();
            let found = resolve(&routes, &path)
                .unwrap_or_else(|e| panic!("route '{name}' failed to round-trip: {e}"));
            assert_eq!(found.name, name);
            if needs_id {
                assert_eq!(found.params.get("id").map(String::as_str), Some("42"));
            }
        }
    }

    #[test]
    fn test_expected_route_names_present() {
        let routes = app_routes();
        let mut names = Vec::new();
        named_routes(&routes, &mut names);
        let names: Vec<&str> = names.iter().map(|(n, _)| n.as_str()).collect();
        for expected in [
            "home",
            "characters",
            "character-new",
            "character-detail",
            "character-edit",
            "projects",
            "project-new",
            "project-detail",
            "project-dashboard",
        ] {
            assert!(names.contains(&expected), "missing route '{expected}'");
        }
    }

    #[test]
    fn test_dashboard_layout_entries() {
        let routes = app_routes();
        for path in [
            "/characters/new",
            "/characters/7",
            "/characters/7/edit",
            "/projects/new",
            "/projects/7",
            "/projects/7/dashboard",
        ] {
            let found = resolve(&routes, path).unwrap();
            assert_eq!(
                found.meta.get("layout").map(String::as_str),
                Some("dashboard"),
                "expected dashboard layout for {path}"
            );
        }
        // list views use the default chrome
        for path in ["/", "/characters", "/projects"] {
            let found = resolve(&routes, path).unwrap();
            assert!(found.meta.is_empty(), "unexpected meta for {path}");
        }
    }
}
