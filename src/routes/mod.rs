//! Client-side route table and the auth guard run before entering a view.

#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        requires_auth: false,
    },
    Route {
        path: "/dashboard",
        name: "dashboard",
        requires_auth: true,
    },
    Route {
        path: "/nouveau-projet",
        name: "new-project",
        requires_auth: true,
    },
    Route {
        path: "/projet/:id",
        name: "project-board",
        requires_auth: true,
    },
    Route {
        path: "/projets",
        name: "project-list",
        requires_auth: true,
    },
];

/// Resolve a concrete path (query string ignored) against the route table.
pub fn match_route(path: &str) -> Option<&'static Route> {
    let target = path.split('?').next().unwrap_or(path);
    ROUTES.iter().find(|route| pattern_matches(route.path, target))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pat, seg)| {
            if let Some(_param) = pat.strip_prefix(':') {
                !seg.is_empty()
            } else {
                pat == seg
            }
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    /// Blocked: go home, carrying the intended path as a query parameter so
    /// it can be honored once after sign-in.
    Redirect { to: String, pending: String },
}

/// Guard consulted before every navigation. A protected target with a failed
/// auth check redirects to home; everything else passes through, including
/// paths the table does not know.
pub fn before_each(authenticated: bool, target_path: &str) -> NavigationDecision {
    match match_route(target_path) {
        Some(route) if route.requires_auth && !authenticated => {
            tracing::debug!("blocking navigation to {}", target_path);
            NavigationDecision::Redirect {
                to: format!("/?redirect={}", target_path),
                pending: target_path.to_string(),
            }
        }
        _ => NavigationDecision::Allow,
    }
}
