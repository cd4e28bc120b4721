use thiserror::Error;
use yew_router::prelude::*;

/// Upper bound on redirect hops followed while resolving a single navigation.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/recommend")]
    Recommend,
    #[at("/search")]
    Search,
    #[at("/game")]
    Game,
    #[at("/feihua")]
    FeiHua,
    #[at("/forum")]
    Forum,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Primary routes in navigation-bar order.
pub const NAV_ROUTES: [Route; 5] = [
    Route::Recommend,
    Route::Search,
    Route::Game,
    Route::FeiHua,
    Route::Forum,
];

/// A page the router can mount into its render slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Recommend,
    Search,
    Game,
    FeiHua,
    Forum,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Recommend => "诗词推荐",
            View::Search => "诗词搜索",
            View::Game => "诗词测试",
            View::FeiHua => "飞花令",
            View::Forum => "论坛",
            View::NotFound => "页面不存在",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Render(View),
    Redirect(Route),
}

impl Route {
    pub fn target(&self) -> Target {
        match self {
            Route::Root => Target::Redirect(Route::Recommend),
            Route::Recommend => Target::Render(View::Recommend),
            Route::Search => Target::Render(View::Search),
            Route::Game => Target::Render(View::Game),
            Route::FeiHua => Target::Render(View::FeiHua),
            Route::Forum => Target::Render(View::Forum),
            Route::NotFound => Target::Render(View::NotFound),
        }
    }
}

/// Outcome of following a route's redirects to the page that gets rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Route whose path should end up in the address bar.
    pub route: Route,
    pub view: View,
    pub redirected: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("redirect loop starting at {from:?} after {hops} hops")]
    RedirectLoop { from: Route, hops: usize },
}

pub fn resolve(route: Route) -> Result<Resolved, RouteError> {
    let mut current = route;
    for hop in 0..=MAX_REDIRECTS {
        match current.target() {
            Target::Render(view) => {
                return Ok(Resolved {
                    route: current,
                    view,
                    redirected: hop > 0,
                });
            }
            Target::Redirect(next) => {
                log::debug!("{} redirects to {}", current.to_path(), next.to_path());
                current = next;
            }
        }
    }
    Err(RouteError::RedirectLoop {
        from: route,
        hops: MAX_REDIRECTS,
    })
}

/// Matches a path already stripped of the base URL. Matching ignores case.
pub fn recognize(path: &str) -> Route {
    Route::recognize(&path.to_lowercase()).unwrap_or(Route::NotFound)
}

pub fn resolve_path(path: &str) -> Result<Resolved, RouteError> {
    resolve(recognize(path))
}

/// What the render slot does for the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Replace the history entry with this route and render nothing.
    Redirect(Route),
    Render(View),
}

impl From<Result<Resolved, RouteError>> for Decision {
    fn from(result: Result<Resolved, RouteError>) -> Self {
        match result {
            Ok(resolved) if resolved.redirected => Decision::Redirect(resolved.route),
            Ok(resolved) => Decision::Render(resolved.view),
            Err(e) => {
                log::error!("Failed to resolve route: {}", e);
                Decision::Render(View::NotFound)
            }
        }
    }
}

pub fn decide(route: Route) -> Decision {
    resolve(route).into()
}

pub fn decide_path(path: &str) -> Decision {
    decide(recognize(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yew_router::history::{History, MemoryHistory};

    #[test]
    fn test_declared_paths_render_their_view() {
        let cases = [
            ("/recommend", View::Recommend),
            ("/search", View::Search),
            ("/game", View::Game),
            ("/feihua", View::FeiHua),
            ("/forum", View::Forum),
        ];
        for (path, view) in cases {
            let resolved = resolve_path(path).unwrap();
            assert_eq!(resolved.view, view, "path {}", path);
            assert_eq!(resolved.route.to_path(), path);
            assert!(!resolved.redirected);
        }
    }

    #[test]
    fn test_root_redirects_to_recommend() {
        let resolved = resolve(Route::Root).unwrap();
        assert_eq!(resolved.route, Route::Recommend);
        assert_eq!(resolved.view, View::Recommend);
        assert!(resolved.redirected);

        assert_eq!(resolve_path("/").unwrap(), resolved);
    }

    #[test]
    fn test_paths_are_distinct() {
        let paths = Route::routes();
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let resolved = resolve_path("/unknown").unwrap();
        assert_eq!(resolved.view, View::NotFound);
        assert_eq!(resolve_path("/search/extra").unwrap().view, View::NotFound);
    }

    #[test]
    fn test_nav_routes_render_distinct_views() {
        let views: HashSet<_> = NAV_ROUTES
            .iter()
            .map(|route| resolve(*route).unwrap().view)
            .collect();
        assert_eq!(views.len(), NAV_ROUTES.len());
        assert!(!views.contains(&View::NotFound));
    }

    #[test]
    fn test_path_matching_ignores_case() {
        assert_eq!(resolve_path("/Search").unwrap().view, View::Search);
        assert_eq!(resolve_path("/FORUM").unwrap().view, View::Forum);
        assert_eq!(resolve_path("/FeiHua").unwrap().route, Route::FeiHua);
        assert_eq!(resolve_path("/search/").unwrap().view, View::Search);
    }

    #[test]
    fn test_decide_every_route() {
        let cases = [
            (Route::Root, Decision::Redirect(Route::Recommend)),
            (Route::Recommend, Decision::Render(View::Recommend)),
            (Route::Search, Decision::Render(View::Search)),
            (Route::Game, Decision::Render(View::Game)),
            (Route::FeiHua, Decision::Render(View::FeiHua)),
            (Route::Forum, Decision::Render(View::Forum)),
            (Route::NotFound, Decision::Render(View::NotFound)),
        ];
        for (route, decision) in cases {
            assert_eq!(decide(route), decision, "route {:?}", route);
        }
    }

    #[test]
    fn test_redirect_loop_renders_not_found() {
        let failed: Result<Resolved, RouteError> = Err(RouteError::RedirectLoop {
            from: Route::Root,
            hops: MAX_REDIRECTS,
        });
        assert_eq!(Decision::from(failed), Decision::Render(View::NotFound));
    }

    #[test]
    fn test_decide_path() {
        assert_eq!(decide_path("/"), Decision::Redirect(Route::Recommend));
        assert_eq!(decide_path("/GAME"), Decision::Render(View::Game));
        assert_eq!(decide_path("/unknown"), Decision::Render(View::NotFound));
    }

    #[test]
    fn test_back_returns_to_previous_route() {
        let base = Some("/app");
        let history = MemoryHistory::new();
        history.push("/app/forum");
        history.push("/app/search");
        let current = || decide_path(crate::config::strip_base(base, history.location().path()));
        assert_eq!(current(), Decision::Render(View::Search));

        history.back();
        assert_eq!(history.location().path(), "/app/forum");
        assert_eq!(current(), Decision::Render(View::Forum));
    }
}
