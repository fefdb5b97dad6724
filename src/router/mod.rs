//! Page table of the writing UI and the navigation guard in front of it.
//!
//! [`Router::navigate`] resolves static redirects first (so `/` lands on
//! `/login`), then asks the guard whether the final page may be shown. A blocked
//! navigation is a plain redirect; nothing is reported to the user.

pub mod guards;

pub use self::guards::{Decision, LOGIN_PATH, require_auth};

use crate::session::Session;
use tracing::debug;

pub const WRITER_PATH: &str = "/writer";

/// Upper bound on chained static redirects, so a cyclic table cannot spin.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Always forwards to another path.
    Redirect(&'static str),
    Public,
    /// Needs a session token.
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub kind: RouteKind,
}

/// Where a navigation attempt ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed(String),
    Redirect(String),
}

impl Navigation {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Proceed(path) | Self::Redirect(path) => path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(vec![
            Route {
                path: "/",
                kind: RouteKind::Redirect(LOGIN_PATH),
            },
            Route {
                path: LOGIN_PATH,
                kind: RouteKind::Public,
            },
            Route {
                path: WRITER_PATH,
                kind: RouteKind::Protected,
            },
        ])
    }
}

impl Router {
    #[must_use]
    pub const fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Looks up the route for `path`, ignoring query, fragment and trailing slash.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<&Route> {
        let path = normalize_path(path);
        self.routes.iter().find(|route| route.path == path)
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.route(path)
            .is_some_and(|route| route.kind == RouteKind::Protected)
    }

    /// Pure guard decision for `target` given token presence.
    #[must_use]
    pub fn guard(&self, target: &str, token_present: bool) -> Decision {
        require_auth(self.is_protected(target), token_present)
    }

    /// Resolves a navigation from `current` to `target` for the given session.
    ///
    /// The path is normalized only for the route lookup. A navigation that is
    /// let through without any redirect proceeds to `target` exactly as given,
    /// query and fragment included.
    #[must_use]
    pub fn navigate(&self, target: &str, current: &str, session: &Session) -> Navigation {
        let requested = normalize_path(target);
        let resolved = self.follow_redirects(&requested);
        let decision = self.guard(resolved.path(), session.is_authenticated());

        match (decision, resolved) {
            (Decision::Redirect(login), _) => {
                debug!(from = current, to = %requested, redirect = login, "navigation blocked");
                Navigation::Redirect(login.to_string())
            }
            (Decision::Proceed, Navigation::Redirect(path)) => Navigation::Redirect(path),
            (Decision::Proceed, Navigation::Proceed(_)) => Navigation::Proceed(target.to_string()),
        }
    }

    /// Follows static redirects from `path`, at most `MAX_REDIRECTS` hops.
    /// Returns `Redirect` if at least one hop was taken.
    fn follow_redirects(&self, path: &str) -> Navigation {
        let mut current = path.to_string();
        let mut hops = 0;
        while hops < MAX_REDIRECTS {
            match self.route(&current).map(|route| route.kind) {
                Some(RouteKind::Redirect(next)) => {
                    current = normalize_path(next);
                    hops += 1;
                }
                _ => break,
            }
        }

        if hops == 0 {
            Navigation::Proceed(current)
        } else {
            Navigation::Redirect(current)
        }
    }
}

/// Strips query and fragment, forces a leading slash and drops a trailing one.
fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_without_token_redirects_to_login() {
        let router = Router::default();
        let session = Session::new();
        assert_eq!(
            router.navigate("/writer", "/", &session),
            Navigation::Redirect("/login".to_string())
        );
    }

    #[test]
    fn writer_with_token_proceeds() {
        let router = Router::default();
        let session = Session::with_token("tok");
        assert_eq!(
            router.navigate("/writer", "/login", &session),
            Navigation::Proceed("/writer".to_string())
        );
    }

    #[test]
    fn login_always_proceeds() {
        let router = Router::default();
        for session in [Session::new(), Session::with_token("tok")] {
            assert_eq!(
                router.navigate("/login", "/writer", &session),
                Navigation::Proceed("/login".to_string())
            );
        }
    }

    #[test]
    fn root_redirects_to_login() {
        let router = Router::default();
        let navigation = router.navigate("/", "/", &Session::new());
        assert_eq!(navigation, Navigation::Redirect("/login".to_string()));
        assert_eq!(navigation.path(), "/login");
    }

    #[test]
    fn unknown_path_proceeds_unchanged() {
        let router = Router::default();
        assert_eq!(
            router.navigate("/about", "/", &Session::new()),
            Navigation::Proceed("/about".to_string())
        );
    }

    #[test]
    fn guard_ignores_query_and_trailing_slash() {
        let router = Router::default();
        assert!(router.is_protected("/writer/"));
        assert!(router.is_protected("/writer?novel=n1#chapter-2"));
        assert_eq!(router.guard("writer", false), Decision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn logout_turns_writer_back_into_redirect() {
        let router = Router::default();
        let session = Session::with_token("tok");
        assert_eq!(
            router.navigate("/writer", "/login", &session),
            Navigation::Proceed("/writer".to_string())
        );
        session.clear();
        assert_eq!(
            router.navigate("/writer", "/login", &session),
            Navigation::Redirect("/login".to_string())
        );
    }

    #[test]
    fn redirect_cycle_terminates() {
        let router = Router::new(vec![
            Route {
                path: "/a",
                kind: RouteKind::Redirect("/b"),
            },
            Route {
                path: "/b",
                kind: RouteKind::Redirect("/a"),
            },
        ]);
        // An even number of hops lands back on the starting page.
        assert_eq!(
            router.navigate("/a", "/", &Session::new()),
            Navigation::Redirect("/a".to_string())
        );
        assert_eq!(
            router.navigate("/b", "/", &Session::new()),
            Navigation::Redirect("/b".to_string())
        );
    }

    #[test]
    fn proceed_keeps_target_as_given() {
        let router = Router::default();
        let session = Session::with_token("tok");
        assert_eq!(
            router.navigate("/writer?novel=n1#ch2", "/login", &session),
            Navigation::Proceed("/writer?novel=n1#ch2".to_string())
        );
        assert_eq!(
            router.navigate("/about/", "/", &Session::new()),
            Navigation::Proceed("/about/".to_string())
        );
    }

    #[test]
    fn blocked_target_with_query_still_redirects_to_login() {
        let router = Router::default();
        assert_eq!(
            router.navigate("/writer?novel=n1", "/", &Session::new()),
            Navigation::Redirect("/login".to_string())
        );
    }

    #[test]
    fn redirected_target_drops_query() {
        let router = Router::default();
        assert_eq!(
            router.navigate("/?next=writer", "/", &Session::new()),
            Navigation::Redirect("/login".to_string())
        );
    }

    #[test]
    fn normalize_path_cases() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("writer"), "/writer");
        assert_eq!(normalize_path("/writer/?x=1"), "/writer");
    }
}
