pub const LOGIN_PATH: &str = "/login";

/// What a guard allows for a single navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(&'static str),
}

/// Sends unauthenticated visitors of protected pages to the login page.
///
/// UX-only: the service still rejects unauthenticated API calls on its own.
#[must_use]
pub const fn require_auth(protected: bool, token_present: bool) -> Decision {
    if protected && !token_present {
        Decision::Redirect(LOGIN_PATH)
    } else {
        Decision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_protected_without_token_redirects() {
        assert_eq!(require_auth(true, false), Decision::Redirect(LOGIN_PATH));
        assert_eq!(require_auth(true, true), Decision::Proceed);
        assert_eq!(require_auth(false, false), Decision::Proceed);
        assert_eq!(require_auth(false, true), Decision::Proceed);
    }
}
