//! Authentication state and the route access decision.

use crate::user::{Role, Session};


#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Session restore has not run yet.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Unknown)
    }

    /// Result of reading the persisted session. Stored identities are
    /// trusted without asking the backend.
    pub fn restored(stored: Option<Session>) -> Self {
        match stored {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Anonymous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Login and signup: signed-in users are sent home.
    GuestOnly,
    Authenticated,
    StudentOnly,
    ProfessorOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Allow,
    RedirectToLogin,
    RedirectToDefault,
}

pub fn evaluate(access: RouteAccess, state: &AuthState) -> GuardDecision {
    let session = match state {
        AuthState::Unknown => return GuardDecision::Loading,
        AuthState::Anonymous => None,
        AuthState::Authenticated(session) => Some(session),
    };
    match (access, session) {
        (RouteAccess::Public, _) => GuardDecision::Allow,
        (RouteAccess::GuestOnly, None) => GuardDecision::Allow,
        (RouteAccess::GuestOnly, Some(_)) => GuardDecision::RedirectToDefault,
        (_, None) => GuardDecision::RedirectToLogin,
        (RouteAccess::StudentOnly, Some(s)) if s.role != Role::Student => GuardDecision::RedirectToDefault,
        (RouteAccess::ProfessorOnly, Some(s)) if s.role != Role::Professor => GuardDecision::RedirectToDefault,
        (_, Some(_)) => GuardDecision::Allow,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(role: Role) -> AuthState {
        AuthState::Authenticated(Session {
            user_id: "u".to_string(),
            role,
            name: "n".to_string(),
            email: "e@x.kr".to_string(),
            token: None,
        })
    }

    #[test]
    fn unknown_state_never_redirects() {
        for access in [RouteAccess::Public, RouteAccess::GuestOnly, RouteAccess::Authenticated, RouteAccess::StudentOnly, RouteAccess::ProfessorOnly] {
            assert_eq!(evaluate(access, &AuthState::Unknown), GuardDecision::Loading);
        }
    }

    #[test]
    fn anonymous_users_go_to_login() {
        assert_eq!(evaluate(RouteAccess::Authenticated, &AuthState::Anonymous), GuardDecision::RedirectToLogin);
        assert_eq!(evaluate(RouteAccess::ProfessorOnly, &AuthState::Anonymous), GuardDecision::RedirectToLogin);
        assert_eq!(evaluate(RouteAccess::GuestOnly, &AuthState::Anonymous), GuardDecision::Allow);
        assert_eq!(evaluate(RouteAccess::Public, &AuthState::Anonymous), GuardDecision::Allow);
    }

    #[test]
    fn role_mismatch_goes_to_default_route() {
        assert_eq!(evaluate(RouteAccess::ProfessorOnly, &signed_in(Role::Student)), GuardDecision::RedirectToDefault);
        assert_eq!(evaluate(RouteAccess::StudentOnly, &signed_in(Role::Professor)), GuardDecision::RedirectToDefault);
        assert_eq!(evaluate(RouteAccess::ProfessorOnly, &signed_in(Role::Professor)), GuardDecision::Allow);
        assert_eq!(evaluate(RouteAccess::StudentOnly, &signed_in(Role::Student)), GuardDecision::Allow);
        assert_eq!(evaluate(RouteAccess::Authenticated, &signed_in(Role::Professor)), GuardDecision::Allow);
    }

    #[test]
    fn signed_in_users_skip_the_login_screen() {
        assert_eq!(evaluate(RouteAccess::GuestOnly, &signed_in(Role::Student)), GuardDecision::RedirectToDefault);
    }

    #[test]
    fn restore_is_optimistic() {
        assert_eq!(AuthState::restored(None), AuthState::Anonymous);
        let restored = AuthState::restored(signed_in(Role::Student).session().cloned());
        assert_eq!(restored.role(), Some(Role::Student));
        assert!(restored.is_resolved());
        assert!(!AuthState::Unknown.is_resolved());
    }
}
