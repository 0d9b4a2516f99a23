//! Per-interaction session context: authentication state plus the
//! screen the user is on.
//!
//! Authentication is an explicit enum rather than an optional field,
//! and every transition is a named method. Navigation methods are
//! no-ops when they do not apply to the current state.

/// Whether the session has a verified identity attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated { user_id: i64 },
}

/// The logical screen the UI is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Register,
    Login,
    Questionnaire,
}

#[derive(Debug, Clone)]
pub struct Session {
    auth: AuthState,
    screen: Screen,
}

impl Session {
    /// A fresh anonymous session on the welcome screen.
    pub fn new() -> Self {
        Self {
            auth: AuthState::Anonymous,
            screen: Screen::Welcome,
        }
    }

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user_id(&self) -> Option<i64> {
        match self.auth {
            AuthState::Authenticated { user_id } => Some(user_id),
            AuthState::Anonymous => None,
        }
    }

    /// Navigate to the registration form. Only meaningful while
    /// anonymous.
    pub fn open_register(&mut self) {
        if self.auth == AuthState::Anonymous {
            self.screen = Screen::Register;
        }
    }

    /// Navigate to the login form. Only meaningful while anonymous.
    pub fn open_login(&mut self) {
        if self.auth == AuthState::Anonymous {
            self.screen = Screen::Login;
        }
    }

    /// Registration succeeded: the user still has to log in.
    pub fn registered(&mut self) {
        if self.auth == AuthState::Anonymous {
            self.screen = Screen::Login;
        }
    }

    /// Login succeeded: attach the identity and move to the
    /// questionnaire.
    pub fn signed_in(&mut self, user_id: i64) {
        self.auth = AuthState::Authenticated { user_id };
        self.screen = Screen::Questionnaire;
    }

    /// Drop the identity and return to the welcome screen.
    pub fn sign_out(&mut self) {
        self.auth = AuthState::Anonymous;
        self.screen = Screen::Welcome;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous_on_welcome() {
        let session = Session::new();
        assert_eq!(session.auth(), AuthState::Anonymous);
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn registration_leads_to_login_not_authentication() {
        let mut session = Session::new();
        session.open_register();
        assert_eq!(session.screen(), Screen::Register);
        session.registered();
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.auth(), AuthState::Anonymous);
    }

    #[test]
    fn signing_in_attaches_identity_and_opens_questionnaire() {
        let mut session = Session::new();
        session.open_login();
        session.signed_in(7);
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(session.screen(), Screen::Questionnaire);
    }

    #[test]
    fn sign_out_returns_to_anonymous_welcome() {
        let mut session = Session::new();
        session.signed_in(7);
        session.sign_out();
        assert_eq!(session.auth(), AuthState::Anonymous);
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[test]
    fn navigation_is_inert_while_authenticated() {
        let mut session = Session::new();
        session.signed_in(7);
        session.open_register();
        session.open_login();
        assert_eq!(session.screen(), Screen::Questionnaire);
        assert_eq!(session.user_id(), Some(7));
    }
}
