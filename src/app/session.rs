//! Shopper session state.
//!
//! The storefront has no real authentication: logging in or registering
//! accepts any submitted username (including an empty one) and merely marks
//! the session as logged in for display purposes. Nothing is persisted.
//!
//! Form submissions reach the session as explicit [`SessionCommand`] values,
//! keeping "read the form fields" separate from "apply the state change".

/// A session transition requested by the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// The login form was submitted.
    LoginSubmitted {
        username: String,
        /// Accepted but never checked.
        password: String,
    },
    /// The registration form was submitted.
    RegisterSubmitted {
        username: String,
        /// Accepted but never checked.
        password: String,
    },
    /// The shopper asked to log out.
    LogoutRequested,
}

/// In-memory record of whether the shopper is logged in and under which name.
///
/// `username` is only meaningful while `is_logged_in` is true and is cleared
/// on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub username: String,
}

impl SessionState {
    /// Creates a logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the shopper in under `username`. Always succeeds.
    pub fn login(&mut self, username: impl Into<String>) {
        self.is_logged_in = true;
        self.username = username.into();
        tracing::debug!(username = %self.username, "shopper logged in");
    }

    /// Registers and logs the shopper in under `username`. Always succeeds.
    ///
    /// Identical in effect to [`SessionState::login`].
    pub fn register(&mut self, username: impl Into<String>) {
        self.is_logged_in = true;
        self.username = username.into();
        tracing::debug!(username = %self.username, "shopper registered");
    }

    /// Logs the shopper out and clears the username.
    pub fn logout(&mut self) {
        tracing::debug!(username = %self.username, "shopper logged out");
        self.is_logged_in = false;
        self.username.clear();
    }

    /// Applies a command to the session.
    pub fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::LoginSubmitted { username, .. } => self.login(username),
            SessionCommand::RegisterSubmitted { username, .. } => self.register(username),
            SessionCommand::LogoutRequested => self.logout(),
        }
    }

    /// The name to greet the shopper with, `None` while logged out.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.is_logged_in.then_some(self.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = SessionState::new();
        assert!(!session.is_logged_in);
        assert!(session.username.is_empty());
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn login_accepts_any_username() {
        let mut session = SessionState::new();
        session.login("alice");
        assert!(session.is_logged_in);
        assert_eq!(session.display_name(), Some("alice"));

        session.login("");
        assert!(session.is_logged_in);
        assert_eq!(session.display_name(), Some(""));
    }

    #[test]
    fn register_logs_in() {
        let mut session = SessionState::new();
        session.register("bob");
        assert!(session.is_logged_in);
        assert_eq!(session.username, "bob");
    }

    #[test]
    fn logout_clears_username() {
        let mut session = SessionState::new();
        session.login("alice");
        session.logout();
        assert_eq!(session, SessionState::new());
    }

    #[test]
    fn commands_ignore_password() {
        let mut session = SessionState::new();
        session.apply(SessionCommand::LoginSubmitted {
            username: "carol".to_string(),
            password: "wrong-but-fine".to_string(),
        });
        assert_eq!(session.display_name(), Some("carol"));

        session.apply(SessionCommand::LogoutRequested);
        assert!(!session.is_logged_in);

        session.apply(SessionCommand::RegisterSubmitted {
            username: "dave".to_string(),
            password: String::new(),
        });
        assert_eq!(session.display_name(), Some("dave"));
    }
}
