use crate::session::history::History;
use bollcore::spectral::AnalysisResult;

/// Pages of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Analysis,
    Result,
    History,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::Analysis => "analysis",
            Page::Result => "result",
            Page::History => "history",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("no result to show yet")]
    NoResult,
}

/// Explicit session state: current page, user, last result, history.
/// Transitions go through methods so the page graph stays closed.
pub struct Session {
    page: Page,
    user: Option<String>,
    last_result: Option<AnalysisResult>,
    pub history: History,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::Login,
            user: None,
            last_result: None,
            history: History::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Fixed credential pair; there is no account store.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if username == "admin" && password == "admin" {
            self.user = Some(username.to_string());
            self.page = Page::Dashboard;
            Ok(())
        } else {
            Err(SessionError::InvalidCredentials)
        }
    }

    pub fn login_guest(&mut self) {
        self.user = Some("guest".to_string());
        self.page = Page::Dashboard;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.last_result = None;
        self.page = Page::Login;
    }

    pub fn go_to(&mut self, page: Page) -> Result<(), SessionError> {
        if !self.is_logged_in() && page != Page::Login {
            return Err(SessionError::NotLoggedIn);
        }
        if page == Page::Result && self.last_result.is_none() {
            return Err(SessionError::NoResult);
        }
        self.page = page;
        Ok(())
    }

    /// Stores a completed analysis, appends it to the history, and
    /// lands on the result page.
    pub fn record_result(&mut self, result: AnalysisResult) {
        self.history.record(result.clone());
        self.last_result = Some(result);
        self.page = Page::Result;
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
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
    use bollcore::analysis::maturity;

    fn some_result() -> AnalysisResult {
        AnalysisResult::Maturity(maturity::evaluate(0.2, 0.1))
    }

    #[test]
    fn fresh_session_starts_on_login() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Login);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn admin_login_lands_on_dashboard() {
        let mut session = Session::new();
        session.login("admin", "admin").unwrap();
        assert_eq!(session.page(), Page::Dashboard);
        assert_eq!(session.user(), Some("admin"));
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.login("admin", "hunter2"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(session.page(), Page::Login);
    }

    #[test]
    fn navigation_requires_a_login() {
        let mut session = Session::new();
        assert_eq!(session.go_to(Page::Analysis), Err(SessionError::NotLoggedIn));
        session.login_guest();
        session.go_to(Page::Analysis).unwrap();
        assert_eq!(session.page(), Page::Analysis);
    }

    #[test]
    fn result_page_needs_a_result() {
        let mut session = Session::new();
        session.login_guest();
        assert_eq!(session.go_to(Page::Result), Err(SessionError::NoResult));
        session.record_result(some_result());
        assert_eq!(session.page(), Page::Result);
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn logout_clears_the_result_and_returns_to_login() {
        let mut session = Session::new();
        session.login_guest();
        session.record_result(some_result());
        session.logout();
        assert_eq!(session.page(), Page::Login);
        assert!(session.last_result().is_none());
        // history survives the logout for the overview page
        assert_eq!(session.history.len(), 1);
    }
}
