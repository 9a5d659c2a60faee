//! Credential gate for the back office.
//!
//! The bookstore API itself is unauthenticated; the gate only decides
//! whether this client shows the management views.

use crate::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};

/// The username/password pair accepted by the sign-in view.
///
/// Matching is byte-exact. No trimming, no case folding: `"Bookstoreadmin"`
/// and `" bookstoreadmin"` are both wrong.
#[derive(Debug, Clone)]
pub struct GateCredentials {
    username: String,
    password: String,
}

impl GateCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

impl Default for GateCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_credentials_match() {
        let gate = GateCredentials::default();
        assert!(gate.matches("bookstoreadmin", "ManageBook68"));
    }

    #[test]
    fn test_case_variant_is_rejected() {
        let gate = GateCredentials::default();
        assert!(!gate.matches("Bookstoreadmin", "ManageBook68"));
        assert!(!gate.matches("bookstoreadmin", "managebook68"));
    }

    #[test]
    fn test_whitespace_padding_is_rejected() {
        let gate = GateCredentials::default();
        assert!(!gate.matches(" bookstoreadmin", "ManageBook68"));
        assert!(!gate.matches("bookstoreadmin", "ManageBook68 "));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let gate = GateCredentials::default();
        assert!(!gate.matches("", ""));
        assert!(!gate.matches("bookstoreadmin", ""));
    }

    #[test]
    fn test_custom_credentials() {
        let gate = GateCredentials::new("clerk", "shelf42");
        assert!(gate.matches("clerk", "shelf42"));
        assert!(!gate.matches("bookstoreadmin", "ManageBook68"));
    }
}
