//! Auth session and the page state derived from it.

use serde::{Deserialize, Serialize};

use crate::api_const::CSRF_COOKIE_NAME;

/// Opaque token handed out by `/login/` and `/signup/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    /// Blank tokens are treated as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() { None } else { Some(Self(token)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Token {}", self.0)
    }
}

/// Where the token survives between page loads.
pub trait TokenStore {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn remove_token(&self);
}

/// The token is read once when the session is created and is not re-validated with the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<AuthToken>,
}

impl<S: TokenStore> Session<S> {
    pub fn init(store: S) -> Self {
        let token = store.load_token().and_then(AuthToken::new);
        Self { store, token }
    }

    /// Signed out without consulting the store.
    pub fn unrestored(store: S) -> Self {
        Self { store, token: None }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: AuthToken) {
        self.store.save_token(token.as_str());
        self.token = Some(token);
    }

    pub fn sign_out(&mut self) {
        self.store.remove_token();
        self.token = None;
    }
}

/// Pulls the CSRF token out of a `document.cookie` style string.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Unauthenticated,
    Authenticated { filters_applied: bool },
}

impl PageState {
    pub fn resolve(is_authenticated: bool, filters_applied: bool) -> Self {
        if is_authenticated {
            PageState::Authenticated { filters_applied }
        } else {
            PageState::Unauthenticated
        }
    }
}
