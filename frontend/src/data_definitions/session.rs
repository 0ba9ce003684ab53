//! Browser side of the auth session.

use dioxus::prelude::*;

use common::{
    api_const::TOKEN_STORAGE_KEY,
    session::{AuthToken, Session, TokenStore, csrf_token_from_cookies},
};

/// Keeps the token under `localStorage["token"]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load_token(&self) -> Option<String> {
        browser::get_item(TOKEN_STORAGE_KEY)
    }

    fn save_token(&self, token: &str) {
        browser::set_item(TOKEN_STORAGE_KEY, token);
    }

    fn remove_token(&self) {
        browser::remove_item(TOKEN_STORAGE_KEY);
    }
}

pub type BrowserSession = Session<LocalStorageTokenStore>;

/// The CSRF cookie set by the API, if the page can see it.
pub fn read_csrf_cookie() -> Option<String> {
    csrf_token_from_cookies(&browser::cookies()?)
}

/// Shared auth state. `restored` flips once the stored token has been read,
/// which only happens in the browser after the first render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionContext {
    session: Signal<BrowserSession>,
    restored: Signal<bool>,
}

impl SessionContext {
    /// Token without subscribing the caller to session changes.
    pub fn peek_token(&self) -> Option<AuthToken> {
        self.session.peek().token().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn sign_in(&mut self, token: AuthToken) {
        self.session.write().sign_in(token);
        self.restored.set(true);
    }

    pub fn sign_out(&mut self) {
        self.session.write().sign_out();
    }
}

pub fn use_session_provider() -> SessionContext {
    let mut session = use_signal(|| BrowserSession::unrestored(LocalStorageTokenStore));
    let mut restored = use_signal(|| false);
    // server render and first client render must agree, so storage is read in an effect
    use_effect(move || {
        session.set(BrowserSession::init(LocalStorageTokenStore));
        restored.set(true);
    });
    use_context_provider(move || SessionContext { session, restored })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::logger::tracing::warn;
    use web_sys::wasm_bindgen::JsCast;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn set_item(key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, token not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("failed to save {key}: {e:?}");
        }
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!("failed to remove {key}: {e:?}");
            }
        }
    }

    pub fn cookies() -> Option<String> {
        let document = web_sys::window()?.document()?;
        document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub fn get_item(_key: &str) -> Option<String> {
        None
    }

    pub fn set_item(_key: &str, _value: &str) {}

    pub fn remove_item(_key: &str) {}

    pub fn cookies() -> Option<String> {
        None
    }
}
