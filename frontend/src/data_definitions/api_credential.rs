//! Credential attached to calls against the Weave API.

use dioxus::prelude::*;

/// Token of the signed in user; `None` until a login flow sets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiCredential {
    pub token: Signal<Option<String>>,
}

impl ApiCredential {
    pub fn current(&self) -> Option<String> {
        self.token.peek().clone()
    }
}
