//! Session-scoped storage and the submission token nonce.
//!
//! The token is client-side theater carried over from the site design: an
//! opaque value duplicated in the hidden form field and in this store,
//! compared at submit time. It is a submission nonce, not a security
//! boundary - everything here is visible to and controllable by the
//! client.

use std::collections::HashMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

use crate::constants::form::TOKEN_BYTES;

/// Storage key for the submission token.
pub const TOKEN_KEY: &str = "eventrent_csrf_token";

/// In-process stand-in for session storage. Lives for the run of the app.
#[derive(Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Generates a fresh opaque token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
