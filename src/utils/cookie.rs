//! Session cookie formatting and parsing.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Attributes of the cookie carrying the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    max_age: i64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age: i64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age,
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value storing `token`.
    pub fn issue(&self, token: &str) -> String {
        self.format(token, self.max_age)
    }

    /// `Set-Cookie` value expiring the session.
    pub fn clear(&self) -> String {
        self.format("", 0)
    }

    /// Reads the session token from the `Cookie` headers.
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .find_map(|cookie| {
                let (key, value) = cookie.trim().split_once('=')?;
                (key == self.name && !value.is_empty()).then(|| value.to_string())
            })
    }

    fn format(&self, value: &str, max_age: i64) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            self.name, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
