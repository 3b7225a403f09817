//! Session cookie detection used to gate product sheets.
//!
//! Only the presence of the session cookie is checked here; issuing and
//! validating the token belongs to the CMS login flow.

use axum::http::{HeaderMap, header::COOKIE};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

impl AuthStatus {
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        let is_authenticated = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|header| cookie_value(header, cookie_name).is_some_and(|v| !v.is_empty()));
        Self { is_authenticated }
    }
}

/// Value of `name` in a `Cookie` header (`a=1; b=2`).
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}


#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        assert_eq!(cookie_value("theme=dark; foodbook_session=abc123; x=1", "foodbook_session"), Some("abc123"));
        assert_eq!(cookie_value("foodbook_session_old=1", "foodbook_session"), None);
        assert_eq!(cookie_value("", "foodbook_session"), None);
    }

    #[test]
    fn empty_cookie_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("foodbook_session="));
        assert!(!AuthStatus::from_headers(&headers, "foodbook_session").is_authenticated);
    }

    #[test]
    fn any_cookie_header_may_carry_the_session() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("foodbook_session=\"t0k\""));
        assert!(AuthStatus::from_headers(&headers, "foodbook_session").is_authenticated);
        assert!(!AuthStatus::from_headers(&HeaderMap::new(), "foodbook_session").is_authenticated);
    }
}
