// ABOUTME: Session cookie helpers: read the adminToken cookie and build Set-Cookie values
// ABOUTME: Issue and clear share name, Path and SameSite so the browser replaces the same cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use crate::constants::session;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Extract a cookie value from request headers
///
/// All `Cookie` headers are scanned. An empty value is treated as absent so a
/// browser still holding a cleared cookie is handled like one without it.
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

/// The admin session token from the request, if any
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    get_cookie_value(headers, session::COOKIE_NAME)
}

/// `Set-Cookie` value installing a session token for the session lifetime
#[must_use]
pub fn session_cookie(token: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}{secure}",
        session::COOKIE_NAME,
        session::TTL_SECONDS,
    )
}

/// `Set-Cookie` value removing the session cookie
#[must_use]
pub fn clear_session_cookie(secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{}=; HttpOnly; SameSite=Strict; Path=/; Expires={}; Max-Age=0{secure}",
        session::COOKIE_NAME,
        session::EPOCH_EXPIRES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        headers
    }

    #[test]
    fn test_finds_cookie_among_others() {
        let headers = headers_with(&["theme=dark; adminToken=abc.def.ghi; lang=en"]);
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scans_every_cookie_header() {
        let headers = headers_with(&["theme=dark", "adminToken=tok"]);
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let headers = headers_with(&["adminToken="]);
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let headers = headers_with(&["xadminToken=nope; adminTokens=nope"]);
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_issue_cookie_attributes() {
        let cookie = session_cookie("tok", false);
        assert_eq!(
            cookie,
            "adminToken=tok; HttpOnly; SameSite=Strict; Path=/; Max-Age=86400"
        );
        assert!(session_cookie("tok", true).ends_with("; Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_in_the_past() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("adminToken=;"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
