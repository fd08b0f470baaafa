//! Session Cookies
//!
//! The signed-in employee is kept in two cookies: `session_user` holds the
//! employee id and `session_name` the display name. Both live for one day.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

pub const SESSION_USER: &str = "session_user";
pub const SESSION_NAME: &str = "session_name";
const MAX_AGE_SECS: u32 = 24 * 60 * 60;

/// Signed-in employee
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub emp_id: i64,
    pub name: String,
}

/// Parse an employee id typed into the sign-in form
pub fn parse_emp_id_input(input: &str) -> Result<i64, String> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Please enter a valid employee ID".to_string());
    }
    input
        .parse::<i64>()
        .map_err(|_| "Please enter a valid employee ID".to_string())
}

/// Find one cookie in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Session held in a `document.cookie` string, if `session_user` is a valid id
pub fn session_from_cookies(cookies: &str) -> Option<Session> {
    let emp_id = cookie_value(cookies, SESSION_USER)?.parse::<i64>().ok()?;
    let name = cookie_value(cookies, SESSION_NAME).unwrap_or_default();
    Some(Session { emp_id, name })
}

fn set_cookie_header(name: &str, value: &str, max_age: u32) -> String {
    format!(
        "{}={}; max-age={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(value, NON_ALPHANUMERIC),
        max_age
    )
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

fn write_cookie(header: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(header).is_err() {
            web_sys::console::error_1(&"[SESSION] Failed to write cookie".into());
        }
    }
}

/// Current session from the browser's cookies
pub fn read_session() -> Option<Session> {
    let cookies = html_document()?.cookie().ok()?;
    session_from_cookies(&cookies)
}

pub fn write_session(session: &Session) {
    write_cookie(&set_cookie_header(SESSION_USER, &session.emp_id.to_string(), MAX_AGE_SECS));
    write_cookie(&set_cookie_header(SESSION_NAME, &session.name, MAX_AGE_SECS));
}

pub fn clear_session() {
    write_cookie(&set_cookie_header(SESSION_USER, "", 0));
    write_cookie(&set_cookie_header(SESSION_NAME, "", 0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emp_id_input() {
        assert_eq!(parse_emp_id_input("1007"), Ok(1007));
        assert_eq!(parse_emp_id_input(" 1007 "), Ok(1007));
        assert!(parse_emp_id_input("").is_err());
        assert!(parse_emp_id_input("abc").is_err());
        assert!(parse_emp_id_input("12abc").is_err());
        assert!(parse_emp_id_input("-5").is_err());
        assert!(parse_emp_id_input("99999999999999999999999").is_err());
    }

    #[test]
    fn test_session_from_cookies() {
        let cookies = "theme=dark; session_user=1007; session_name=Grace%20Hopper";
        assert_eq!(
            session_from_cookies(cookies),
            Some(Session { emp_id: 1007, name: "Grace Hopper".to_string() })
        );
    }

    #[test]
    fn test_session_requires_numeric_user() {
        assert_eq!(session_from_cookies(""), None);
        assert_eq!(session_from_cookies("session_name=Grace"), None);
        assert_eq!(session_from_cookies("session_user=abc"), None);
        assert_eq!(session_from_cookies("session_user="), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(cookie_value("xsession_user=1; session_user=2", SESSION_USER), Some("2".to_string()));
    }

    #[test]
    fn test_set_cookie_header_encodes_value() {
        let header = set_cookie_header(SESSION_NAME, "Grace Hopper", MAX_AGE_SECS);
        assert_eq!(header, "session_name=Grace%20Hopper; max-age=86400; path=/; SameSite=Lax");
        let decoded = cookie_value("session_name=Grace%20Hopper", SESSION_NAME);
        assert_eq!(decoded.as_deref(), Some("Grace Hopper"));
    }
}
