//! Coarse device classification from the User-Agent header.

use axum::http::{HeaderMap, header};

/// Returns true when the request looks like it came from a mobile browser.
///
/// Only used to pick between a banner's desktop and mobile click-through
/// targets, so a keyword check is sufficient; misclassification falls back
/// to the desktop URL.
pub fn is_mobile_request(headers: &HeaderMap) -> bool {
    let Some(user_agent) = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    const MOBILE_MARKERS: [&str; 4] = ["Mobile", "Android", "iPhone", "iPad"];
    MOBILE_MARKERS.iter().any(|m| user_agent.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_ua(ua: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(ua).unwrap());
        headers
    }

    #[test]
    fn test_mobile_user_agents() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
        assert!(is_mobile_request(&headers_with_ua(ua)));

        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/120 Mobile Safari";
        assert!(is_mobile_request(&headers_with_ua(ua)));
    }

    #[test]
    fn test_desktop_user_agent() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) Chrome/120 Safari/537.36";
        assert!(!is_mobile_request(&headers_with_ua(ua)));
    }

    #[test]
    fn test_missing_user_agent_defaults_to_desktop() {
        assert!(!is_mobile_request(&HeaderMap::new()));
    }
}
