//! Cookie lookup for the CSRF token.
//!
//! Reads `document.cookie` in the browser. Parsing is split out so it can be
//! tested against literal cookie strings.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find `name` in a `document.cookie`-style string and return its
/// URI-decoded value. The first matching entry wins; a value that fails to
/// decode is returned raw.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |v| v.into_owned()))
}

/// Read a cookie from the current document. `None` outside the browser or
/// when the cookie is absent.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = doc.cookie().ok()?;
        cookie_value(&cookies, name)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
