//! URL query parameter access.
//!
//! Reads come from `window.location.search`; writes go through
//! `history.pushState` so the address bar updates without a page reload.
//! Requires a browser environment; off the `csr` feature the functions are
//! stubs.

#[cfg(test)]
#[path = "url_params_test.rs"]
mod url_params_test;

/// Read a query parameter from the current location.
pub fn get(param: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(param)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = param;
        None
    }
}

/// Set a query parameter on the current URL without reloading the page.
pub fn set(param: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        with_current_url(|url| url.search_params().set(param, value));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (param, value);
    }
}

/// Remove a query parameter from the current URL without reloading.
pub fn remove(param: &str) {
    #[cfg(feature = "csr")]
    {
        with_current_url(|url| url.search_params().delete(param));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = param;
    }
}

/// The short, shareable form of the current URL: final path segment plus
/// query string (e.g. `tutorial?step=3`).
pub fn display_url() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .map(|href| short_display(&href))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Apply an edit to the current URL and push the result into history.
#[cfg(feature = "csr")]
fn with_current_url(edit: impl FnOnce(&web_sys::Url)) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };
    edit(&url);
    let pushed = window
        .history()
        .and_then(|h| h.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href())));
    if pushed.is_err() {
        log::warn!("url: history update failed");
    }
}

/// Pure formatting behind [`display_url`]: keep the last path segment and
/// the query string.
fn short_display(href: &str) -> String {
    let (path, query) = match href.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (href, None),
    };
    let page = path.rsplit('/').next().unwrap_or(path);
    match query {
        Some(q) if !q.is_empty() => format!("{page}?{q}"),
        _ => page.to_owned(),
    }
}
