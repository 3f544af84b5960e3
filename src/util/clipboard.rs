//! Async clipboard access for the share button.

#![allow(clippy::unused_async)]

/// Copy `text` to the system clipboard.
///
/// Best-effort: returns `false` if the Clipboard API is unavailable or the
/// write is rejected. Requires a browser environment.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
