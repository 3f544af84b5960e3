//! Namespaced localStorage access.
//!
//! All portal entries share one key prefix so `clear_all` can sweep them
//! without touching other origin data. Values are JSON-encoded. Every
//! operation is best-effort: a quota error or disabled storage logs a
//! warning and the caller continues. Requires a browser environment; off
//! the `csr` feature the functions are stubs.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

const STORAGE_PREFIX: &str = "zelda_portal_";

/// The full localStorage key for a logical key.
fn scoped(key: &str) -> String {
    format!("{STORAGE_PREFIX}{key}")
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// JSON-encode `value` and store it under the namespaced `key`.
pub fn save<T: serde::Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Ok(json) = serde_json::to_string(value) else {
            log::warn!("storage: could not encode {key}");
            return;
        };
        match local_storage() {
            Some(storage) => {
                if storage.set_item(&scoped(key), &json).is_err() {
                    log::warn!("storage: write failed for {key}");
                }
            }
            None => log::warn!("storage: unavailable, dropped {key}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Load and JSON-decode the value stored under the namespaced `key`.
///
/// Returns `None` if the entry is missing, storage is unavailable, or the
/// stored text does not decode.
pub fn load<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let json = local_storage()?.get_item(&scoped(key)).ok().flatten()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("storage: corrupt entry for {key}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Remove the entry stored under the namespaced `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&scoped(key));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Remove every portal entry, leaving other origin data alone.
pub fn clear_all() {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let len = storage.length().unwrap_or(0);
        let keys: Vec<String> = (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .filter(|k| k.starts_with(STORAGE_PREFIX))
            .collect();
        for key in keys {
            let _ = storage.remove_item(&key);
        }
    }
}
