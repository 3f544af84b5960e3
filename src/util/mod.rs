//! Browser utilities: namespaced localStorage, URL query parameters, and
//! clipboard access. All best-effort — failures are logged and swallowed so
//! the in-memory state stays authoritative.

pub mod clipboard;
pub mod storage;
pub mod url_params;
