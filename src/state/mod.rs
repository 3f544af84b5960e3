//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`tutorial`, `games`, `contact`) so individual
//! pages can depend on small focused models. Everything here is pure — no
//! browser access — so the logic is exercised by native unit tests; the
//! pages wire these models to signals, storage, and the URL.

pub mod contact;
pub mod games;
pub mod tutorial;
