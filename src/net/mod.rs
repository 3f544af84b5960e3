//! Data types and fetchers for the portal's static data sources.

pub mod api;
pub mod types;
