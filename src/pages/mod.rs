//! Page components, one per route.

pub mod contact;
pub mod games;
pub mod home;
pub mod tutorial;
