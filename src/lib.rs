//! sessionfiddle — tools for a Firefox session store.
//!
//! Tidies the tab-group layout of a session into a non-overlapping grid and
//! converts tab groups into uzbl session files. This library crate exposes all
//! modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
