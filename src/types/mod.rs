// Shared type definitions for sessionfiddle.
// Each submodule defines types used across the library.

pub mod errors;
pub mod session;
pub mod settings;
pub mod tab;
