//! External communication and asynchronous file services.
//!
//! # Services
//!
//! - [`predict`] - Image submission to the classification endpoint
//! - [`preview`] - Local thumbnail derivation via `FileReader`

pub mod predict;
pub mod preview;

pub use predict::*;
pub use preview::*;
