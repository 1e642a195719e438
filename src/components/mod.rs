//! UI Components for the waste classifier application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Application title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image selection, preview and submission
//! - [`ResultSection`] - Classification result panel

mod header;
mod upload;
mod result;
mod footer;

pub use header::*;
pub use upload::*;
pub use result::*;
pub use footer::*;
