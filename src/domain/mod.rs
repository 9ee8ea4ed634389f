//! Domain layer for glocate.
//!
//! Holds the error taxonomy shared by every other layer. Path strings are the
//! only other domain value and stay plain `String`s, because the external search
//! tool reports them as text and filtering is defined on string prefixes.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases

pub mod error;

pub use error::{GlocateError, Result};
