//! Error types
//!
//! The public widget surface never raises; it degrades silently.
//! These types exist for the internal seams, where a handler wants to
//! distinguish "nothing to do" from "the region is gone", and for
//! tests asserting on the teardown paths.

use thiserror::Error;

/// Failure to reach the scrollable content region
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    /// The content region was unmounted while a handle was still live
    #[error("content region detached")]
    Detached,
}
