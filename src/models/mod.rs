//! Models module for the chord sheet layout engine
//!
//! This module contains the data models for song content and the
//! derived analysis snapshots.

pub mod content;
pub mod metrics;

// Re-export commonly used types
pub use content::*;
pub use metrics::*;
