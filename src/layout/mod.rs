//! Layout engine
//!
//! This module selects a rendering configuration for a density band and
//! target surface, balances content across columns, and produces a
//! `LayoutPlan` with everything JavaScript needs to render without doing
//! layout math of its own.

pub mod config;
pub mod columns;
pub mod plan;

pub use config::{select_config, LayoutConfig, Surface};
pub use columns::{balance_columns, ColumnPlan};
pub use plan::{LayoutEngine, LayoutPlan, SongHeader};
