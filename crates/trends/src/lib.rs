//! `stocklens-trends`
//!
//! **Responsibility:** the external trend-popularity boundary.
//!
//! The reporting pipeline only ever sees the narrow [`TrendSource`]
//! contract; concrete providers (and their rate limits) stay outside the
//! core. No network code lives in this workspace.

pub mod cache;
pub mod source;

pub use cache::CachedTrendSource;
pub use source::{StaticTrendSource, TrendError, TrendPoint, TrendSource};
