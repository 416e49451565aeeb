//! # commitgrid Core
//!
//! Pure pipeline logic: aggregation, leveling, heatmap building, the
//! recent-activity feed projection, and the [`service::ContributionService`]
//! that orchestrates fetch → cache → aggregate for a presenter.
//!
//! ## Architecture
//! - Depends only on `commitgrid-domain` and `commitgrid-common`
//! - All transformation functions are synchronous and free of I/O;
//!   the only suspension point is the network fetch behind the
//!   [`ports::ActivitySource`] port

pub mod aggregate;
pub mod feed;
pub mod heatmap;
pub mod level;
pub mod ports;
pub mod service;

pub use aggregate::aggregate;
pub use heatmap::build;
pub use level::{apply_levels, level_for};
pub use ports::ActivitySource;
pub use service::ContributionService;
