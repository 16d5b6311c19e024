#![no_std]
#![deny(missing_docs)]
//! Box algebra for incremental area coverage.
//!
//! Given the boxes that have already been fetched and a newly visible region,
//! compute a small set of disjoint boxes covering only what is missing, and
//! group them into a bounded number of requests with the least wasted area.
//!
//! `Interval` and `Box2D` are half-open and use integer coordinates on an
//! axis chosen by the caller. Operations never fail: an empty result is an
//! `Interval` or `Box2D` that is not `valid()`, or an empty `Vec`.
//! ```
//! use box_cover::box_2d::Box2D;
//! use box_cover::strategy::{BoxStrategy, DownloadStrategy};
//!
//! let fetched = [Box2D::new(0, 0, 100, 100)];
//! let viewport = Box2D::new(50, 50, 150, 150);
//!
//! let missing = viewport.subtract_all(&fetched);
//! assert_eq!(Box2D::total_size(&missing), 100 * 100 - 50 * 50);
//!
//! let requests = BoxStrategy.boxes(&viewport, &fetched, 4);
//! assert_eq!(Box2D::total_size(&requests), 100 * 100 - 50 * 50);
//! ```
//! `DownloadPlanner` wraps this for floating point viewports, see
//! [`planner`].

pub mod box_2d;
pub mod coordinate;
pub mod error;
pub mod interval;
pub mod normalized_dimension;
pub mod partition;
pub mod planner;
pub mod preferences;
pub mod strategy;

#[cfg(test)]
extern crate std;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

extern crate alloc;

pub use box_2d::Box2D;
pub use error::{CoverageError, Result};
pub use interval::Interval;
pub use partition::Partition;
