//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Strategies for choosing which boxes to request so that a region becomes
//! covered, given the boxes that are already present.
//!
//! ```
//! use box_cover::box_2d::Box2D;
//! use box_cover::strategy::{BoxStrategy, DownloadStrategy};
//!
//! let region = Box2D::new(0, 0, 10, 10);
//! let present = [Box2D::new(2, 2, 8, 8)];
//!
//! let boxes = BoxStrategy.boxes(&region, &present, 2);
//!
//! assert!(boxes.len() <= 2);
//! assert!(boxes.iter().all(|b| region.contains_box(b)));
//! assert!(region.subtract_all(&present).iter().all(|m| m.subtract_all(&boxes).is_empty()));
//! ```

use crate::box_2d::Box2D;
use crate::error::CoverageError;
use crate::partition::Partition;
use alloc::{boxed::Box, vec, vec::Vec};
use core::cmp::min;
use core::fmt;
use core::str::FromStr;
use tracing::{debug, trace};

/// Number of partitions kept between steps of `optimal_partition`.
pub const BEAM_WIDTH: usize = 64;

/// Finds the boxes to request for a region.
pub trait DownloadStrategy {
    /// Boxes, at most `max_boxes` of them, that cover the part of `region`
    /// not covered by `present`.
    fn boxes(&self, region: &Box2D, present: &[Box2D], max_boxes: usize) -> Vec<Box2D>;

    /// Name the strategy is configured by.
    fn name(&self) -> &'static str;
}

/// Subtracts the present boxes, merges what is left and, if that is still
/// too many boxes, groups them with the least wasted area.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxStrategy;

impl DownloadStrategy for BoxStrategy {
    fn boxes(&self, region: &Box2D, present: &[Box2D], max_boxes: usize) -> Vec<Box2D> {
        if !region.valid() || max_boxes == 0 {
            return vec![];
        }
        let existing: Vec<Box2D> = present
            .iter()
            .filter(|b| b.valid() && b.intersects(region))
            .copied()
            .collect();

        let to_fetch = region.subtract_all(&existing);
        let merged = Box2D::merge(&to_fetch);
        debug!(
            "{}: {} present, {} missing, {} after merge",
            region,
            existing.len(),
            to_fetch.len(),
            merged.len()
        );

        if merged.len() > max_boxes {
            optimal_partition(max_boxes, &merged)
        } else {
            merged
        }
    }

    fn name(&self) -> &'static str {
        "BoxStrategy"
    }
}

/// Requests the envelope of everything missing as a single box.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleStrategy;

impl DownloadStrategy for SimpleStrategy {
    fn boxes(&self, region: &Box2D, present: &[Box2D], max_boxes: usize) -> Vec<Box2D> {
        if !region.valid() || max_boxes == 0 {
            return vec![];
        }
        let existing: Vec<Box2D> = present
            .iter()
            .filter(|b| b.valid() && b.intersects(region))
            .copied()
            .collect();
        let missing = Box2D::envelope(&region.subtract_all(&existing));
        debug!("{}: missing envelope {:?}", region, missing);
        missing.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}

/// Group `boxes` into at most `max_parts` enclosing boxes with the least
/// wasted area.
///
/// Finding the best grouping is a set partitioning problem, so this is a beam
/// search: every box is tried in every existing group and in a new group, and
/// only the best `BEAM_WIDTH` partitions survive each step.
#[must_use]
pub fn optimal_partition(max_parts: usize, boxes: &[Box2D]) -> Vec<Box2D> {
    if max_parts == 0 {
        return vec![];
    }
    let mut beam = vec![Partition::new()];
    for b in boxes {
        let mut next = Vec::with_capacity(beam.len() * (max_parts + 1));
        for p in &beam {
            for index in 0..=min(p.len(), max_parts - 1) {
                next.push(p.add(*b, index));
            }
        }
        next.sort();
        next.truncate(BEAM_WIDTH);
        beam = next;
    }

    match beam.into_iter().next() {
        Some(best) => {
            trace!(
                "best of {} boxes into {} parts: area {} waste {}",
                boxes.len(),
                best.len(),
                best.area(),
                best.waste()
            );
            best.into_boxes()
        }
        None => vec![],
    }
}

/// The available strategies.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StrategyKind {
    /// `BoxStrategy`.
    Box,
    /// `SimpleStrategy`.
    Simple,
}

impl StrategyKind {
    /// Names of every strategy.
    #[must_use]
    pub const fn all() -> [&'static str; 2] {
        ["BoxStrategy", "SimpleStrategy"]
    }

    /// The strategy for this kind.
    #[must_use]
    pub fn strategy(self) -> Box<dyn DownloadStrategy> {
        match self {
            StrategyKind::Box => Box::new(BoxStrategy),
            StrategyKind::Simple => Box::new(SimpleStrategy),
        }
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        StrategyKind::Box
    }
}

impl FromStr for StrategyKind {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BoxStrategy" => Ok(StrategyKind::Box),
            "SimpleStrategy" => Ok(StrategyKind::Simple),
            _ => Err(CoverageError::MalformedPreference {
                name: "strategy",
                value: s.into(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Box => BoxStrategy.name(),
            StrategyKind::Simple => SimpleStrategy.name(),
        };
        f.write_str(name)
    }
}
