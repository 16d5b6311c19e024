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

//! `Box2D`, a two dimensional half-open box, and the set algebra on boxes:
//! intersection, union, inverse, subtraction and area-preserving merge.
//!
//! ```
//! use box_cover::box_2d::Box2D;
//!
//! let viewport = Box2D::new(0, 0, 10, 10);
//! let fetched = [Box2D::new(0, 0, 6, 10), Box2D::new(6, 0, 10, 4)];
//!
//! let missing = Box2D::merge(&viewport.subtract_all(&fetched));
//!
//! assert_eq!(missing, vec![Box2D::new(6, 4, 10, 10)]);
//! ```

use crate::coordinate::{is_finite, Area, Coord, INFINITY, NEG_INFINITY};
use crate::interval::Interval;
use alloc::{vec, vec::Vec};
use core::fmt;

/// Axis aligned box, the product of an x and a y `Interval`.
///
/// Like `Interval`, a `Box2D` that is not `valid` is an ordinary value: it is
/// what `intersection` returns for disjoint boxes. `size` of such a box is
/// meaningless.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Box2D {
    /// X interval.
    pub x: Interval,
    /// Y interval.
    pub y: Interval,
}

impl Box2D {
    /// Constructor from (minx, miny, maxx, maxy).
    #[must_use]
    pub const fn new(min_x: Coord, min_y: Coord, max_x: Coord, max_y: Coord) -> Self {
        Box2D {
            x: Interval::new(min_x, max_x),
            y: Interval::new(min_y, max_y),
        }
    }

    /// Constructor from the x and y intervals.
    #[must_use]
    pub const fn from_intervals(x: Interval, y: Interval) -> Self {
        Box2D { x, y }
    }

    /// Whether the box has any area.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.x.valid() && self.y.valid()
    }

    /// Whether self and other share any area.
    #[must_use]
    pub const fn intersects(&self, other: &Box2D) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    /// Whether `other` lies entirely inside self.
    #[must_use]
    pub const fn contains_box(&self, other: &Box2D) -> bool {
        self.x.contains_interval(&other.x) && self.y.contains_interval(&other.y)
    }

    /// Whether the point lies inside the box.
    #[must_use]
    pub const fn contains(&self, x: Coord, y: Coord) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    /// Intersection, may not be valid.
    #[must_use]
    pub fn intersection(&self, other: &Box2D) -> Box2D {
        Box2D::from_intervals(self.x.intersection(&other.x), self.y.intersection(&other.y))
    }

    /// Smallest box covering self and other.
    #[must_use]
    pub fn union(&self, other: &Box2D) -> Box2D {
        Box2D::from_intervals(self.x.union(&other.x), self.y.union(&other.y))
    }

    /// Area of the box. Saturates instead of wrapping when a bound lies
    /// outside `[NEG_INFINITY, INFINITY]`.
    #[must_use]
    pub fn size(&self) -> Area {
        self.x.size().saturating_mul(self.y.size())
    }

    /// Area of the box, `None` if it does not fit in an `Area`.
    #[must_use]
    pub fn checked_size(&self) -> Option<Area> {
        self.x.size().checked_mul(self.y.size())
    }

    /// Whether every bound is a finite coordinate.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        is_finite(self.x.min)
            && is_finite(self.x.max)
            && is_finite(self.y.min)
            && is_finite(self.y.max)
    }

    /// The eight boxes around self that together with self tile the plane:
    /// top left, top, top right, left, right, bottom left, bottom, bottom right.
    /// Outward edges are `INFINITY` or `NEG_INFINITY`.
    #[must_use]
    pub const fn inverse(&self) -> [Box2D; 8] {
        let (x, y) = (self.x, self.y);
        [
            Box2D::new(NEG_INFINITY, y.max, x.min, INFINITY),
            Box2D::new(x.min, y.max, x.max, INFINITY),
            Box2D::new(x.max, y.max, INFINITY, INFINITY),
            Box2D::new(NEG_INFINITY, y.min, x.min, y.max),
            Box2D::new(x.max, y.min, INFINITY, y.max),
            Box2D::new(NEG_INFINITY, NEG_INFINITY, x.min, y.min),
            Box2D::new(x.min, NEG_INFINITY, x.max, y.min),
            Box2D::new(x.max, NEG_INFINITY, INFINITY, y.min),
        ]
    }

    /// Self minus other as up to eight disjoint boxes. If they do not
    /// intersect the result is exactly `[self]`.
    ///
    /// Self must be bounded: a bound at or beyond the sentinels would be cut
    /// off by `other.inverse()`.
    #[must_use]
    pub fn subtract(&self, other: &Box2D) -> Vec<Box2D> {
        debug_assert!(self.is_bounded(), "subtract from unbounded {}", self);
        if !self.valid() {
            return vec![];
        }
        if !self.intersects(other) {
            return vec![*self];
        }
        other
            .inverse()
            .iter()
            .map(|b| self.intersection(b))
            .filter(Box2D::valid)
            .collect()
    }

    /// Self minus every box in `others`. The resulting boxes are disjoint;
    /// how the remainder is split up depends on the order of `others`.
    #[must_use]
    pub fn subtract_all(&self, others: &[Box2D]) -> Vec<Box2D> {
        others.iter().fold(vec![*self], |remaining, other| {
            remaining.iter().flat_map(|b| b.subtract(other)).collect()
        })
    }

    /// Merge as many boxes as possible without increasing the total area.
    ///
    /// Each round folds the first remaining box with every other one whose
    /// union is no larger than the two areas together; boxes that do not fit
    /// go to the next round. This is O(n^2) and order sensitive, so it will
    /// not find every possible merge. Later rounds come first in the output.
    #[must_use]
    pub fn merge(boxes: &[Box2D]) -> Vec<Box2D> {
        let mut merged = Vec::new();
        let mut remaining = boxes.to_vec();

        while let Some((first, rest)) = remaining.split_first() {
            let mut first = *first;
            let mut kept = Vec::with_capacity(rest.len());
            for b in rest {
                let union = first.union(b);
                if union.size() <= first.size().saturating_add(b.size()) {
                    first = union;
                } else {
                    kept.push(*b);
                }
            }
            merged.push(first);
            remaining = kept;
        }

        merged.reverse();
        merged
    }

    /// Smallest box covering every box, `None` for no boxes.
    #[must_use]
    pub fn envelope(boxes: &[Box2D]) -> Option<Box2D> {
        boxes.iter().copied().reduce(|a, b| a.union(&b))
    }

    /// Sum of the areas of `boxes`.
    #[must_use]
    pub fn total_size(boxes: &[Box2D]) -> Area {
        boxes.iter().fold(0, |acc, b| acc.saturating_add(b.size()))
    }
}

impl fmt::Display for Box2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Box[{},{},{},{}]",
            self.x.min, self.y.min, self.x.max, self.y.max
        )
    }
}
