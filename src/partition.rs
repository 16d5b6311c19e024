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

//! Contains `Partition`, a grouping of boxes into at most a few enclosing
//! boxes. `Partition` has `Ord` so is sortable, best grouping first.

use crate::box_2d::Box2D;
use alloc::vec::Vec;
use core::cmp::{Ord, Ordering};

/// Boxes grouped into enclosing boxes.
///
/// `enclosing_area` is the area of the boxes that were added, i.e. what is
/// actually needed; `area` is the area of the groups, i.e. what would be
/// requested. The difference is wasted area.
///
/// Equality is by score (waste, `enclosing_area`, number of groups), not by
/// the groups themselves.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    boxes: Vec<Box2D>,
    /// Sum of the areas of every box added so far.
    pub enclosing_area: f64,
}

impl Partition {
    /// An empty partition.
    #[must_use]
    pub fn new() -> Self {
        Partition::default()
    }

    /// Returns a new partition with `b` added to the group at `index`, or
    /// starting a new group if there is no group at `index`.
    #[must_use]
    pub fn add(&self, b: Box2D, index: usize) -> Partition {
        let mut p = self.clone();
        match p.boxes.get_mut(index) {
            Some(group) => *group = group.union(&b),
            None => p.boxes.push(b),
        }
        p.enclosing_area += b.size() as f64;
        p
    }

    /// The enclosing box of every group.
    #[must_use]
    pub fn boxes(&self) -> &[Box2D] {
        &self.boxes
    }

    /// Consumes the partition returning its groups.
    #[must_use]
    pub fn into_boxes(self) -> Vec<Box2D> {
        self.boxes
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// No groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Total area of the groups.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.boxes.iter().map(|b| b.size() as f64).sum()
    }

    /// Area requested but not needed.
    #[must_use]
    pub fn waste(&self) -> f64 {
        self.area() - self.enclosing_area
    }
}

impl Ord for Partition {
    fn cmp(&self, other: &Self) -> Ordering {
        let w_cmp = self.waste().total_cmp(&other.waste());
        if w_cmp != Ordering::Equal {
            return w_cmp;
        }
        let e_cmp = other.enclosing_area.total_cmp(&self.enclosing_area);
        if e_cmp != Ordering::Equal {
            return e_cmp;
        }
        self.len().cmp(&other.len())
    }
}

impl PartialOrd for Partition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Partition {}
