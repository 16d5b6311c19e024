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

//! `Interval` struct is a half-open range `[min, max)` on one axis.
//!
//! An `Interval` with `min >= max` is representable; operations that may
//! produce one (`intersection`) do so silently and callers check `valid`.

use crate::coordinate::{span, Area, Coord};
use core::cmp::{max, min};
use core::fmt;

/// Half-open interval `[min, max)`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Interval {
    /// Inclusive lower bound.
    pub min: Coord,
    /// Exclusive upper bound.
    pub max: Coord,
}

impl Interval {
    /// Constructor. Does not check `min < max`.
    #[must_use]
    pub const fn new(min: Coord, max: Coord) -> Self {
        Interval { min, max }
    }

    /// Whether the interval is non-empty.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.min < self.max
    }

    /// Tests whether self and other overlap. Touching endpoints do not.
    #[must_use]
    pub const fn intersects(&self, other: &Interval) -> bool {
        self.max > other.min && self.min < other.max
    }

    /// Length between min and max, zero or negative when not valid.
    #[must_use]
    pub fn size(&self) -> Area {
        span(self.min, self.max)
    }

    /// Smallest interval covering both.
    #[must_use]
    pub fn union(&self, other: &Interval) -> Interval {
        Interval::new(min(self.min, other.min), max(self.max, other.max))
    }

    /// Overlap of both, may not be valid.
    #[must_use]
    pub fn intersection(&self, other: &Interval) -> Interval {
        Interval::new(max(self.min, other.min), min(self.max, other.max))
    }

    /// Whether `point` lies in `[min, max)`.
    #[must_use]
    pub const fn contains(&self, point: Coord) -> bool {
        self.min <= point && point < self.max
    }

    /// Contains another `Interval`.
    #[must_use]
    pub const fn contains_interval(&self, other: &Interval) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use quickcheck::TestResult;

    #[test]
    fn test_touching_intervals_do_not_intersect() {
        let a = Interval::new(0, 5);
        let b = Interval::new(5, 10);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert!(!a.intersection(&b).valid());
        assert!(a.intersects(&Interval::new(4, 10)));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = Interval::new(0, 5);
        let b = Interval::new(3, 10);
        assert_eq!(a.union(&b), Interval::new(0, 10));
        assert_eq!(a.intersection(&b), Interval::new(3, 5));
        assert_eq!(a.intersection(&b).size(), 2);

        let disjoint = a.intersection(&Interval::new(7, 10));
        assert!(!disjoint.valid());
        assert_eq!(disjoint.size(), -2);
    }

    #[test]
    fn test_degenerate_intervals() {
        assert!(!Interval::new(3, 3).valid());
        assert!(!Interval::new(4, 3).valid());
        assert!(!Interval::new(3, 3).contains(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(-1, 7).to_string(), "Interval[-1, 7]");
    }

    #[quickcheck]
    fn test_half_open_containment(a: i32, b: i32) -> TestResult {
        let i = Interval::new(a.into(), b.into());
        if !i.valid() {
            return TestResult::discard();
        }
        TestResult::from_bool(i.contains(i.min) && !i.contains(i.max))
    }

    #[quickcheck]
    fn test_intersects_iff_intersection_valid(a: (i16, i16), b: (i16, i16)) -> TestResult {
        let a = Interval::new(a.0.into(), a.1.into());
        let b = Interval::new(b.0.into(), b.1.into());
        if !a.valid() || !b.valid() {
            return TestResult::discard();
        }
        TestResult::from_bool(a.intersects(&b) == a.intersection(&b).valid())
    }

    #[quickcheck]
    fn test_union_contains_both(a: (i16, i16), b: (i16, i16)) -> bool {
        let a = Interval::new(a.0.into(), a.1.into());
        let b = Interval::new(b.0.into(), b.1.into());
        let u = a.union(&b);
        u.min <= a.min && u.min <= b.min && u.max >= a.max && u.max >= b.max
    }
}
